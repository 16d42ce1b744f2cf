use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

// --------------------------------------------------------
// Config Show View
// --------------------------------------------------------

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = if self.data.exists { "" } else { " (not found, using defaults)" };
        writeln!(f, "{:<17} {}{}", "Config file:", self.data.path.display(), source)?;
        writeln!(f, "{:<17} {}", "Endpoint:", self.data.endpoint)?;

        match self.data.timeout_secs {
            Some(secs) => writeln!(f, "{:<17} {}s", "Timeout:", secs)?,
            None => writeln!(f, "{:<17} none", "Timeout:")?,
        }

        if self.data.default_filters.is_empty() {
            writeln!(f, "{:<17} none", "Default filters:")
        } else {
            writeln!(
                f,
                "{:<17} {}",
                "Default filters:",
                self.data.default_filters.join(",")
            )
        }
    }
}

// --------------------------------------------------------
// Config Init View
// --------------------------------------------------------

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<10} {}", "Path:", self.data.path.display())?;
        writeln!(f, "{:<10} {}", "Endpoint:", self.data.endpoint)
    }
}
