use std::fmt;

use crate::presentation::view_models::FormReplyViewModel;

pub struct FormReplyView<'a> {
    data: &'a FormReplyViewModel,
}

impl<'a> FormReplyView<'a> {
    pub fn new(data: &'a FormReplyViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FormReplyView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data {
            FormReplyViewModel::InputSet { chars } => {
                writeln!(f, "Input updated ({} chars).", chars)
            }
            FormReplyViewModel::FileSelected { path, bytes } => {
                writeln!(f, "File selected: {} ({} bytes).", path, bytes)
            }
            FormReplyViewModel::FileCleared => writeln!(f, "File cleared."),
            FormReplyViewModel::FiltersSet { filters } => {
                if filters.is_empty() {
                    writeln!(f, "Filters cleared.")
                } else {
                    writeln!(f, "Filters: {}", filters.join(","))
                }
            }
            FormReplyViewModel::Submitted { fields, .. } => {
                writeln!(f, "Response received ({} fields).", fields)
            }
            FormReplyViewModel::Display { display } => writeln!(f, "{}", display),
            FormReplyViewModel::State(state) => {
                let input = if state.input.is_empty() {
                    "(empty)"
                } else {
                    state.input.as_str()
                };
                writeln!(f, "{:<10} {}", "Input:", input)?;
                match state.file_bytes {
                    Some(bytes) => writeln!(f, "{:<10} {} bytes", "File:", bytes)?,
                    None => writeln!(f, "{:<10} none", "File:")?,
                }
                if state.filters.is_empty() {
                    writeln!(f, "{:<10} none", "Filters:")?;
                } else {
                    writeln!(f, "{:<10} {}", "Filters:", state.filters.join(","))?;
                }
                let response = match (state.has_response, state.filtered) {
                    (false, _) => "none",
                    (true, false) => "received",
                    (true, true) => "received, filtered",
                };
                writeln!(f, "{:<10} {}", "Response:", response)?;
                if let Some(error) = &state.error {
                    writeln!(f, "{:<10} {}", "Error:", error)?;
                }
                Ok(())
            }
            FormReplyViewModel::Help { commands, filters } => {
                writeln!(f, "Commands:")?;
                for command in commands {
                    writeln!(f, "  {:<16} {}", command.usage, command.description)?;
                }
                writeln!(f, "Filters:")?;
                for filter in filters {
                    writeln!(f, "  {:<28} {}", filter.key, filter.label)?;
                }
                Ok(())
            }
            FormReplyViewModel::Notice { message } | FormReplyViewModel::Error { message } => {
                writeln!(f, "{}", message)
            }
        }
    }
}
