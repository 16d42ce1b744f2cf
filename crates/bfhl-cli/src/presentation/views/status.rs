use std::fmt;

use crate::presentation::view_models::StatusViewModel;

pub struct StatusView<'a> {
    data: &'a StatusViewModel,
}

impl<'a> StatusView<'a> {
    pub fn new(data: &'a StatusViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for StatusView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<16} {}", "Endpoint:", self.data.endpoint)?;
        writeln!(f, "{:<16} {}", "Operation code:", self.data.operation_code)
    }
}
