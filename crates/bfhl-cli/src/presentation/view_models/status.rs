use serde::Serialize;
use std::fmt;

use crate::presentation::views::StatusView;

#[derive(Debug, Serialize)]
pub struct StatusViewModel {
    pub endpoint: String,
    pub operation_code: i64,
}

impl fmt::Display for StatusViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", StatusView::new(self))
    }
}
