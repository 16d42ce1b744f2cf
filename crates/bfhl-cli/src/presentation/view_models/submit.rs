use bfhl_engine::DisplayRepresentation;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::presentation::views::SubmissionView;

#[derive(Debug, Serialize)]
pub struct SubmissionViewModel {
    pub endpoint: String,
    pub request: RequestSummary,
    /// Keys of the applied filters, in catalog order
    pub filters: Vec<String>,
    pub response: Map<String, Value>,
    pub display: DisplayRepresentation,
}

#[derive(Debug, Serialize)]
pub struct RequestSummary {
    pub items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_bytes: Option<usize>,
}

impl fmt::Display for SubmissionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SubmissionView::new(self))
    }
}
