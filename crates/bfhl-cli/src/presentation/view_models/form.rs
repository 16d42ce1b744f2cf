use bfhl_engine::DisplayRepresentation;
use serde::Serialize;
use std::fmt;

use crate::presentation::views::FormReplyView;

/// One reply of the interactive form, emitted per input line.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormReplyViewModel {
    InputSet {
        chars: usize,
    },
    FileSelected {
        path: String,
        bytes: usize,
    },
    FileCleared,
    FiltersSet {
        filters: Vec<String>,
    },
    Submitted {
        generation: u64,
        fields: usize,
    },
    Display {
        display: DisplayRepresentation,
    },
    State(FormStateViewModel),
    Help {
        commands: Vec<FormCommandHelp>,
        filters: Vec<FilterOption>,
    },
    /// Informational message that changed nothing
    Notice {
        message: String,
    },
    /// Content of the session's error slot
    Error {
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct FormStateViewModel {
    pub input: String,
    pub file_bytes: Option<usize>,
    pub filters: Vec<String>,
    pub has_response: bool,
    pub filtered: bool,
    pub error: Option<String>,
    pub generations: u64,
}

#[derive(Debug, Serialize)]
pub struct FormCommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FilterOption {
    pub key: &'static str,
    pub label: &'static str,
}

impl fmt::Display for FormReplyViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", FormReplyView::new(self))
    }
}
