use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::presentation::views::{ConfigInitView, ConfigView};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    /// Effective endpoint after flag and environment overrides
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
    pub default_filters: Vec<String>,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ConfigView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: PathBuf,
    pub overwritten: bool,
    pub endpoint: String,
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ConfigInitView::new(self))
    }
}
