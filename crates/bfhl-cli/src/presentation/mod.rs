//! # Presentation Layer
//!
//! Console output for every command follows one unidirectional flow:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> View       --> stdout
//! ```
//!
//! ## Rules
//!
//! ### 1. ViewModels carry raw data
//! Counts stay numbers and the rendered display stays a tagged structure, so
//! `--format json` is usable as an API.
//!
//! ### 2. Views only lay out
//! A View borrows its ViewModel and implements `Display`. It never looks at
//! the session, config or transport.
//!
//! ### 3. JSON is always the full ViewModel
//! Text output may drop fields (the request summary, the raw response); JSON
//! output never does.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, OutputFormat, StatusBadge, StatusLevel};
