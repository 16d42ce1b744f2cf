pub mod common;
pub mod config;
pub mod form;
pub mod result;
pub mod status;
pub mod submit;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use form::{FilterOption, FormCommandHelp, FormReplyViewModel, FormStateViewModel};
pub use result::CommandResultViewModel;
pub use status::StatusViewModel;
pub use submit::{RequestSummary, SubmissionViewModel};
