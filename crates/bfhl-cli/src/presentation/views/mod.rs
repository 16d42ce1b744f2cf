mod config;
mod form;
mod status;
mod submit;

pub use config::{ConfigInitView, ConfigView};
pub use form::FormReplyView;
pub use status::StatusView;
pub use submit::SubmissionView;
