pub mod config;
pub mod form;
pub mod status;
pub mod submit;

pub use config::{present_config, present_config_init};
pub use form::{present_form_help, present_form_reply, present_form_state};
pub use status::present_status;
pub use submit::present_submission;
