pub mod client;
pub mod collector;
pub mod config;
pub mod error;
pub mod session;
pub mod transport;

pub use client::{prepare_request, submit};
pub use collector::read_encoded_file;
pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use session::{FormSession, PendingSubmission, SubmissionOutcome};
pub use transport::{ReqwestTransport, Transport};
