pub mod error;
pub mod filter;
pub mod input;
pub mod response;

pub use error::{CollectorError, InputError, RequestFailure, SubmissionError, SubmissionResult};
pub use filter::{FilterField, FilterSelection, FilteredView, UnknownFilterField};
pub use input::{EncodedFile, RawInput, RequestPayload};
pub use response::{FieldValue, ResponsePayload};

/// Endpoint the service listens on when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8001/bfhl";
