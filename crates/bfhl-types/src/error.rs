use std::fmt;
use std::path::PathBuf;

/// Why a RawInput could not be turned into a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Text is not valid JSON
    Malformed(String),

    /// JSON parsed, but the top level is not an object
    NotAnObject,

    /// Object has no `data` member, or it is not an array
    MissingData,

    /// An element of `data` is neither a string nor a number
    InvalidItem { index: usize, found: &'static str },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed(msg) => write!(f, "malformed JSON: {}", msg),
            InputError::NotAnObject => write!(f, "expected a JSON object"),
            InputError::MissingData => write!(f, "expected a `data` array"),
            InputError::InvalidItem { index, found } => {
                write!(f, "data[{}] must be a string or number, found {}", index, found)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Transport-level cause of a failed request. Kept for logs; users see a
/// single collapsed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Network(msg) => write!(f, "network error: {}", msg),
            RequestFailure::Status(code) => write!(f, "server returned HTTP {}", code),
            RequestFailure::Decode(msg) => write!(f, "could not decode response: {}", msg),
        }
    }
}

/// Result type for submissions
pub type SubmissionResult<T> = std::result::Result<T, SubmissionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// RawInput rejected before any network activity
    InvalidInput(InputError),

    /// Network failure, non-2xx status, or undecodable body
    RequestFailed(RequestFailure),
}

impl SubmissionError {
    /// Message shown in the shared error slot.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::InvalidInput(_) => "Invalid JSON input.",
            SubmissionError::RequestFailed(_) => "Request failed.",
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SubmissionError::InvalidInput(_))
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, SubmissionError::RequestFailed(_))
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::InvalidInput(err) => write!(f, "Invalid input: {}", err),
            SubmissionError::RequestFailed(err) => write!(f, "Request failed: {}", err),
        }
    }
}

impl std::error::Error for SubmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmissionError::InvalidInput(err) => Some(err),
            SubmissionError::RequestFailed(_) => None,
        }
    }
}

impl From<InputError> for SubmissionError {
    fn from(err: InputError) -> Self {
        SubmissionError::InvalidInput(err)
    }
}

impl From<RequestFailure> for SubmissionError {
    fn from(err: RequestFailure) -> Self {
        SubmissionError::RequestFailed(err)
    }
}

/// Error raised while collecting a file for upload
#[derive(Debug)]
pub enum CollectorError {
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CollectorError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CollectorError::FileRead { .. } => "Could not read file.",
        }
    }
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectorError::FileRead { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CollectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectorError::FileRead { source, .. } => Some(source),
        }
    }
}
