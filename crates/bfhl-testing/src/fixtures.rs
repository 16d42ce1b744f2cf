//! Sample service responses.

use serde_json::{Value, json};

/// Response for input `{"data": ["A", "B", "1"]}`.
pub fn classified_response() -> Value {
    json!({
        "alphabets": ["A", "B"],
        "numbers": ["1"],
        "highest_lowercase_alphabet": [],
    })
}

/// Full body as the service sends it, including identity and file fields.
pub fn full_service_response() -> Value {
    json!({
        "is_success": true,
        "user_id": "john_doe_17091999",
        "email": "john@xyz.com",
        "roll_number": "ABCD123",
        "numbers": ["1", "334", "4"],
        "alphabets": ["M", "B", "z"],
        "highest_lowercase_alphabet": ["z"],
        "file_valid": true,
        "file_mime_type": "image/png",
        "file_size_kb": 400.0,
    })
}

/// Body of a request the service could not process.
pub fn service_failure_response() -> Value {
    json!({
        "is_success": false,
        "error": "'NoneType' object is not iterable",
    })
}

pub const SAMPLE_INPUT: &str = r#"{"data": ["A", "B", "1"]}"#;

pub const SAMPLE_MIXED_INPUT: &str = r#"{"data": ["M", "1", "334", "4", "B", "z"]}"#;
