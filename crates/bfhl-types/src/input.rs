use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InputError;

/// Free-form text the user typed. Stored verbatim and only parsed when a
/// submission is prepared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput(String);

impl RawInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the text and extract the `data` array.
    ///
    /// Strings are kept as-is; numbers become their decimal text.
    pub fn parse_data(&self) -> Result<Vec<String>, InputError> {
        let value: Value =
            serde_json::from_str(&self.0).map_err(|e| InputError::Malformed(e.to_string()))?;

        let object = value.as_object().ok_or(InputError::NotAnObject)?;
        let items = object
            .get("data")
            .and_then(Value::as_array)
            .ok_or(InputError::MissingData)?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(InputError::InvalidItem {
                    index,
                    found: json_kind(other),
                }),
            })
            .collect()
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Base64 text of a selected file. The raw bytes are not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedFile(String);

impl EncodedFile {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Size of the original bytes, derived from the encoded length.
    pub fn decoded_len(&self) -> usize {
        let padding = self.0.bytes().rev().take_while(|b| *b == b'=').count();
        ((self.0.len() / 4) * 3).saturating_sub(padding.min(2))
    }
}

/// Body of the POST request. `file_b64` is always present, `null` when no
/// file was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub data: Vec<String>,
    pub file_b64: Option<EncodedFile>,
}

impl RequestPayload {
    pub fn from_input(raw: &RawInput, file: Option<&EncodedFile>) -> Result<Self, InputError> {
        Ok(Self {
            data: raw.parse_data()?,
            file_b64: file.cloned(),
        })
    }
}
