use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::RequestFailure;

/// Decoded body returned by the service.
///
/// The shape is open: any JSON object is accepted and kept in the order the
/// server sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponsePayload {
    fields: Map<String, Value>,
}

impl ResponsePayload {
    pub fn from_value(value: Value) -> Result<Self, RequestFailure> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(RequestFailure::Decode(
                "response body is not a JSON object".to_string(),
            )),
        }
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, RequestFailure> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| RequestFailure::Decode(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn get(&self, key: &str) -> FieldValue {
        FieldValue::from_json(self.fields.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Indented JSON dump of every field, in server order.
    pub fn to_pretty_json(&self) -> String {
        format!("{:#}", Value::Object(self.fields.clone()))
    }

    /// Error text when the service answered `is_success: false`.
    pub fn reported_failure(&self) -> Option<String> {
        match self.fields.get("is_success") {
            Some(Value::Bool(false)) => Some(
                self.fields
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("service reported failure")
                    .to_string(),
            ),
            _ => None,
        }
    }
}

/// A single response field, classified for filtering and display.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Sequence(Vec<Value>),
    Scalar(Value),
    Absent,
}

impl FieldValue {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => FieldValue::Absent,
            Some(Value::Array(items)) => FieldValue::Sequence(items.clone()),
            Some(other) => FieldValue::Scalar(other.clone()),
        }
    }

    /// Text of each item when this is a non-empty sequence.
    pub fn display_items(&self) -> Option<Vec<String>> {
        match self {
            FieldValue::Sequence(items) if !items.is_empty() => {
                Some(items.iter().map(item_text).collect())
            }
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldValue::Sequence(items) => items.serialize(serializer),
            FieldValue::Scalar(value) => value.serialize(serializer),
            FieldValue::Absent => serializer.serialize_none(),
        }
    }
}

fn item_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
