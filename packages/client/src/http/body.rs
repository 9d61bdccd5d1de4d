//! Body values handed to a [`BodySerializer`](crate::serializer::BodySerializer).

use serde_json::{Map, Value};

/// A request body before serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A scalar. Strings are treated as already-encoded documents.
    Raw(Value),
    /// A structured document, usually `{"data": ...}`.
    Structured(Map<String, Value>),
}

impl Body {
    #[must_use]
    pub fn as_structured(&self) -> Option<&Map<String, Value>> {
        match self {
            Body::Structured(map) => Some(map),
            Body::Raw(_) => None,
        }
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Body::Structured(map),
            other => Body::Raw(other),
        }
    }
}

impl From<Map<String, Value>> for Body {
    fn from(map: Map<String, Value>) -> Self {
        Body::Structured(map)
    }
}

impl From<&str> for Body {
    fn from(raw: &str) -> Self {
        Body::Raw(Value::String(raw.to_owned()))
    }
}

impl From<String> for Body {
    fn from(raw: String) -> Self {
        Body::Raw(Value::String(raw))
    }
}

impl From<bool> for Body {
    fn from(raw: bool) -> Self {
        Body::Raw(Value::Bool(raw))
    }
}

impl From<i64> for Body {
    fn from(raw: i64) -> Self {
        Body::Raw(Value::from(raw))
    }
}

impl From<f64> for Body {
    fn from(raw: f64) -> Self {
        Body::Raw(Value::from(raw))
    }
}
