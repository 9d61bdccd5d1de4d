use serde::Serialize;
use serde_json::{Value, json};

/// `{"type": ..., "id": ...}` linkage to another resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// Relationship linkage sent with a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Relationship {
    /// A to-one relationship; `None` clears it
    ToOne(Option<ResourceIdentifier>),
    ToMany(Vec<ResourceIdentifier>),
}

impl Relationship {
    pub fn to_one(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Relationship::ToOne(Some(ResourceIdentifier::new(resource_type, id)))
    }

    #[must_use]
    pub fn empty_to_one() -> Self {
        Relationship::ToOne(None)
    }

    pub fn to_many<I, T, D>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        Relationship::ToMany(
            identifiers
                .into_iter()
                .map(|(resource_type, id)| ResourceIdentifier::new(resource_type, id))
                .collect(),
        )
    }

    /// `{"data": linkage}`
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({ "data": self })
    }
}
