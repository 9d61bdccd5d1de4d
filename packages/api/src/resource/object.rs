use indexmap::IndexMap;
use jsonapi_compose_client::Body;
use serde_json::{Map, Value};

use super::ResourceDocument;
use super::relationship::Relationship;

/// A resource to create or update
///
/// # Examples
/// ```
/// use jsonapi_compose::{Relationship, ResourceDocument, ResourceObject};
/// use serde_json::json;
///
/// let article = ResourceObject::new("articles")
///     .with_id("1")
///     .attribute("title", "Rails is Omakase")
///     .relationship("author", Relationship::to_one("people", "9"));
///
/// assert_eq!(
///     serde_json::Value::Object(article.to_document()),
///     json!({
///         "data": {
///             "type": "articles",
///             "id": "1",
///             "attributes": {"title": "Rails is Omakase"},
///             "relationships": {"author": {"data": {"type": "people", "id": "9"}}}
///         }
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceObject {
    resource_type: String,
    id: Option<String>,
    attributes: Map<String, Value>,
    relationships: IndexMap<String, Relationship>,
}

impl ResourceObject {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn relationship(mut self, name: impl Into<String>, relationship: Relationship) -> Self {
        self.relationships.insert(name.into(), relationship);
        self
    }

    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    #[must_use]
    pub fn relationships(&self) -> &IndexMap<String, Relationship> {
        &self.relationships
    }
}

impl ResourceDocument for ResourceObject {
    fn to_document(&self) -> Map<String, Value> {
        let mut resource = Map::new();
        resource.insert("type".to_owned(), Value::String(self.resource_type.clone()));

        if let Some(ref id) = self.id {
            resource.insert("id".to_owned(), Value::String(id.clone()));
        }

        if !self.attributes.is_empty() {
            resource.insert("attributes".to_owned(), Value::Object(self.attributes.clone()));
        }

        if !self.relationships.is_empty() {
            let relationships = self
                .relationships
                .iter()
                .map(|(name, relationship)| (name.clone(), relationship.to_value()))
                .collect();
            resource.insert("relationships".to_owned(), Value::Object(relationships));
        }

        let mut document = Map::new();
        document.insert("data".to_owned(), Value::Object(resource));
        document
    }
}

impl From<&ResourceObject> for Body {
    fn from(resource: &ResourceObject) -> Self {
        Body::Structured(resource.to_document())
    }
}

impl From<ResourceObject> for Body {
    fn from(resource: ResourceObject) -> Self {
        Body::Structured(resource.to_document())
    }
}
