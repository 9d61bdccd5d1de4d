//! JSON:API resource objects used as request bodies

pub mod object;
pub mod relationship;

pub use object::ResourceObject;
pub use relationship::{Relationship, ResourceIdentifier};

use serde_json::{Map, Value};

/// A value that renders itself as a JSON:API request document.
pub trait ResourceDocument {
    fn to_document(&self) -> Map<String, Value>;
}
