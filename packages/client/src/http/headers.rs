//! Header storage that keeps the caller's spelling of header names.

use indexmap::IndexMap;

/// Media type registered for JSON:API documents.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Header names used when composing requests.
pub mod names {
    pub const ACCEPT: &str = "Accept";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CONTENT_LENGTH: &str = "Content-Length";
}

/// Ordered header map with case-insensitive lookup and replacement.
///
/// Replacing a header drops every earlier spelling of its name and appends the
/// new one, so the most recent spelling is the one sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, Vec<String>>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all values of `name`.
    pub fn set(&mut self, name: &str, values: Vec<String>) {
        self.entries.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        self.entries.insert(name.to_owned(), values);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// All values of `name` joined with `", "`.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<String> {
        self.get(name).map(|values| values.join(", "))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
