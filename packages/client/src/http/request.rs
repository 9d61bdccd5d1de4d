//! The immutable request value a composer builds on.

use bytes::Bytes;

use super::headers::Headers;
use super::uri::RequestUri;

/// A request value where every change produces a new value.
///
/// Implementations take `self` and return the changed request; callers that
/// need the original keep a clone.
pub trait ImmutableRequest: Clone {
    #[must_use]
    fn with_method(self, method: &str) -> Self;

    fn uri(&self) -> &RequestUri;

    #[must_use]
    fn with_uri(self, uri: RequestUri) -> Self;

    #[must_use]
    fn with_protocol_version(self, version: &str) -> Self;

    /// Replace every value of the header `name`.
    #[must_use]
    fn with_header(self, name: &str, values: Vec<String>) -> Self;

    #[must_use]
    fn with_body(self, body: Bytes) -> Self;
}

/// HTTP request value with a decomposed URI and caller-spelled header names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: String,
    uri: RequestUri,
    protocol_version: String,
    headers: Headers,
    body: Bytes,
}

impl Default for HttpRequest {
    fn default() -> Self {
        Self {
            method: "GET".to_owned(),
            uri: RequestUri::default(),
            protocol_version: "1.1".to_owned(),
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }
}

impl HttpRequest {
    /// Creates a `GET` request for an empty URI over HTTP/1.1.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn uri(&self) -> &RequestUri {
        &self.uri
    }

    #[must_use]
    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name)
    }

    #[must_use]
    pub fn header_line(&self, name: &str) -> Option<String> {
        self.headers.line(name)
    }

    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl ImmutableRequest for HttpRequest {
    fn with_method(mut self, method: &str) -> Self {
        method.clone_into(&mut self.method);
        self
    }

    fn uri(&self) -> &RequestUri {
        &self.uri
    }

    fn with_uri(mut self, uri: RequestUri) -> Self {
        self.uri = uri;
        self
    }

    fn with_protocol_version(mut self, version: &str) -> Self {
        version.clone_into(&mut self.protocol_version);
        self
    }

    fn with_header(mut self, name: &str, values: Vec<String>) -> Self {
        self.headers.set(name, values);
        self
    }

    fn with_body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }
}
