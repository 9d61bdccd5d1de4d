//! HTTP method and protocol version setters

use jsonapi_compose_client::ImmutableRequest;

use crate::builder::core::RequestComposer;

impl<R: ImmutableRequest> RequestComposer<R> {
    /// Fetch resources (`GET`)
    #[must_use]
    pub fn fetch(self) -> Self {
        self.set_method("GET")
    }

    /// Create a resource (`POST`)
    #[must_use]
    pub fn create(self) -> Self {
        self.set_method("POST")
    }

    /// Update a resource (`PATCH`)
    #[must_use]
    pub fn update(self) -> Self {
        self.set_method("PATCH")
    }

    /// Delete a resource (`DELETE`)
    #[must_use]
    pub fn delete(self) -> Self {
        self.set_method("DELETE")
    }

    /// Set an arbitrary method. The last call wins.
    ///
    /// # Examples
    /// ```
    /// use jsonapi_compose::JsonApi;
    ///
    /// let request = JsonApi::composer().set_method("OPTIONS").build();
    /// assert_eq!(request.map(|r| r.method().to_owned()).ok().as_deref(), Some("OPTIONS"));
    /// ```
    #[must_use]
    pub fn set_method(mut self, method: &str) -> Self {
        method.clone_into(&mut self.state.method);
        self
    }

    /// Set the protocol version, e.g. `"1.1"` or `"2"`.
    ///
    /// An empty version leaves the template's version in place.
    #[must_use]
    pub fn set_protocol_version(mut self, version: &str) -> Self {
        version.clone_into(&mut self.state.protocol_version);
        self
    }
}
