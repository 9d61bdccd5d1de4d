//! Request body setters
//!
//! Bodies are stored as given and only encoded by the serializer at build time.

use jsonapi_compose_client::{Body, ImmutableRequest};

use crate::builder::core::RequestComposer;
use crate::resource::ResourceDocument;

impl<R: ImmutableRequest> RequestComposer<R> {
    /// Set the body from a raw value, a structured document or a
    /// [`ResourceObject`](crate::resource::ResourceObject)
    ///
    /// Resource objects are converted to their document form immediately.
    ///
    /// # Examples
    /// ```
    /// use jsonapi_compose::{JsonApi, ResourceObject};
    /// use serde_json::json;
    ///
    /// let article = ResourceObject::new("articles").attribute("title", "JSON:API paints my bikeshed!");
    /// let composer = JsonApi::composer().create().set_json_api_body(&article);
    ///
    /// assert_eq!(
    ///     composer.state().body,
    ///     Some(json!({"data": {"type": "articles", "attributes": {"title": "JSON:API paints my bikeshed!"}}}).into())
    /// );
    /// ```
    #[must_use]
    pub fn set_json_api_body(mut self, body: impl Into<Body>) -> Self {
        self.state.body = Some(body.into());
        self
    }

    /// Set the body from any value that renders itself as a JSON:API document
    #[must_use]
    pub fn set_json_api_resource<D: ResourceDocument + ?Sized>(mut self, resource: &D) -> Self {
        self.state.body = Some(Body::Structured(resource.to_document()));
        self
    }
}
