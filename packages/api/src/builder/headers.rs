//! Header setters

use jsonapi_compose_client::ImmutableRequest;

use crate::builder::core::RequestComposer;
use crate::builder::values::OneOrMany;

impl<R: ImmutableRequest> RequestComposer<R> {
    /// Set a header, replacing an earlier call for the same name
    ///
    /// Headers are applied after the JSON:API `Accept` and `Content-Type`
    /// defaults, so setting either of those here overrides the media type.
    ///
    /// # Examples
    /// ```
    /// use jsonapi_compose::JsonApi;
    ///
    /// let request = JsonApi::composer()
    ///     .set_header("Authorization", "Bearer token")
    ///     .set_header("Cache-Control", ["no-cache", "no-store"])
    ///     .build()
    ///     .unwrap_or_default();
    ///
    /// assert_eq!(request.header_line("cache-control").as_deref(), Some("no-cache, no-store"));
    /// ```
    #[must_use]
    pub fn set_header(mut self, name: &str, value: impl Into<OneOrMany>) -> Self {
        self.state.headers.insert(name.to_owned(), value.into());
        self
    }
}
