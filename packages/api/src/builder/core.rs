//! Core `RequestComposer` structures and base functionality
//!
//! Contains the composer, the snapshot of its accumulated state, and the build
//! step that turns that state into a request.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use indexmap::IndexMap;
use jsonapi_compose_client::http::names;
use jsonapi_compose_client::{
    Body, BodySerializer, HttpRequest, ImmutableRequest, JSON_API_MEDIA_TYPE, JsonSerializer,
    QueryParams, Result,
};

use crate::builder::values::OneOrMany;

/// Everything a composer has accumulated so far.
///
/// Two snapshots compare equal when the composer would build the same request
/// from the same template.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerState {
    pub method: String,
    /// Empty means the template's protocol version is kept.
    pub protocol_version: String,
    pub scheme: String,
    pub host: String,
    /// `None` means the template's port is kept.
    pub port: Option<u16>,
    pub path: String,
    pub query: QueryParams,
    pub headers: IndexMap<String, OneOrMany>,
    pub body: Option<Body>,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self {
            method: "GET".to_owned(),
            protocol_version: String::new(),
            scheme: "http".to_owned(),
            host: String::new(),
            port: None,
            path: String::new(),
            query: QueryParams::new(),
            headers: IndexMap::new(),
            body: None,
        }
    }
}

/// Fluent builder for JSON:API requests
///
/// Setters consume and return the composer. [`build`](Self::build) borrows it,
/// so the same composer can build any number of identical requests, and
/// [`reset`](Self::reset) returns it to its defaults for another sequence.
#[derive(Clone)]
pub struct RequestComposer<R: ImmutableRequest = HttpRequest> {
    /// Request every build starts from
    pub(crate) template: R,
    /// Strategy that encodes the body at build time
    pub(crate) serializer: Arc<dyn BodySerializer<R>>,
    pub(crate) state: ComposerState,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl RequestComposer<HttpRequest> {
    /// Composer over a default `HttpRequest` with JSON body encoding
    #[must_use]
    pub fn json() -> Self {
        Self::new(HttpRequest::new())
    }

    /// Build the request and convert it for an `http`-based transport.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error, or a `Kind::Builder` error when the
    /// method, URI, protocol version or a header is not valid HTTP.
    pub fn build_http(&self) -> Result<http::Request<Bytes>> {
        http::Request::try_from(self.build()?)
    }
}

impl<R: ImmutableRequest + 'static> RequestComposer<R> {
    /// Start composing on top of `template`, encoding bodies as JSON.
    #[must_use]
    pub fn new(template: R) -> Self {
        Self::with_serializer(template, JsonSerializer::new())
    }

    /// Start composing on top of `template` with a custom body serializer.
    #[must_use]
    pub fn with_serializer<S: BodySerializer<R> + 'static>(template: R, serializer: S) -> Self {
        Self {
            template,
            serializer: Arc::new(serializer),
            state: ComposerState::default(),
            debug_enabled: false,
        }
    }
}

impl<R: ImmutableRequest> RequestComposer<R> {
    /// Enable debug logging for every build
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Restore every field to its default, keeping the template, serializer
    /// and debug flag.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.state = ComposerState::default();
        self
    }

    #[must_use]
    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    #[must_use]
    pub fn template(&self) -> &R {
        &self.template
    }

    /// Build the request.
    ///
    /// Method, URI, protocol version, the JSON:API `Accept`/`Content-Type`
    /// pair and then the caller's headers are applied in that order, so a
    /// header set with [`set_header`](Self::set_header) wins over the forced
    /// media type. The serializer runs last.
    ///
    /// # Errors
    ///
    /// Returns whatever error the body serializer reports.
    pub fn build(&self) -> Result<R> {
        let state = &self.state;
        let request = self.template.clone().with_method(&state.method);

        let mut uri = request
            .uri()
            .clone()
            .with_scheme(&state.scheme)
            .with_host(&state.host)
            .with_path(&state.path)
            .with_query(&state.query.to_query_string());
        if let Some(port) = state.port {
            uri = uri.with_port(Some(port));
        }

        let mut request = request.with_uri(uri);
        if !state.protocol_version.is_empty() {
            request = request.with_protocol_version(&state.protocol_version);
        }

        request = request
            .with_header(names::ACCEPT, vec![JSON_API_MEDIA_TYPE.to_owned()])
            .with_header(names::CONTENT_TYPE, vec![JSON_API_MEDIA_TYPE.to_owned()]);

        for (name, value) in &state.headers {
            request = request.with_header(name, value.to_values());
        }

        if self.debug_enabled {
            log::debug!(
                "JSON:API composer: {} {} ({} headers, body: {})",
                state.method,
                request.uri(),
                state.headers.len() + 2,
                if state.body.is_some() { "set" } else { "none" }
            );
        }

        self.serializer.serialize(request, state.body.as_ref())
    }
}

impl<R> fmt::Debug for RequestComposer<R>
where
    R: ImmutableRequest + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestComposer")
            .field("template", &self.template)
            .field("state", &self.state)
            .field("debug_enabled", &self.debug_enabled)
            .finish_non_exhaustive()
    }
}
