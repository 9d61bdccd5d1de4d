//! URI component setters
//!
//! Components can be set one by one or parsed from a full URI string with
//! [`set_uri`](RequestComposer::set_uri).

use jsonapi_compose_client::{ImmutableRequest, ParsedUri, QueryParams, QueryValue};

use crate::builder::core::RequestComposer;

impl<R: ImmutableRequest> RequestComposer<R> {
    /// Shorthand for `set_uri_scheme("http")`
    #[must_use]
    pub fn http(self) -> Self {
        self.set_uri_scheme("http")
    }

    /// Shorthand for `set_uri_scheme("https")`
    #[must_use]
    pub fn https(self) -> Self {
        self.set_uri_scheme("https")
    }

    #[must_use]
    pub fn set_uri_scheme(mut self, scheme: &str) -> Self {
        scheme.clone_into(&mut self.state.scheme);
        self
    }

    #[must_use]
    pub fn set_uri_host(mut self, host: &str) -> Self {
        host.clone_into(&mut self.state.host);
        self
    }

    #[must_use]
    pub fn set_uri_port(mut self, port: u16) -> Self {
        self.state.port = Some(port);
        self
    }

    #[must_use]
    pub fn set_uri_path(mut self, path: &str) -> Self {
        path.clone_into(&mut self.state.path);
        self
    }

    /// Take scheme, host, port, path and query from a URI string
    ///
    /// Only components present in `uri` are copied, so a path-only reference
    /// keeps a previously set host. A query in `uri` replaces every stored
    /// query parameter. A string that does not parse is logged and ignored.
    ///
    /// # Examples
    /// ```
    /// use jsonapi_compose::JsonApi;
    ///
    /// let composer = JsonApi::composer()
    ///     .set_uri("https://api.example.com/articles")
    ///     .set_uri("/people?sort=name");
    ///
    /// assert_eq!(composer.state().host, "api.example.com");
    /// assert_eq!(composer.state().path, "/people");
    /// ```
    #[must_use]
    pub fn set_uri(mut self, uri: &str) -> Self {
        match ParsedUri::parse(uri) {
            Ok(parsed) => self.apply_parsed_uri(parsed),
            Err(parse_error) => {
                log::warn!("Invalid URI provided '{uri}': {parse_error}. Keeping existing URI.");
            }
        }
        self
    }

    /// Set one top-level query parameter, replacing any previous value.
    ///
    /// This bypasses the JSON:API encoding rules; nested values are written as
    /// `name[key]=value`.
    #[must_use]
    pub fn set_uri_query_param(mut self, name: &str, value: impl Into<QueryValue>) -> Self {
        self.state.query.set(name, value);
        self
    }

    fn apply_parsed_uri(&mut self, parsed: ParsedUri) {
        let state = &mut self.state;

        if let Some(scheme) = parsed.scheme {
            state.scheme = scheme;
        }
        if let Some(host) = parsed.host {
            state.host = host;
        }
        if let Some(port) = parsed.port {
            state.port = Some(port);
        }
        if let Some(path) = parsed.path {
            state.path = path;
        }
        if let Some(query) = parsed.query {
            state.query = QueryParams::parse(&query);
        }
    }
}
