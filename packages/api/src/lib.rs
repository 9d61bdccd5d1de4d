//! JSON:API request composer
//!
//! Fluent builder that turns sparse fieldsets, sorting, pagination, filtering,
//! includes and resource bodies into a request carrying the JSON:API media type.
//!
//! ```
//! use jsonapi_compose::JsonApi;
//!
//! let request = JsonApi::composer()
//!     .https()
//!     .set_uri_host("api.example.com")
//!     .set_uri_path("/articles")
//!     .set_json_api_sort(["-created", "title"])
//!     .set_json_api_includes(["author", "comments.author"])
//!     .build()
//!     .unwrap_or_default();
//!
//! assert_eq!(
//!     request.uri().to_string(),
//!     "https://api.example.com/articles?sort=-created%2Ctitle&include=author%2Ccomments.author"
//! );
//! assert_eq!(request.header_line("accept").as_deref(), Some("application/vnd.api+json"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod resource;

pub use self::builder::{ComposerState, OneOrMany, RequestComposer};
pub use self::resource::{Relationship, ResourceDocument, ResourceIdentifier, ResourceObject};

pub use jsonapi_compose_client::{
    Body, BodySerializer, Error, FormSerializer, HttpError, HttpRequest, ImmutableRequest,
    JSON_API_MEDIA_TYPE, JsonSerializer, Kind, ParsedUri, QueryParams, QueryValue, RequestUri,
    Result,
};

/// Main entry point providing shorthand composer constructors
pub struct JsonApi;

impl JsonApi {
    /// Composer over a default `HttpRequest` with JSON bodies
    ///
    /// Shorthand for `RequestComposer::json()`
    #[must_use]
    pub fn composer() -> RequestComposer {
        RequestComposer::json()
    }

    /// Composer over a default `HttpRequest` with form-encoded bodies
    #[must_use]
    pub fn form() -> RequestComposer {
        RequestComposer::with_serializer(HttpRequest::new(), FormSerializer)
    }

    /// Composer over a caller-supplied template request
    #[must_use]
    pub fn with_template<R: ImmutableRequest + 'static>(template: R) -> RequestComposer<R> {
        RequestComposer::new(template)
    }
}

/// Shorthand for `JsonApi::composer()`
#[must_use]
pub fn composer() -> RequestComposer {
    JsonApi::composer()
}
