//! # JSON:API Compose Client
//!
//! The request value type and collaborators behind `jsonapi_compose`:
//!
//! - [`ImmutableRequest`] and its default implementation [`HttpRequest`]
//! - [`RequestUri`] components and lenient [`ParsedUri`] parsing
//! - [`QueryParams`] with one level of nesting for `fields[type]=...` style parameters
//! - [`BodySerializer`] strategies for JSON and form bodies
//! - conversion of a finished request into `http::Request<Bytes>`

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod http;
pub mod serializer;

pub use error::{Error, Kind, Result};
pub use crate::http::{
    Body, Headers, HttpRequest, ImmutableRequest, JSON_API_MEDIA_TYPE, ParsedUri, QueryParams,
    QueryValue, RequestUri,
};
pub use serializer::{BodySerializer, FormSerializer, JsonSerializer};

pub type HttpError = Error;
