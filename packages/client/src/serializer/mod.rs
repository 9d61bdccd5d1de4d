//! Body serialization strategies
//!
//! A [`BodySerializer`] turns the composer's [`Body`] into request bytes and
//! sets any header that depends on them.

pub mod form;
pub mod json;

pub use form::FormSerializer;
pub use json::JsonSerializer;

use bytes::Bytes;

use crate::error::Result;
use crate::http::{Body, ImmutableRequest, names};

/// Encodes a body onto a partially built request.
pub trait BodySerializer<R: ImmutableRequest>: Send + Sync {
    /// Return `request` carrying `body`.
    ///
    /// # Errors
    ///
    /// Returns a `Kind::Body` error when the body cannot be encoded.
    fn serialize(&self, request: R, body: Option<&Body>) -> Result<R>;
}

/// Attach `bytes` and the matching `Content-Length`.
pub(crate) fn attach<R: ImmutableRequest>(request: R, bytes: Bytes) -> R {
    request
        .with_header(names::CONTENT_LENGTH, vec![bytes.len().to_string()])
        .with_body(bytes)
}
