use bytes::Bytes;
use serde_json::Value;

use super::{BodySerializer, attach};
use crate::error::{self, Result};
use crate::http::{Body, ImmutableRequest, names};

/// Media type written by [`FormSerializer`].
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Encodes flat structured bodies as `application/x-www-form-urlencoded`.
///
/// Replaces the `Content-Type` of the request. Nested objects and arrays are
/// rejected since the form encoding has no representation for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormSerializer;

impl<R: ImmutableRequest> BodySerializer<R> for FormSerializer {
    fn serialize(&self, request: R, body: Option<&Body>) -> Result<R> {
        let Some(body) = body else {
            return Ok(request);
        };

        let encoded = match body {
            Body::Raw(Value::String(raw)) => raw.clone(),
            Body::Raw(other) => {
                return Err(error::body(std::io::Error::other(format!(
                    "form bodies must be key/value documents, got {other}"
                ))));
            }
            Body::Structured(document) => serde_urlencoded::to_string(document).map_err(|e| {
                tracing::warn!("form encoding failed: {}", e);
                error::body(e)
            })?,
        };

        let request = request.with_header(names::CONTENT_TYPE, vec![FORM_MEDIA_TYPE.to_owned()]);
        Ok(attach(request, Bytes::from(encoded)))
    }
}
