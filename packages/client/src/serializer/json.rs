use bytes::Bytes;
use serde_json::Value;

use super::{BodySerializer, attach};
use crate::error::{self, Result};
use crate::http::{Body, ImmutableRequest};

/// Encodes bodies as JSON documents.
///
/// Raw string bodies are treated as already-encoded documents and written
/// unchanged; every other value is encoded with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent encoded documents.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn encode(&self, value: &impl serde::Serialize) -> Result<Vec<u8>> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        encoded.map_err(error::body)
    }
}

impl<R: ImmutableRequest> BodySerializer<R> for JsonSerializer {
    fn serialize(&self, request: R, body: Option<&Body>) -> Result<R> {
        let Some(body) = body else {
            return Ok(request);
        };

        let bytes = match body {
            Body::Raw(Value::String(raw)) => Bytes::from(raw.clone()),
            Body::Raw(value) => Bytes::from(self.encode(value)?),
            Body::Structured(document) => Bytes::from(self.encode(document)?),
        };

        tracing::debug!("encoded JSON body ({} bytes)", bytes.len());
        Ok(attach(request, bytes))
    }
}
