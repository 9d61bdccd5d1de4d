//! Conversion of composed requests into `http` crate requests for transport.

use bytes::Bytes;
use http::{Method, Version};

use super::request::HttpRequest;
use crate::error::{self, Error, UnsupportedVersion};

/// Map a protocol version string to `http::Version`.
///
/// An empty string selects HTTP/1.1.
///
/// # Errors
///
/// Returns a `Kind::Builder` error for versions `http` has no variant for.
pub fn parse_version(version: &str) -> Result<Version, Error> {
    match version {
        "0.9" => Ok(Version::HTTP_09),
        "1.0" => Ok(Version::HTTP_10),
        "" | "1.1" => Ok(Version::HTTP_11),
        "2" | "2.0" => Ok(Version::HTTP_2),
        "3" | "3.0" => Ok(Version::HTTP_3),
        other => Err(error::builder(UnsupportedVersion(other.to_owned()))),
    }
}

impl TryFrom<HttpRequest> for http::Request<Bytes> {
    type Error = Error;

    fn try_from(request: HttpRequest) -> Result<Self, Self::Error> {
        let method = Method::from_bytes(request.method().as_bytes()).map_err(error::builder)?;
        let target = request.uri().to_string();
        let uri: http::Uri = target.parse().map_err(|e| {
            tracing::debug!("rejecting request URI '{}': {}", target, e);
            error::builder(e)
        })?;
        let version = parse_version(request.protocol_version())?;

        let mut builder = http::Request::builder()
            .method(method)
            .uri(uri)
            .version(version);

        for (name, values) in request.headers().iter() {
            for value in values {
                builder = builder.header(name, value.as_str());
            }
        }

        builder.body(request.body().clone()).map_err(error::builder)
    }
}
