use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a request that cannot be converted for transport.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for a body the serializer could not encode.
pub fn body<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Body).with(e.into())
}

/// Creates an `Error` for an unparsable URI string.
pub fn uri<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Uri).with(e.into())
}
