//! Request value type and its building blocks
//!
//! The URI, query, header and body types that make up an [`HttpRequest`],
//! plus conversion into `http::Request` for transport.

pub mod body;
pub mod conversions;
pub mod headers;
pub mod query;
pub mod request;
pub mod uri;

pub use body::*;
pub use conversions::*;
pub use headers::*;
pub use query::*;
pub use request::*;
pub use uri::*;
