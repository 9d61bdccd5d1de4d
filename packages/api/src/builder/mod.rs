//! Request composer modules
//!
//! Provides the fluent API for accumulating JSON:API request configuration and
//! building it into a request.

pub mod body;
pub mod core;
pub mod headers;
pub mod jsonapi;
pub mod methods;
pub mod uri;
pub mod values;

pub use self::core::*;
pub use values::*;
