//! Transport hand-off tests
//!
//! Tests for converting composed requests into `http::Request`, mirroring
//! packages/client/src/http
