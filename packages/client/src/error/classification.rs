use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error came from converting a request for transport.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if the error came from a body serializer.
    #[must_use]
    pub fn is_body(&self) -> bool {
        matches!(self.inner.kind, Kind::Body)
    }

    /// Returns true if the error is related to URI parsing.
    #[must_use]
    pub fn is_uri(&self) -> bool {
        matches!(self.inner.kind, Kind::Uri)
    }
}
