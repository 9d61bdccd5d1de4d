/// An input string that does not decompose into URI components.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cannot parse '{input}': {defect}")]
pub struct MalformedUri {
    input: String,
    #[source]
    defect: UriDefect,
}

impl MalformedUri {
    pub fn new(input: impl Into<String>, defect: UriDefect) -> Self {
        Self {
            input: input.into(),
            defect,
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn defect(&self) -> &UriDefect {
        &self.defect
    }
}

/// Why a URI string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriDefect {
    #[error("empty URI")]
    Empty,
    #[error("control character in URI")]
    ControlCharacter,
    #[error("empty host in authority")]
    EmptyHost,
    #[error("unclosed IP literal in authority")]
    UnclosedIpLiteral,
    #[error("invalid port")]
    InvalidPort,
    #[error("invalid host: {0}")]
    Host(#[from] url::ParseError),
}

/// A protocol version string with no `http::Version` counterpart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP protocol version '{0}'")]
pub struct UnsupportedVersion(pub String);
