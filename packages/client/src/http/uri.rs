//! Decomposed request URIs and lenient URI-string parsing.

use std::fmt;

use url::Host;

use crate::error::{self, MalformedUri, Result, UriDefect};

/// The URI of a request, kept as independent components.
///
/// Unlike `url::Url`, every component may be empty, so a template request can
/// carry a partial URI that a composer fills in later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestUri {
    scheme: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: String,
}

impl RequestUri {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The encoded query string, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_owned();
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_owned();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_owned();
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_owned();
        self
    }
}

impl fmt::Display for RequestUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.host.is_empty() {
            if !self.scheme.is_empty() {
                write!(f, "{}:", self.scheme)?;
            }
            write!(f, "//{}", self.host)?;
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
            if !self.path.is_empty() && !self.path.starts_with('/') {
                f.write_str("/")?;
            }
        }

        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }

        Ok(())
    }
}

/// Components found in a URI string. Absent components are `None`.
///
/// Components are reported as written: the host keeps its case, the path is
/// neither normalized nor re-encoded and an explicit default port is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUri {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: Option<String>,
}

impl ParsedUri {
    /// Split an absolute URI or a relative reference (`//host/path`,
    /// `/path?query`, `path?query` or `?query`) into its components.
    ///
    /// The fragment is dropped. The host is validated with `url::Host` but
    /// stored unchanged.
    ///
    /// # Errors
    ///
    /// Returns a `Kind::Uri` error carrying a [`MalformedUri`] for an empty
    /// input, control characters, an invalid host or an invalid port.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = |defect| error::uri(MalformedUri::new(input, defect));

        if input.is_empty() {
            return Err(malformed(UriDefect::Empty));
        }
        if input.chars().any(char::is_control) {
            return Err(malformed(UriDefect::ControlCharacter));
        }

        let reference = input.split_once('#').map_or(input, |(head, _)| head);
        let (reference, query) = match reference.split_once('?') {
            Some((head, query)) => (head, non_empty(query)),
            None => (reference, None),
        };

        let (scheme, hierarchy) = match split_scheme(reference) {
            Some((scheme, rest)) => (Some(scheme.to_owned()), rest),
            None => (None, reference),
        };

        let (host, port, path) = match hierarchy.strip_prefix("//") {
            Some(rest) => {
                let (authority, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
                let (host, port) = split_authority(authority).map_err(malformed)?;
                (Some(host.to_owned()), port, path)
            }
            None => (None, None, hierarchy),
        };

        Ok(Self {
            scheme,
            host,
            port,
            path: non_empty(path),
            query,
        })
    }
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`, ended by the first `:`.
fn split_scheme(reference: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = reference.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

fn split_authority(authority: &str) -> std::result::Result<(&str, Option<u16>), UriDefect> {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host_port)| host_port);

    let (host, port) = if host_port.starts_with('[') {
        let end = host_port.find(']').ok_or(UriDefect::UnclosedIpLiteral)?;
        let (host, rest) = host_port.split_at(end + 1);
        if rest.is_empty() {
            (host, None)
        } else {
            (host, Some(rest.strip_prefix(':').ok_or(UriDefect::InvalidPort)?))
        }
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    if host.is_empty() {
        return Err(UriDefect::EmptyHost);
    }
    Host::parse(host)?;

    let port = match port {
        None | Some("") => None,
        Some(digits) => Some(parse_port(digits)?),
    };
    Ok((host, port))
}

fn parse_port(digits: &str) -> std::result::Result<u16, UriDefect> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UriDefect::InvalidPort);
    }
    digits.parse().map_err(|_| UriDefect::InvalidPort)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
