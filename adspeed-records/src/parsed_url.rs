// Immutable, already-decomposed absolute URL

use crate::error::{RecordError, Result};
use serde::Serialize;
use std::fmt;
use url::Url;

/// An absolute URL split into the parts the classifier looks at.
///
/// Construction is the only place a URL can be rejected. Once a `ParsedUrl`
/// exists, every accessor is total and the host is always lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedUrl {
    scheme: String,
    host: String,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl ParsedUrl {
    /// Build from already-split components.
    ///
    /// The host must be non-empty. An empty path is normalised to `/`.
    pub fn new(
        scheme: &str,
        host: &str,
        path: &str,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Self> {
        if scheme.is_empty() {
            return Err(RecordError::InvalidUrl(format!(
                "missing scheme for host '{}'",
                host
            )));
        }

        let host = host.trim_end_matches('.');
        if host.is_empty() {
            return Err(RecordError::InvalidUrl(format!(
                "missing host in {}:{}",
                scheme, path
            )));
        }

        let path = if path.is_empty() {
            "/".to_string()
        } else {
            path.to_string()
        };

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            host: host.to_ascii_lowercase(),
            path,
            query: query.map(String::from),
            fragment: fragment.map(String::from),
        })
    }

    /// Parse an absolute URL string. Relative and host-less URLs are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)
            .map_err(|e| RecordError::InvalidUrl(format!("{}: {}", input, e)))?;
        Self::try_from(&url)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn is_secure(&self) -> bool {
        self.scheme == "https"
    }
}

impl TryFrom<&Url> for ParsedUrl {
    type Error = RecordError;

    fn try_from(url: &Url) -> Result<Self> {
        let host = url
            .host_str()
            .ok_or_else(|| RecordError::InvalidUrl(format!("{}: no host", url)))?;
        Self::new(url.scheme(), host, url.path(), url.query(), url.fragment())
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)?;
        if let Some(ref query) = self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(ref fragment) = self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
