//! Operation names and the SECO paths they resolve to.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A business operation exposed by the SECO service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Verify,
    SessionGet,
}

impl Operation {
    /// Every operation the service exposes.
    pub const ALL: [Operation; 2] = [Operation::Verify, Operation::SessionGet];

    /// Name used by string-keyed callers, e.g. `"session_get"`.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Verify => "verify",
            Operation::SessionGet => "session_get",
        }
    }

    /// Path relative to the configured base URL.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Verify => "user/unpw/verify",
            Operation::SessionGet => "session/details/get",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

/// Resolves operations to absolute URLs under one base URL.
#[derive(Debug, Clone)]
pub struct EndpointTable {
    base_url: String,
}

impl EndpointTable {
    /// `base_url` is used as given; [`ClientConfig`](crate::ClientConfig)
    /// already strips any trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for `op`.
    pub fn url(&self, op: Operation) -> String {
        format!("{}/{}", self.base_url, op.path())
    }

    /// Resolves an operation by name. Unknown names are an error rather than
    /// a URL with an empty path.
    pub fn resolve(&self, name: &str) -> Result<String, Error> {
        let op: Operation = name.parse()?;
        Ok(self.url(op))
    }
}
