//! Error types for the SECO client.
//!
//! Only faults the caller must treat as bugs or misconfiguration are `Err`.
//! Domain errors, undefined status codes and network failures are ordinary
//! [`CallResult::Failure`](crate::CallResult::Failure) values.

use std::time::Duration;

/// Errors that can occur while configuring the client or making a call.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client configuration is incomplete or invalid.
    #[error("Invalid client configuration: {0}")]
    Config(#[from] ConfigError),
    /// No endpoint is registered under the requested operation name.
    #[error("Unknown SECO operation `{0}`")]
    UnknownOperation(String),
    /// Two error catalog groups claim the same status code.
    #[error("Status code {0} appears in more than one error catalog group")]
    OverlappingStatus(u16),
    /// The service answered 200 but the body is not valid JSON.
    #[error("SECO returned status {status} with a body that is not valid JSON")]
    MalformedPayload {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    /// A caller-supplied value cannot be sent as an HTTP header. No request
    /// was made.
    #[error("Value for header `{name}` is not a valid HTTP header value")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

/// Configuration problems detected at startup.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} contains characters that are not allowed in an HTTP header")]
    InvalidApiKey(&'static str),
    #[error("base URL `{url}` is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("{var} must be a whole number of seconds, got `{value}`")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("timeout must be greater than zero, got {0:?}")]
    ZeroTimeout(Duration),
}

/// Network-level failure classes, caught at the transport boundary.
///
/// Every class maps to the same synthesized status code; callers only learn
/// that the network failed, not why.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    #[error("HTTP protocol error")]
    Protocol,
    #[error("request timed out")]
    Timeout,
    #[error("connection failed")]
    Connect,
}

impl TransportError {
    /// Status code reported in place of a real HTTP status.
    pub const SENTINEL_STATUS: u16 = 504;

    pub fn status(self) -> u16 {
        Self::SENTINEL_STATUS
    }
}

impl From<&reqwest::Error> for TransportError {
    fn from(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connect
        } else {
            TransportError::Protocol
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_transport_class_maps_to_504() {
        for e in [
            TransportError::Protocol,
            TransportError::Timeout,
            TransportError::Connect,
        ] {
            assert_eq!(e.status(), 504);
        }
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Missing("SECO_BASE_URL");
        assert_eq!(err.to_string(), "SECO_BASE_URL is not set");

        let err = Error::from(ConfigError::ZeroTimeout(Duration::ZERO));
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn unknown_operation_display() {
        let err = Error::UnknownOperation("logout".to_string());
        assert!(err.to_string().contains("`logout`"));
    }
}
