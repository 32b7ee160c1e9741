//! Client for the SECO identity service.
//!
//! Wraps credential verification and session lookup in signed POST requests
//! and folds every outcome (success, mapped error status, undefined status,
//! network failure) into a single [`CallResult`].

pub mod catalog;
mod client;
pub mod config;
pub mod endpoint;
mod errors;
pub mod normalize;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use self::catalog::{ErrorCatalog, ErrorEntry};
pub use self::client::{Client, API_KEY_HEADER, SESSION_TOKEN_HEADER};
pub use self::config::ClientConfig;
pub use self::endpoint::{EndpointTable, Operation};
pub use self::errors::{ConfigError, Error, TransportError};
pub use self::types::CallResult;
