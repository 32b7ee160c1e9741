//! Client for the SECO identity service.

use std::sync::Arc;

use reqwest::header::HeaderValue;
use serde::Serialize;

use crate::{
    catalog::ErrorCatalog,
    config::ClientConfig,
    endpoint::{EndpointTable, Operation},
    transport::Executor,
    types::{SessionDetailsRequest, VerifyRequest},
    CallResult, Error,
};

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const SESSION_TOKEN_HEADER: &str = "sso-token";

/// Client for the SECO identity service.
///
/// Every operation resolves to one POST and comes back as a [`CallResult`].
/// Network failures and non-200 statuses are `Ok(CallResult::Failure)`. `Err`
/// is reserved for a 200 whose body is not JSON and for caller-supplied
/// values that cannot be sent as headers. Cloning is cheap and clones
/// share configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: ClientConfig,
    endpoints: EndpointTable,
    catalog: ErrorCatalog,
    executor: Executor,
}

impl Client {
    /// Creates a client using the standard error catalog.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_catalog(config, ErrorCatalog::standard().clone())
    }

    /// Creates a client from `SECO_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Creates a client that maps error statuses through `catalog`.
    pub fn with_catalog(config: ClientConfig, catalog: ErrorCatalog) -> Result<Self, Error> {
        let endpoints = EndpointTable::new(config.base_url());
        let executor = Executor::new()?;
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                endpoints,
                catalog,
                executor,
            }),
        })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Endpoint URLs under the configured base URL.
    pub fn endpoints(&self) -> &EndpointTable {
        &self.inner.endpoints
    }

    async fn call<B: Serialize>(
        &self,
        op: Operation,
        body: &B,
        extra_headers: &[(&'static str, &str)],
    ) -> Result<CallResult, Error> {
        for &(name, value) in extra_headers {
            HeaderValue::from_str(value).map_err(|source| Error::InvalidHeader { name, source })?;
        }

        let inner = &*self.inner;
        let url = inner.endpoints.url(op);

        let mut headers = Vec::with_capacity(1 + extra_headers.len());
        headers.push((API_KEY_HEADER, inner.config.api_key()));
        headers.extend_from_slice(extra_headers);

        let raw = inner
            .executor
            .execute(&url, body, &headers, inner.config.timeout())
            .await;
        raw.normalize(&inner.catalog)
    }

    /// Verifies an identifier/password pair. On success the payload carries
    /// the SSO token.
    pub async fn verify(&self, identifier: &str, password: &str) -> Result<CallResult, Error> {
        self.call(
            Operation::Verify,
            &VerifyRequest::new(identifier, password),
            &[],
        )
        .await
    }

    /// Fetches user, profile and entitlement details for an SSO token.
    ///
    /// A token that is not a valid header value fails with
    /// [`Error::InvalidHeader`] before anything is sent.
    pub async fn session_details(&self, token: &str) -> Result<CallResult, Error> {
        self.call(
            Operation::SessionGet,
            &SessionDetailsRequest::default(),
            &[(SESSION_TOKEN_HEADER, token)],
        )
        .await
    }
}
