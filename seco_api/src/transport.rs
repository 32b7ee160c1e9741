//! Executes one POST against SECO and contains every network failure.

use std::time::Duration;

use serde::Serialize;

use crate::errors::TransportError;
use crate::Error;

/// Status code and body exactly as the service returned them.
///
/// `body` is `None` only when the call failed below HTTP, in which case
/// `status` is [`TransportError::SENTINEL_STATUS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl RawResponse {
    fn transport_failure(e: TransportError) -> Self {
        Self {
            status: e.status(),
            body: None,
        }
    }
}

/// Sends requests through a shared `reqwest::Client`.
///
/// Holds no per-call state, so one executor can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Executor {
    http: reqwest::Client,
}

impl Executor {
    /// Builds the underlying HTTP client. Timeouts are applied per call.
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self { http })
    }

    /// POSTs `body` as JSON to `url` and returns the raw outcome.
    ///
    /// Never fails: protocol errors, timeouts and connection failures are
    /// logged and reported as status 504 with no body.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> RawResponse {
        match self.send(url, body, headers, timeout).await {
            Ok(raw) => {
                tracing::debug!("SECO response status code: {}", raw.status);
                raw
            }
            Err(e) => {
                tracing::error!("{} while getting response from url: {}", e, url);
                RawResponse::transport_failure(e)
            }
        }
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<RawResponse, TransportError> {
        let mut request = self
            .http
            .post(url)
            .timeout(timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::debug!("SECO request failed: {}", e);
            TransportError::from(&e)
        })?;
        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|e| {
            tracing::debug!("Failed to read SECO response body: {}", e);
            TransportError::from(&e)
        })?;

        Ok(RawResponse {
            status,
            body: Some(text),
        })
    }
}
