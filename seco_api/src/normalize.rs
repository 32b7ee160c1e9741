//! Turns a raw SECO response into a [`CallResult`].

use crate::catalog::ErrorCatalog;
use crate::transport::RawResponse;
use crate::{CallResult, Error};

/// Only status 200 is a success.
pub const SUCCESS_STATUS: u16 = 200;

/// Maps `(status, body)` to a [`CallResult`].
///
/// On 200 the body must be JSON; anything else is a contract violation and
/// comes back as [`Error::MalformedPayload`] rather than a catalog entry.
/// Every other status is looked up in `catalog` and the body is ignored.
pub fn normalize(
    catalog: &ErrorCatalog,
    status: u16,
    body: Option<&str>,
) -> Result<CallResult, Error> {
    if status == SUCCESS_STATUS {
        let payload = serde_json::from_str(body.unwrap_or_default()).map_err(|source| {
            tracing::error!("SECO returned status {} with an unparsable body", status);
            Error::MalformedPayload { status, source }
        })?;
        return Ok(CallResult::Success { payload, status });
    }

    tracing::error!("SECO call failed with status {}, returning error details", status);
    Ok(CallResult::Failure {
        error: catalog.lookup(status).clone(),
        status,
    })
}

impl RawResponse {
    /// Shorthand for [`normalize`] over this response.
    pub fn normalize(&self, catalog: &ErrorCatalog) -> Result<CallResult, Error> {
        normalize(catalog, self.status, self.body.as_deref())
    }
}
