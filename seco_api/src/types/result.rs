use serde_json::{json, Value};

use crate::catalog::ErrorEntry;

/// Outcome of a SECO call. Both branches carry the status code that
/// produced them, real or synthesized.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    Success { payload: Value, status: u16 },
    Failure { error: ErrorEntry, status: u16 },
}

impl CallResult {
    /// Real HTTP status, or 504 for a network failure.
    pub fn status(&self) -> u16 {
        match self {
            CallResult::Success { status, .. } | CallResult::Failure { status, .. } => *status,
        }
    }

    /// `true` only for a 200 with a JSON body.
    pub fn is_success(&self) -> bool {
        matches!(self, CallResult::Success { .. })
    }

    /// Parsed body of a successful call.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            CallResult::Success { payload, .. } => Some(payload),
            CallResult::Failure { .. } => None,
        }
    }

    /// Catalog entry of a failed call.
    pub fn error(&self) -> Option<&ErrorEntry> {
        match self {
            CallResult::Success { .. } => None,
            CallResult::Failure { error, .. } => Some(error),
        }
    }

    /// Flattens into `(body, status)`, rendering failures in the legacy
    /// `error_info` shape.
    pub fn into_parts(self) -> (Value, u16) {
        match self {
            CallResult::Success { payload, status } => (payload, status),
            CallResult::Failure { error, status } => {
                let mut info = json!({
                    "success": error.success,
                    "value": error.message,
                });
                if let Some(code) = error.error {
                    info["error"] = json!(code);
                }
                (json!({ "error_info": info }), status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ErrorCatalog, FALLBACK};

    #[test]
    fn success_parts_pass_payload_through() {
        let result = CallResult::Success {
            payload: json!({"token": "abc"}),
            status: 200,
        };
        assert!(result.is_success());
        assert_eq!(result.error(), None);
        assert_eq!(result.into_parts(), (json!({"token": "abc"}), 200));
    }

    #[test]
    fn failure_parts_use_legacy_shape() {
        let result = CallResult::Failure {
            error: ErrorCatalog::standard().lookup(404).clone(),
            status: 404,
        };
        assert_eq!(result.status(), 404);
        assert!(result.payload().is_none());
        let (body, status) = result.into_parts();
        assert_eq!(status, 404);
        assert_eq!(
            body,
            json!({
                "error_info": {
                    "success": false,
                    "error": "page_not_found",
                    "value": "Page Not Found."
                }
            })
        );
    }

    #[test]
    fn fallback_parts_omit_symbolic_code() {
        let result = CallResult::Failure {
            error: FALLBACK,
            status: 418,
        };
        let (body, _) = result.into_parts();
        assert!(body["error_info"].get("error").is_none());
        assert_eq!(body["error_info"]["success"], false);
    }
}
