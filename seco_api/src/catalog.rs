//! Static mapping from SECO status codes to user-facing error descriptions.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::Error;

/// A structured error description returned to callers in place of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub success: bool,
    /// Stable symbolic code. Absent on the fallback entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub message: &'static str,
}

impl ErrorEntry {
    const fn new(error: &'static str, message: &'static str) -> Self {
        Self {
            success: false,
            error: Some(error),
            message,
        }
    }
}

/// Entry returned for any status code no group claims.
pub const FALLBACK: ErrorEntry = ErrorEntry {
    success: false,
    error: None,
    message: "Currently could not process your request.",
};

const STANDARD_GROUPS: &[(&[u16], ErrorEntry)] = &[
    (
        &[204],
        ErrorEntry::new(
            "no_content",
            "Sorry your information could not be fetched right now. Please try again after sometime.",
        ),
    ),
    (
        &[400],
        ErrorEntry::new(
            "bad_request",
            "Sorry you could not be authenticated. Please check your credentials. Thank you!",
        ),
    ),
    (
        &[403],
        ErrorEntry::new(
            "permission_error",
            "Sorry you do not have permission to access this service now. Thank you!",
        ),
    ),
    (&[404], ErrorEntry::new("page_not_found", "Page Not Found.")),
    (
        &[500, 501, 503, 504, 505],
        ErrorEntry::new(
            "server_error",
            "We are facing some network related issue. Please try to login after sometime. Thank you!",
        ),
    ),
];

/// Lookup table from status code to [`ErrorEntry`], built once.
#[derive(Debug, Clone)]
pub struct ErrorCatalog {
    entries: Vec<ErrorEntry>,
    index: HashMap<u16, usize>,
}

impl ErrorCatalog {
    /// Builds a catalog from `(codes, entry)` groups.
    ///
    /// Fails with [`Error::OverlappingStatus`] if a code appears in more than
    /// one group.
    pub fn from_groups(groups: &[(&[u16], ErrorEntry)]) -> Result<Self, Error> {
        let mut entries = Vec::with_capacity(groups.len());
        let mut index = HashMap::new();
        for (codes, entry) in groups {
            let slot = entries.len();
            entries.push(entry.clone());
            for &code in codes.iter() {
                if index.insert(code, slot).is_some() {
                    return Err(Error::OverlappingStatus(code));
                }
            }
        }
        Ok(Self { entries, index })
    }

    /// The SECO catalog, shared process-wide.
    pub fn standard() -> &'static ErrorCatalog {
        static STANDARD: OnceLock<ErrorCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Self::from_groups(STANDARD_GROUPS).expect("standard catalog groups must be disjoint")
        })
    }

    /// Returns the entry for `status`, or [`FALLBACK`] if none matches.
    pub fn lookup(&self, status: u16) -> &ErrorEntry {
        match self.index.get(&status) {
            Some(&slot) => &self.entries[slot],
            None => {
                tracing::debug!("Undefined SECO status code ({})", status);
                &FALLBACK
            }
        }
    }

    /// Whether `status` has its own entry rather than the fallback.
    pub fn contains(&self, status: u16) -> bool {
        self.index.contains_key(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_groups_resolve() {
        let catalog = ErrorCatalog::standard();
        assert_eq!(catalog.lookup(204).error, Some("no_content"));
        assert_eq!(catalog.lookup(400).error, Some("bad_request"));
        assert_eq!(catalog.lookup(403).error, Some("permission_error"));
        assert_eq!(catalog.lookup(404).error, Some("page_not_found"));
        for code in [500, 501, 503, 504, 505] {
            assert_eq!(catalog.lookup(code).error, Some("server_error"));
        }
    }

    #[test]
    fn unclaimed_codes_fall_back() {
        let catalog = ErrorCatalog::standard();
        for code in [200, 401, 418, 502, 999] {
            assert_eq!(catalog.lookup(code), &FALLBACK);
            assert!(!catalog.contains(code));
        }
        assert!(!FALLBACK.success);
        assert!(FALLBACK.error.is_none());
    }

    #[test]
    fn overlapping_groups_are_rejected() {
        let a = ErrorEntry::new("a", "first");
        let b = ErrorEntry::new("b", "second");
        let groups: &[(&[u16], ErrorEntry)] = &[(&[500, 503], a), (&[400, 503], b)];
        let err = ErrorCatalog::from_groups(groups).unwrap_err();
        assert!(matches!(err, Error::OverlappingStatus(503)));
    }

    #[test]
    fn fallback_serializes_without_code() {
        let value = serde_json::to_value(&FALLBACK).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": false,
                "message": "Currently could not process your request."
            })
        );
    }
}
