//! Marker Error Types
//!
//! This module defines the [`MarkerError`] enum, which encapsulates every failure that can
//! occur while fetching a graded target, parsing its documents, or resolving which grading
//! rules apply to it.
//!
//! Errors are distinct from a failed check: an error means the grader could not evaluate a
//! predicate at all (network down, unparseable document), while a failed check means the
//! target answered but did not satisfy the predicate. The battery converts errors into failed
//! outcomes so a single bad check never aborts grading.
//!
//! # Example
//!
//! ```rust
//! use marker::error::MarkerError;
//!
//! fn require_host(host: &str) -> Result<(), MarkerError> {
//!     if host.is_empty() {
//!         return Err(MarkerError::InvalidTarget("missing host".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;
use util::http::FetchError;

/// Represents all error types that can occur in the marker system.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkerError {
    /// The target or an auxiliary API could not be reached (connection failure or timeout).
    #[error("unreachable: {0}")]
    Unreachable(String),
    /// A response body could not be read as a structured document.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    /// The submitted URL does not identify anything that can be graded.
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    /// A CSS selector used by a check failed to parse.
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
}

impl From<FetchError> for MarkerError {
    fn from(err: FetchError) -> Self {
        MarkerError::Unreachable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_become_unreachable() {
        let err: MarkerError = FetchError::Unreachable {
            url: "http://a.test".into(),
            reason: "timed out".into(),
        }
        .into();
        assert_eq!(
            err,
            MarkerError::Unreachable("http://a.test is unreachable: timed out".into())
        );

        let err: MarkerError = FetchError::InvalidUrl("x".into()).into();
        assert!(matches!(err, MarkerError::Unreachable(_)));
    }

    #[test]
    fn display_names_the_selector() {
        let err = MarkerError::InvalidSelector("div[".into());
        assert_eq!(err.to_string(), "invalid selector `div[`");
    }
}
