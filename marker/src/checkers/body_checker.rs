//! A checker that compares the whole response body against an expected string.

use crate::error::MarkerError;
use crate::traits::checker::ResponseChecker;
use util::http::FetchedResponse;

/// Passes iff the body, with surrounding whitespace trimmed, equals `expected` exactly.
///
/// A body that is not valid UTF-8 is reported as [`MarkerError::MalformedDocument`].
#[derive(Debug, Clone)]
pub struct BodyChecker {
    pub expected: String,
}

impl BodyChecker {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl ResponseChecker for BodyChecker {
    fn check(&self, response: &FetchedResponse) -> Result<bool, MarkerError> {
        let body = response
            .text()
            .map_err(|e| MarkerError::MalformedDocument(format!("{}: {e}", response.url)))?;
        Ok(body.trim() == self.expected)
    }
}
