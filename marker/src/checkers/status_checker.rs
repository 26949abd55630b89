//! A checker that passes when the response status code equals an expected value.

use crate::error::MarkerError;
use crate::traits::checker::ResponseChecker;
use util::http::FetchedResponse;

/// Passes iff `response.status == expected`. Never errors.
#[derive(Debug, Clone, Copy)]
pub struct StatusChecker {
    pub expected: u16,
}

impl StatusChecker {
    pub fn new(expected: u16) -> Self {
        Self { expected }
    }

    /// The usual "is it up" check.
    pub fn ok() -> Self {
        Self::new(200)
    }
}

impl ResponseChecker for StatusChecker {
    fn check(&self, response: &FetchedResponse) -> Result<bool, MarkerError> {
        Ok(response.status == self.expected)
    }
}
