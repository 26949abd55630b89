//! # Types Module
//!
//! This module defines the core data structures used throughout the marker system:
//! the graded [`Target`], the per-check [`CheckOutcome`], the fractional [`Completion`]
//! returned by profile graders, and the final [`Score`].

use serde::Serialize;
use url::Url;

use crate::error::MarkerError;
use util::urls;

/// The thing being graded: an absolute URL, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    url: Url,
}

impl Target {
    /// Parses an absolute URL with a host.
    pub fn parse(raw: &str) -> Result<Self, MarkerError> {
        let url = Url::parse(raw.trim())
            .map_err(|e| MarkerError::InvalidTarget(format!("{raw}: {e}")))?;
        if url.host_str().is_none_or(str::is_empty) {
            return Err(MarkerError::InvalidTarget(format!("{raw}: missing host")));
        }
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// `host[:port]`.
    pub fn authority(&self) -> String {
        urls::authority(&self.url)
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// A URL on the same scheme and authority with the given path and query.
    pub fn url_for(&self, path: &str, query: &[(String, String)]) -> Result<Url, MarkerError> {
        urls::build_url(self.scheme(), &self.authority(), path, query)
            .map_err(|e| MarkerError::InvalidTarget(format!("{}{path}: {e}", self.authority())))
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Result of running one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Whether the predicate held.
    pub passed: bool,
    /// Human-readable description of the check.
    pub description: String,
    /// Set when the predicate could not be evaluated (transport or parse failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckOutcome {
    pub fn passed(description: impl Into<String>) -> Self {
        Self {
            passed: true,
            description: description.into(),
            error: None,
        }
    }

    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            passed: false,
            description: description.into(),
            error: None,
        }
    }

    pub fn errored(description: impl Into<String>, error: &MarkerError) -> Self {
        Self {
            passed: false,
            description: description.into(),
            error: Some(error.to_string()),
        }
    }
}

/// Fraction of a graded activity a learner completed, with the message shown for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub fraction: f64,
    pub message: String,
}

impl Completion {
    /// Clamps `fraction` into `[0, 1]`; NaN counts as nothing completed.
    pub fn new(fraction: f64, message: impl Into<String>) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self {
            fraction,
            message: message.into(),
        }
    }
}

/// Bounded `(passed, failed)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub passed: u32,
    pub failed: u32,
}

impl Score {
    pub fn new(passed: u32, failed: u32) -> Self {
        Self { passed, failed }
    }

    /// `passed + failed`.
    pub fn max(&self) -> u32 {
        self.passed + self.failed
    }
}
