//! # Marker Library
//!
//! This crate provides the check-orchestration and scoring engine shared by the graders.
//! A grader builds a [`battery::Battery`] of independent checks (or computes a fractional
//! [`types::Completion`]), runs it against a [`types::Target`], folds the results into a bounded
//! [`scorer::Scorer`], and reports each step through a [`report::Reporter`].
//!
//! ## Key Concepts
//! - **Checkers**: Pluggable predicates over a fetched response (status, body, HTML structure).
//! - **Battery**: An ordered list of checks, each bound to the request it needs; always runs to completion.
//! - **Scorer**: A `(passed, failed)` tally clamped to a fixed maximum.
//! - **Reporter**: Glyph-per-step text output plus a serializable report.

pub mod battery;
pub mod checkers;
pub mod error;
pub mod report;
pub mod rng;
pub mod scorer;
pub mod traits;
pub mod types;

pub use battery::{Battery, Check, CheckRequest};
pub use error::MarkerError;
pub use report::{GradeReport, GradeReportResponse, Reporter, Status};
pub use rng::CaseSelector;
pub use scorer::Scorer;
pub use types::{CheckOutcome, Completion, Score, Target};
