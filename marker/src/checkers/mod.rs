//! # Checkers
//!
//! This module provides the built-in [`ResponseChecker`](crate::traits::checker::ResponseChecker)
//! implementations used to build batteries.
//!
//! The available checkers are:
//! - [`status_checker`]: Passes when the response status equals an expected code.
//! - [`body_checker`]: Passes when the trimmed body text equals an expected string.
//! - [`html_checker`]: Parses the body as HTML and evaluates a predicate over the document.

pub mod body_checker;
pub mod html_checker;
pub mod status_checker;

pub use body_checker::BodyChecker;
pub use html_checker::HtmlChecker;
pub use status_checker::StatusChecker;
