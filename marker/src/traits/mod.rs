//!
//! Traits Module
//!
//! This module contains core traits used throughout the marker system for extensibility and abstraction.
//!
//! - [`checker`]: Defines the trait every response predicate implements.
//!
//! Implement these traits to add new kinds of checks without touching the battery or scorer.

pub mod checker;
