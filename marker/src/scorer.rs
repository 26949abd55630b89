//! # Scorer Module
//!
//! This module keeps the running `(passed, failed)` tally for one grading run.
//! The tally starts at `(0, max)` and every increment moves points from `failed`
//! to `passed`. Both sides stay within `[0, max]` and always sum to `max`, even when
//! fractional credit is rounded to whole points over several increments.

use crate::types::Score;

/// Running bounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    max: u32,
    passed: u32,
}

impl Scorer {
    pub fn new(max: u32) -> Self {
        Self { max, passed: 0 }
    }

    /// Moves `delta` points from failed to passed (negative `delta` moves them back),
    /// clamping to `[0, max]`.
    pub fn increment(&mut self, delta: i64) {
        let passed = (self.passed as i64).saturating_add(delta);
        self.passed = passed.clamp(0, self.max as i64) as u32;
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.max - self.passed
    }

    pub fn score(&self) -> Score {
        Score::new(self.passed(), self.failed())
    }
}

/// Whole points earned for completing `fraction` of a `pool`, rounded to the
/// nearest integer with halves rounded away from zero.
///
/// # Example
///
/// ```
/// use marker::scorer::points_for_fraction;
///
/// assert_eq!(points_for_fraction(0.5, 55), 28);
/// assert_eq!(points_for_fraction(1.0, 55), 55);
/// assert_eq!(points_for_fraction(0.0, 55), 0);
/// ```
pub fn points_for_fraction(fraction: f64, pool: u32) -> u32 {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    (fraction * pool as f64).round() as u32
}
