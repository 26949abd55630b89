//! # Grade Report Module
//!
//! This module renders grading steps for people and records them for machines.
//!
//! ## Overview
//!
//! - [`Reporter`] writes one line per grading step, `"<glyph> - <message> (<earned>/<available> pts)"`,
//!   to any writer when output is enabled, and always records the step.
//! - [`GradeReport`] is the recorded run: target, final score and every step.
//! - [`GradeReportResponse`] wraps a report in a `success`/`message`/`data` envelope for JSON output.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Grading complete.",
//!   "data": {
//!     "target": "https://www.freecodecamp.org/someone",
//!     "score": { "passed": 60, "failed": 0 },
//!     "max_score": 60,
//!     "steps": [
//!       { "status": "pass", "message": "Profile is valid and online at ...", "earned": 5, "available": 5 }
//!     ]
//!   }
//! }
//! ```
//!
//! Reporting never changes a score: write failures are logged and otherwise ignored.

use serde::Serialize;
use std::io::{self, Write};

use crate::types::{CheckOutcome, Score};

/// Outcome class of one grading step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    /// Some but not all credit; only fractional steps produce it.
    Partial,
}

impl Status {
    pub fn glyph(&self) -> &'static str {
        match self {
            Status::Pass => "✅",
            Status::Fail => "❌",
            Status::Partial => "🔶",
        }
    }

    pub fn from_passed(passed: bool) -> Self {
        if passed { Status::Pass } else { Status::Fail }
    }

    /// Exactly 1.0 is a pass, anything above 0 a partial, the rest a fail.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction == 1.0 {
            Status::Pass
        } else if fraction > 0.0 {
            Status::Partial
        } else {
            Status::Fail
        }
    }
}

/// One reported grading step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub status: Status,
    pub message: String,
    pub earned: u32,
    pub available: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportLine {
    pub fn render(&self) -> String {
        format!(
            "{} - {} ({}/{} pts)",
            self.status.glyph(),
            self.message,
            self.earned,
            self.available
        )
    }
}

/// Everything a grading run reported.
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub target: String,
    pub score: Score,
    pub max_score: u32,
    pub steps: Vec<ReportLine>,
}

/// The response envelope for grading results.
#[derive(Debug, Serialize)]
pub struct GradeReportResponse {
    success: bool,
    message: String,
    data: GradeReport,
}

impl From<GradeReport> for GradeReportResponse {
    fn from(report: GradeReport) -> Self {
        GradeReportResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: report,
        }
    }
}

/// Writes and records grading steps.
pub struct Reporter<W: Write> {
    out: W,
    show_output: bool,
    lines: Vec<ReportLine>,
}

impl Reporter<io::Stdout> {
    pub fn stdout(show_output: bool) -> Self {
        Self::new(io::stdout(), show_output)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, show_output: bool) -> Self {
        Self {
            out,
            show_output,
            lines: Vec::new(),
        }
    }

    /// Records a step and, if enabled, prints it.
    pub fn step(
        &mut self,
        status: Status,
        message: impl Into<String>,
        earned: u32,
        available: u32,
    ) {
        self.record(ReportLine {
            status,
            message: message.into(),
            earned,
            available,
            error: None,
        });
    }

    /// Records a battery outcome worth `available` points when passed.
    pub fn outcome(&mut self, outcome: &CheckOutcome, available: u32) {
        self.record(ReportLine {
            status: Status::from_passed(outcome.passed),
            message: outcome.description.clone(),
            earned: if outcome.passed { available } else { 0 },
            available,
            error: outcome.error.clone(),
        });
    }

    pub fn record(&mut self, line: ReportLine) {
        if self.show_output {
            let rendered = line.render();
            self.write_line(&rendered);
        }
        self.lines.push(line);
    }

    /// Prints the final tally.
    pub fn summary(&mut self, score: &Score, max_score: u32) {
        if self.show_output {
            let rendered = format!("Score: {}/{}", score.passed, max_score);
            self.write_line(&rendered);
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "could not write report line");
        }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Consumes the reporter into a [`GradeReport`].
    pub fn into_report(
        self,
        target: impl Into<String>,
        score: Score,
        max_score: u32,
    ) -> GradeReport {
        GradeReport {
            target: target.into(),
            score,
            max_score,
            steps: self.lines,
        }
    }

    /// The underlying writer, for inspecting captured output.
    pub fn writer(&self) -> &W {
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn captured(reporter: &Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.writer().clone()).unwrap()
    }

    #[test]
    fn test_status_from_fraction() {
        assert_eq!(Status::from_fraction(1.0), Status::Pass);
        assert_eq!(Status::from_fraction(0.999), Status::Partial);
        assert_eq!(Status::from_fraction(0.01), Status::Partial);
        assert_eq!(Status::from_fraction(0.0), Status::Fail);
    }

    #[test]
    fn test_step_line_format() {
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.step(Status::Pass, "Profile is valid and online at http://x", 5, 5);
        reporter.step(Status::Partial, "You completed some", 18, 55);
        reporter.step(Status::Fail, "Nothing", 0, 1);
        assert_eq!(
            captured(&reporter),
            "✅ - Profile is valid and online at http://x (5/5 pts)\n\
             🔶 - You completed some (18/55 pts)\n\
             ❌ - Nothing (0/1 pts)\n"
        );
    }

    #[test]
    fn test_suppressed_output_still_records() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.step(Status::Pass, "a", 1, 1);
        reporter.summary(&Score::new(1, 0), 1);
        assert!(captured(&reporter).is_empty());
        assert_eq!(reporter.lines().len(), 1);
    }

    #[test]
    fn test_outcome_awards_all_or_nothing() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.outcome(&CheckOutcome::passed("up"), 1);
        reporter.outcome(&CheckOutcome::failed("list"), 1);
        let lines = reporter.lines();
        assert_eq!((lines[0].status, lines[0].earned), (Status::Pass, 1));
        assert_eq!((lines[1].status, lines[1].earned), (Status::Fail, 0));
    }

    #[test]
    fn test_summary_line() {
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.summary(&Score::new(3, 1), 4);
        assert_eq!(captured(&reporter), "Score: 3/4\n");
    }

    #[test]
    fn test_report_response_serialization() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.step(Status::Partial, "half", 28, 55);
        let report = reporter.into_report("http://t", Score::new(33, 27), 60);
        let response: GradeReportResponse = report.into();
        let value: Value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Grading complete.");
        assert_eq!(value["data"]["target"], "http://t");
        assert_eq!(value["data"]["score"]["passed"], 33);
        assert_eq!(value["data"]["score"]["failed"], 27);
        assert_eq!(value["data"]["max_score"], 60);
        assert_eq!(value["data"]["steps"][0]["status"], "partial");
        assert_eq!(value["data"]["steps"][0]["earned"], 28);
        assert!(value["data"]["steps"][0].get("error").is_none());
    }
}
