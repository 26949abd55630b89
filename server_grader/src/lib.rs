//! Grades a student's deployed movie server.
//!
//! Every check in the battery is worth one point and the maximum score is the
//! number of checks. A URL that cannot be parsed still yields a full report, with
//! every check failed.

pub mod movies;
pub mod questions;

use std::io::Write;

use marker::{CaseSelector, GradeReport, MarkerError, Reporter, Score, Scorer, Target};
use tracing::{info, warn};
use util::http::Fetch;

/// Runs the battery against `raw_url` and reports one line per check.
pub async fn test_all<W: Write>(
    raw_url: &str,
    fetcher: &dyn Fetch,
    selector: &mut CaseSelector,
    reporter: &mut Reporter<W>,
) -> Result<Score, MarkerError> {
    let battery = questions::battery(selector);
    let max_score = battery.len() as u32;

    let outcomes = match Target::parse(raw_url) {
        Ok(target) => battery.run(&target, fetcher).await,
        Err(e) => {
            warn!(url = raw_url, error = %e, "server url rejected");
            battery.fail_all(&e)
        }
    };

    let mut scorer = Scorer::new(max_score);
    for outcome in &outcomes {
        reporter.outcome(outcome, 1);
        if outcome.passed {
            scorer.increment(1);
        }
    }

    let score = scorer.score();
    info!(url = raw_url, passed = score.passed, failed = score.failed, "server graded");
    reporter.summary(&score, max_score);
    Ok(score)
}

/// Runs [`test_all`] and hands back everything the reporter recorded.
pub async fn grade<W: Write>(
    raw_url: &str,
    fetcher: &dyn Fetch,
    selector: &mut CaseSelector,
    mut reporter: Reporter<W>,
) -> Result<GradeReport, MarkerError> {
    let score = test_all(raw_url, fetcher, selector, &mut reporter).await?;
    Ok(reporter.into_report(raw_url, score, score.max()))
}
