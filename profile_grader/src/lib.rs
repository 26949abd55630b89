//! Grades a learner's profile on an external coding-education site.
//!
//! Grading has two stages. The gate checks that the URL belongs to a known site and
//! that the profile answers `200`; passing it earns the reachability points. The
//! site's grader then reports what fraction of the coursework is complete, and that
//! fraction of the remaining points is awarded, rounded to the nearest point.
//!
//! A rejected gate stops grading immediately and returns `Score { passed: 0, failed: 0 }`.

pub mod catalogue;
pub mod codecademy;
pub mod freecodecamp;
pub mod sites;

use std::io::Write;

use marker::checkers::StatusChecker;
use marker::report::ReportLine;
use marker::scorer::points_for_fraction;
use marker::traits::checker::ResponseChecker;
use marker::{GradeReport, MarkerError, Reporter, Score, Scorer, Status, Target};
use tracing::{info, warn};
use util::config::AppConfig;
use util::http::Fetch;

use crate::sites::{Site, SiteRegistry};

pub const MAX_SCORE: u32 = 60;
pub const REACHABILITY_POINTS: u32 = 5;

/// Scoring constants and site wiring for one grading run.
#[derive(Debug, Clone)]
pub struct ProfileSettings {
    pub max_score: u32,
    pub reachability_points: u32,
    pub registry: SiteRegistry,
    pub freecodecamp_api_base: String,
}

impl ProfileSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_score: MAX_SCORE,
            reachability_points: REACHABILITY_POINTS,
            registry: SiteRegistry::default(),
            freecodecamp_api_base: config.freecodecamp_api_base.clone(),
        }
    }
}

/// Resolves the profile's site and confirms the profile page answers `200`.
pub async fn validate_profile(
    raw_url: &str,
    fetcher: &dyn Fetch,
    registry: &SiteRegistry,
) -> Result<(Target, Site), MarkerError> {
    let target = Target::parse(raw_url)?;
    let authority = target.authority();
    let site = registry.lookup(&authority).ok_or_else(|| {
        MarkerError::InvalidTarget(format!("{authority} is not a supported profile site"))
    })?;

    let response = fetcher.get(target.url().as_str()).await?;
    if !StatusChecker::ok().check(&response)? {
        return Err(MarkerError::Unreachable(format!(
            "{raw_url} answered with status {}",
            response.status
        )));
    }
    Ok((target, site))
}

/// Grades the profile at `raw_url`, reporting each step.
pub async fn test_all<W: Write>(
    raw_url: &str,
    fetcher: &dyn Fetch,
    settings: &ProfileSettings,
    reporter: &mut Reporter<W>,
) -> Result<Score, MarkerError> {
    let reachability = settings.reachability_points;
    let gate = validate_profile(raw_url, fetcher, &settings.registry).await;

    reporter.record(ReportLine {
        status: Status::from_passed(gate.is_ok()),
        message: format!("Profile is valid and online at {raw_url}"),
        earned: if gate.is_ok() { reachability } else { 0 },
        available: reachability,
        error: gate.as_ref().err().map(|e| e.to_string()),
    });

    let (target, site) = match gate {
        Ok(resolved) => resolved,
        Err(e) => {
            info!(url = raw_url, error = %e, "profile rejected before grading");
            let score = Score::new(0, 0);
            reporter.summary(&score, settings.max_score);
            return Ok(score);
        }
    };

    let mut scorer = Scorer::new(settings.max_score);
    scorer.increment(reachability as i64);
    let pool = scorer.failed();

    let grader = site.grader(&settings.freecodecamp_api_base);
    let (fraction, message, error) = match grader.grade(&target, fetcher).await {
        Ok(completion) => (completion.fraction, completion.message, None),
        Err(e) => {
            warn!(site = site.name(), url = raw_url, error = %e, "profile grading failed");
            (0.0, grader.description().to_string(), Some(e.to_string()))
        }
    };

    let points = points_for_fraction(fraction, pool);
    reporter.record(ReportLine {
        status: Status::from_fraction(fraction),
        message,
        earned: points,
        available: pool,
        error,
    });
    scorer.increment(points as i64);

    let score = scorer.score();
    info!(
        url = raw_url,
        site = site.name(),
        passed = score.passed,
        failed = score.failed,
        "profile graded"
    );
    reporter.summary(&score, settings.max_score);
    Ok(score)
}

/// Runs [`test_all`] and hands back everything the reporter recorded.
pub async fn grade<W: Write>(
    raw_url: &str,
    fetcher: &dyn Fetch,
    settings: &ProfileSettings,
    mut reporter: Reporter<W>,
) -> Result<GradeReport, MarkerError> {
    let score = test_all(raw_url, fetcher, settings, &mut reporter).await?;
    Ok(reporter.into_report(raw_url, score, settings.max_score))
}
