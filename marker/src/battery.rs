//! # Battery Module
//!
//! A [`Battery`] is an ordered list of independent [`Check`]s run against one [`Target`].
//! Each check names the request it needs (path and query on the target's scheme and
//! authority) and the [`ResponseChecker`] that judges the response.
//!
//! Checks run strictly one after another. A transport failure fails that check without
//! invoking its checker, a checker error fails that check, and the battery always runs to
//! the end.

use tracing::{debug, warn};
use util::http::Fetch;

use crate::error::MarkerError;
use crate::traits::checker::ResponseChecker;
use crate::types::{CheckOutcome, Target};

/// Path and query a check requests on the graded target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl CheckRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// A named unit of verification.
pub struct Check {
    pub description: String,
    pub request: CheckRequest,
    checker: Box<dyn ResponseChecker>,
}

impl Check {
    pub fn new<C: ResponseChecker + 'static>(
        description: impl Into<String>,
        request: CheckRequest,
        checker: C,
    ) -> Self {
        Self {
            description: description.into(),
            request,
            checker: Box::new(checker),
        }
    }

    /// Fetches this check's request on `target` and evaluates the checker.
    pub async fn run(&self, target: &Target, fetcher: &dyn Fetch) -> CheckOutcome {
        let url = match target.url_for(&self.request.path, &self.request.query) {
            Ok(url) => url,
            Err(e) => return CheckOutcome::errored(&self.description, &e),
        };

        let response = match fetcher.get(url.as_str()).await {
            Ok(response) => response,
            Err(e) => {
                let e = MarkerError::from(e);
                warn!(check = %self.description, error = %e, "fetch failed");
                return CheckOutcome::errored(&self.description, &e);
            }
        };

        match self.checker.check(&response) {
            Ok(true) => CheckOutcome::passed(&self.description),
            Ok(false) => CheckOutcome::failed(&self.description),
            Err(e) => {
                warn!(check = %self.description, error = %e, "check could not be evaluated");
                CheckOutcome::errored(&self.description, &e)
            }
        }
    }
}

/// Ordered sequence of checks, fixed at construction.
#[derive(Default)]
pub struct Battery {
    checks: Vec<Check>,
}

impl Battery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Runs every check in order and returns one outcome per check.
    pub async fn run(&self, target: &Target, fetcher: &dyn Fetch) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let outcome = check.run(target, fetcher).await;
            debug!(check = %outcome.description, passed = outcome.passed, "check finished");
            outcomes.push(outcome);
        }
        outcomes
    }

    /// A failing outcome for every check, used when there is no usable target.
    pub fn fail_all(&self, reason: &MarkerError) -> Vec<CheckOutcome> {
        self.checks
            .iter()
            .map(|c| CheckOutcome::errored(&c.description, reason))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{BodyChecker, HtmlChecker, StatusChecker};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use util::http::{FetchError, FetchedResponse};

    /// Serves canned responses by full URL; unknown URLs are unreachable.
    #[derive(Default)]
    struct CannedFetcher {
        pages: HashMap<String, (u16, String)>,
        requested: Mutex<Vec<String>>,
    }

    impl CannedFetcher {
        fn page(mut self, url: &str, status: u16, body: &str) -> Self {
            self.pages.insert(url.to_string(), (status, body.to_string()));
            self
        }
    }

    #[async_trait]
    impl Fetch for CannedFetcher {
        async fn get(&self, url: &str) -> Result<FetchedResponse, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            match self.pages.get(url) {
                Some((status, body)) => Ok(FetchedResponse::new(url, *status, body.as_str())),
                None => Err(FetchError::Unreachable {
                    url: url.to_string(),
                    reason: "timed out".to_string(),
                }),
            }
        }
    }

    struct CountingChecker(&'static AtomicUsize);

    impl ResponseChecker for CountingChecker {
        fn check(&self, _: &FetchedResponse) -> Result<bool, MarkerError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }
    }

    fn target() -> Target {
        Target::parse("http://site.test").unwrap()
    }

    #[tokio::test]
    async fn test_runs_in_order_and_collects_outcomes() {
        let fetcher = CannedFetcher::default()
            .page("http://site.test/", 200, "home")
            .page("http://site.test/echo?msg=hi", 200, "hi")
            .page("http://site.test/list", 200, "<ul><li>1</li><li>2</li></ul>");

        let battery = Battery::new()
            .with_check(Check::new("home is up", CheckRequest::get("/"), StatusChecker::ok()))
            .with_check(Check::new(
                "echo echoes",
                CheckRequest::get("/echo").with_query("msg", "hi"),
                BodyChecker::new("hi"),
            ))
            .with_check(Check::new(
                "list has three items",
                CheckRequest::get("/list"),
                HtmlChecker::count_equals("li", 3),
            ));

        let outcomes = battery.run(&target(), &fetcher).await;
        assert_eq!(
            outcomes,
            vec![
                CheckOutcome::passed("home is up"),
                CheckOutcome::passed("echo echoes"),
                CheckOutcome::failed("list has three items"),
            ]
        );
        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            vec![
                "http://site.test/",
                "http://site.test/echo?msg=hi",
                "http://site.test/list"
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_checker_and_continues() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let fetcher = CannedFetcher::default().page("http://site.test/up", 200, "");

        let battery = Battery::new()
            .with_check(Check::new(
                "down page",
                CheckRequest::get("/down"),
                CountingChecker(&CALLS),
            ))
            .with_check(Check::new("up page", CheckRequest::get("/up"), StatusChecker::ok()));

        let outcomes = battery.run(&target(), &fetcher).await;
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        assert!(!outcomes[0].passed);
        assert!(outcomes[0].error.as_deref().unwrap().contains("unreachable"));
        assert_eq!(outcomes[1], CheckOutcome::passed("up page"));
    }

    #[tokio::test]
    async fn test_checker_error_fails_only_that_check() {
        let fetcher = CannedFetcher::default().page("http://site.test/", 200, "<p>x</p>");
        let battery = Battery::new()
            .with_check(Check::new(
                "broken selector",
                CheckRequest::get("/"),
                HtmlChecker::exists("p[["),
            ))
            .with_check(Check::new("has p", CheckRequest::get("/"), HtmlChecker::exists("p")));

        let outcomes = battery.run(&target(), &fetcher).await;
        assert!(!outcomes[0].passed);
        assert_eq!(outcomes[0].error.as_deref(), Some("invalid selector `p[[`"));
        assert!(outcomes[1].passed);
    }

    #[tokio::test]
    async fn test_fail_all_marks_every_check() {
        let battery = Battery::new()
            .with_check(Check::new("a", CheckRequest::get("/a"), StatusChecker::ok()))
            .with_check(Check::new("b", CheckRequest::get("/b"), StatusChecker::ok()));
        let reason = MarkerError::InvalidTarget("nope".into());
        let outcomes = battery.fail_all(&reason);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| !o.passed && o.error.is_some()));
    }
}
