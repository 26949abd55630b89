//! The checks a deployed movie server must pass.
//!
//! The search query and the detail page are drawn from their tables once per
//! battery, so two runs with different seeds probe different cases.

use marker::checkers::{HtmlChecker, StatusChecker};
use marker::{Battery, CaseSelector, Check, CheckRequest};
use tracing::debug;

use crate::movies::{
    HEADING_SELECTOR, LISTING_PATH, MOVIE_COUNT, ROW_SELECTOR, SEARCH_CASES, SEARCH_PARAM,
    SearchCase, TITLES, detail_path,
};

pub fn index_is_up() -> Check {
    Check::new("indexIsUp", CheckRequest::get(LISTING_PATH), StatusChecker::ok())
}

pub fn movie_list() -> Check {
    Check::new(
        "movieList",
        CheckRequest::get(LISTING_PATH),
        HtmlChecker::count_equals(ROW_SELECTOR, MOVIE_COUNT),
    )
}

pub fn movie_search(case: &SearchCase) -> Check {
    Check::new(
        "movieSearch",
        CheckRequest::get(LISTING_PATH).with_query(SEARCH_PARAM, case.query),
        HtmlChecker::count_equals(ROW_SELECTOR, case.expected),
    )
}

pub fn movie_detail(index: usize, title: &str) -> Check {
    Check::new(
        "movieDetail",
        CheckRequest::get(detail_path(index)),
        HtmlChecker::text_contains(HEADING_SELECTOR, title),
    )
}

/// The full battery, in grading order.
pub fn battery(selector: &mut CaseSelector) -> Battery {
    let mut battery = Battery::new().with_check(index_is_up()).with_check(movie_list());

    if let Some((_, case)) = selector.pick(SEARCH_CASES) {
        debug!(query = case.query, expected = case.expected, "search case selected");
        battery = battery.with_check(movie_search(case));
    }
    if let Some((index, title)) = selector.pick(TITLES) {
        debug!(index, title, "detail case selected");
        battery = battery.with_check(movie_detail(index, title));
    }
    battery
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_has_four_checks_in_order() {
        let battery = battery(&mut CaseSelector::from_seed(7));
        let names: Vec<&str> = battery.checks().iter().map(|c| c.description.as_str()).collect();
        assert_eq!(names, ["indexIsUp", "movieList", "movieSearch", "movieDetail"]);
    }

    #[test]
    fn listing_checks_share_the_listing_path() {
        let battery = battery(&mut CaseSelector::from_seed(7));
        assert_eq!(battery.checks()[0].request, CheckRequest::get("/movies"));
        assert_eq!(battery.checks()[1].request, CheckRequest::get("/movies"));
    }

    #[test]
    fn search_uses_a_tabled_query() {
        for seed in 0..20 {
            let battery = battery(&mut CaseSelector::from_seed(seed));
            let request = &battery.checks()[2].request;
            assert_eq!(request.path, "/movies");
            assert_eq!(request.query.len(), 1);
            let (key, value) = &request.query[0];
            assert_eq!(key, "q");
            assert!(SEARCH_CASES.iter().any(|c| c.query == value.as_str()));
        }
    }

    #[test]
    fn detail_path_is_within_the_title_table() {
        for seed in 0..20 {
            let battery = battery(&mut CaseSelector::from_seed(seed));
            let path = &battery.checks()[3].request.path;
            let n: usize = path.trim_start_matches("/movies/").parse().unwrap();
            assert!((1..=TITLES.len()).contains(&n));
        }
    }

    #[test]
    fn same_seed_same_cases() {
        let a = battery(&mut CaseSelector::from_seed(99));
        let b = battery(&mut CaseSelector::from_seed(99));
        for (x, y) in a.checks().iter().zip(b.checks()) {
            assert_eq!(x.request, y.request);
        }
    }
}
