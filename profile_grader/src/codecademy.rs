//! Codecademy grading by scraping the profile page.

use async_trait::async_trait;
use marker::checkers::HtmlChecker;
use marker::traits::checker::ResponseChecker;
use marker::{Completion, MarkerError, Target};
use util::http::Fetch;

use crate::sites::ProfileGrader;

/// A completed "Introduction to JavaScript" course link inside the completed-courses article.
pub const COMPLETED_COURSE_SELECTOR: &str =
    r#"article#completed a[href*="introduction-to-javascript"]"#;

pub struct CodecademyGrader;

#[async_trait]
impl ProfileGrader for CodecademyGrader {
    fn description(&self) -> &'static str {
        "You should have completed code academy"
    }

    async fn grade(
        &self,
        profile: &Target,
        fetcher: &dyn Fetch,
    ) -> Result<Completion, MarkerError> {
        let response = fetcher.get(profile.url().as_str()).await?;
        let completed = HtmlChecker::exists(COMPLETED_COURSE_SELECTOR).check(&response)?;
        let fraction = if completed { 1.0 } else { 0.0 };
        Ok(Completion::new(fraction, self.description()))
    }
}
