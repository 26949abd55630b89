//! freeCodeCamp grading through the public profile API.
//!
//! The username is the profile URL's path; the API payload lists completed
//! challenge ids, which are matched against the track catalogues.

use async_trait::async_trait;
use marker::{Completion, MarkerError, Target};
use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;
use util::http::Fetch;

use crate::catalogue;
use crate::sites::ProfileGrader;

const PUBLIC_PROFILE_PATH: &str = "/api/users/get-public-profile";

pub struct FreeCodeCampGrader {
    api_base: String,
}

impl FreeCodeCampGrader {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Public profile API URL for the user named by `profile`'s path.
    pub fn api_url(&self, profile: &Target) -> Result<Url, MarkerError> {
        let username = percent_decode_str(profile.path().trim_matches('/')).decode_utf8_lossy();
        if username.is_empty() {
            return Err(MarkerError::InvalidTarget(format!(
                "{profile} does not name a freeCodeCamp user"
            )));
        }

        let base = self.api_base.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{PUBLIC_PROFILE_PATH}"))
            .map_err(|e| MarkerError::InvalidTarget(format!("api base {base}: {e}")))?;
        url.query_pairs_mut().append_pair("username", &username);
        Ok(url)
    }
}

#[async_trait]
impl ProfileGrader for FreeCodeCampGrader {
    fn description(&self) -> &'static str {
        "You completed freecodecamp Basic JavaScript or React"
    }

    async fn grade(
        &self,
        profile: &Target,
        fetcher: &dyn Fetch,
    ) -> Result<Completion, MarkerError> {
        let api_url = self.api_url(profile)?;
        let response = fetcher.get(api_url.as_str()).await?;
        let body = String::from_utf8_lossy(&response.body);

        let fraction = catalogue::best_fraction(&body, catalogue::TRACKS);
        debug!(%api_url, status = response.status, fraction, "freeCodeCamp profile graded");
        Ok(Completion::new(fraction, self.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_uses_trimmed_path_as_username() {
        let grader = FreeCodeCampGrader::new("https://www.freecodecamp.org");
        let profile = Target::parse("https://www.freecodecamp.org/jane-doe/").unwrap();
        assert_eq!(
            grader.api_url(&profile).unwrap().as_str(),
            "https://www.freecodecamp.org/api/users/get-public-profile?username=jane-doe"
        );
    }

    #[test]
    fn api_base_trailing_slash_is_ignored() {
        let grader = FreeCodeCampGrader::new("http://127.0.0.1:4000/");
        let profile = Target::parse("https://www.freecodecamp.org/someone").unwrap();
        assert_eq!(
            grader.api_url(&profile).unwrap().as_str(),
            "http://127.0.0.1:4000/api/users/get-public-profile?username=someone"
        );
    }

    #[test]
    fn encoded_username_is_decoded_before_querying() {
        let grader = FreeCodeCampGrader::new("https://www.freecodecamp.org");
        let profile = Target::parse("https://www.freecodecamp.org/jos%C3%A9").unwrap();
        let url = grader.api_url(&profile).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.freecodecamp.org/api/users/get-public-profile?username=jos%C3%A9"
        );
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs[0].1, "josé");
    }

    #[test]
    fn profile_without_username_is_invalid() {
        let grader = FreeCodeCampGrader::new("https://www.freecodecamp.org");
        let profile = Target::parse("https://www.freecodecamp.org/").unwrap();
        assert!(matches!(
            grader.api_url(&profile),
            Err(MarkerError::InvalidTarget(_))
        ));
    }
}
