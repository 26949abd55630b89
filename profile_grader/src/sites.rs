//! Registry of gradable profile sites and the grading capability each one provides.
//!
//! A profile URL is matched by its authority (`host[:port]`) against the registry.
//! Each [`Site`] maps to one [`ProfileGrader`]; supporting a new site means adding a
//! variant, its default domains, and a grader.

use async_trait::async_trait;
use marker::{Completion, MarkerError, Target};
use util::http::Fetch;

use crate::codecademy::CodecademyGrader;
use crate::freecodecamp::FreeCodeCampGrader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    FreeCodeCamp,
    Codecademy,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::FreeCodeCamp, Site::Codecademy];

    pub fn name(&self) -> &'static str {
        match self {
            Site::FreeCodeCamp => "FreeCodeCamp",
            Site::Codecademy => "CodeAcademy",
        }
    }

    pub fn default_domains(&self) -> &'static [&'static str] {
        match self {
            Site::FreeCodeCamp => &["www.freecodecamp.org"],
            Site::Codecademy => &["www.codecademy.com"],
        }
    }

    /// The grader bound to this site.
    pub fn grader(&self, freecodecamp_api_base: &str) -> Box<dyn ProfileGrader> {
        match self {
            Site::FreeCodeCamp => Box::new(FreeCodeCampGrader::new(freecodecamp_api_base)),
            Site::Codecademy => Box::new(CodecademyGrader),
        }
    }
}

/// Grades one learner profile on one site.
#[async_trait]
pub trait ProfileGrader: Send + Sync {
    /// Message reported for this site's content step, also used when grading fails.
    fn description(&self) -> &'static str;

    async fn grade(&self, profile: &Target, fetcher: &dyn Fetch) -> Result<Completion, MarkerError>;
}

/// Domain → site lookup.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    entries: Vec<(String, Site)>,
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Site::ALL.iter().fold(Self::empty(), |registry, site| {
            site.default_domains()
                .iter()
                .fold(registry, |r, domain| r.with_domain(*site, *domain))
        })
    }
}

impl SiteRegistry {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_domain(mut self, site: Site, domain: impl Into<String>) -> Self {
        self.entries.push((domain.into().to_ascii_lowercase(), site));
        self
    }

    /// The site registered for `authority`, compared case-insensitively.
    pub fn lookup(&self, authority: &str) -> Option<Site> {
        let authority = authority.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(domain, _)| *domain == authority)
            .map(|(_, site)| *site)
    }
}
