//! Filter criteria collected from the search bar and the filter sheet.
//!
//! Every field has a "no constraint" default: empty strings, empty sets and
//! `false`. A default `FilterCriteria` lets every item through.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// The full set of search and filter options for one deck.
///
/// All criteria are ANDed together. Within `job_types` and `skills` the
/// selected values are ORed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Free text matched against headline, subtitle, description and tags
    pub search_query: String,
    pub location: String,
    /// Only keep jobs tagged as remote
    pub remote_only: bool,
    pub job_types: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    /// "entry", "mid" or "senior"; empty or "any" means no constraint
    pub experience_level: String,
    /// "<50k", "50-100k", "100-150k" or ">150k"; empty or "any" means no constraint
    pub salary_range: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion constrains the deck
    pub fn is_default(&self) -> bool {
        !self.has_search_query()
            && !self.has_location()
            && !self.remote_only
            && self.job_types.is_empty()
            && self.skills.is_empty()
            && self.experience_level().is_none()
            && self.salary_band().is_none()
    }

    /// Search is on once the query holds more than whitespace. The query
    /// itself is matched untrimmed.
    pub fn has_search_query(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    /// Any non-empty location constrains the deck, whitespace included
    pub fn has_location(&self) -> bool {
        !self.location.is_empty()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn remote_only(mut self, remote_only: bool) -> Self {
        self.remote_only = remote_only;
        self
    }

    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_types.insert(job_type.into());
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    pub fn with_experience_level(mut self, level: impl Into<String>) -> Self {
        self.experience_level = level.into();
        self
    }

    pub fn with_salary_range(mut self, range: impl Into<String>) -> Self {
        self.salary_range = range.into();
        self
    }

    /// Select a skill chip, or deselect it if already selected.
    pub fn toggle_skill(&mut self, skill: &str) {
        if !self.skills.remove(skill) {
            self.skills.insert(skill.to_string());
        }
    }

    /// Select a job type chip, or deselect it if already selected.
    pub fn toggle_job_type(&mut self, job_type: &str) {
        if !self.job_types.remove(job_type) {
            self.job_types.insert(job_type.to_string());
        }
    }

    /// Parsed experience level; `None` when unset, "any" or unrecognized
    pub fn experience_level(&self) -> Option<ExperienceLevel> {
        parse_choice(&self.experience_level, "experience level")
    }

    /// Parsed salary band; `None` when unset, "any" or unrecognized
    pub fn salary_band(&self) -> Option<SalaryBand> {
        parse_choice(&self.salary_range, "salary range")
    }
}

fn parse_choice<T: FromStr>(value: &str, what: &str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("any") {
        return None;
    }
    match value.parse() {
        Ok(choice) => Some(choice),
        Err(_) => {
            tracing::debug!("Ignoring unrecognized {}: {:?}", what, value);
            None
        }
    }
}

// =============================================================================
// Experience buckets
// =============================================================================

/// Seniority bucket for a candidate's years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    /// 0-2 years
    Entry,
    /// 3-5 years
    Mid,
    /// 6+ years
    Senior,
}

impl ExperienceLevel {
    pub fn contains(self, years: u32) -> bool {
        match self {
            ExperienceLevel::Entry => years <= 2,
            ExperienceLevel::Mid => (3..=5).contains(&years),
            ExperienceLevel::Senior => years >= 6,
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "entry" | "entry-level" | "junior" => Ok(ExperienceLevel::Entry),
            "mid" | "mid-level" => Ok(ExperienceLevel::Mid),
            "senior" | "senior-level" => Ok(ExperienceLevel::Senior),
            _ => Err(()),
        }
    }
}

// =============================================================================
// Salary buckets
// =============================================================================

/// Salary bucket offered by the filter sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryBand {
    Under50k,
    From50kTo100k,
    From100kTo150k,
    Over150k,
}

impl SalaryBand {
    /// True when a `(min, max)` salary band shares any value with this bucket
    pub fn overlaps(self, (min, max): (u32, u32)) -> bool {
        match self {
            SalaryBand::Under50k => min < 50_000,
            SalaryBand::From50kTo100k => min <= 100_000 && max >= 50_000,
            SalaryBand::From100kTo150k => min <= 150_000 && max >= 100_000,
            SalaryBand::Over150k => max > 150_000,
        }
    }
}

impl FromStr for SalaryBand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "<50k" => Ok(SalaryBand::Under50k),
            "50-100k" => Ok(SalaryBand::From50kTo100k),
            "100-150k" => Ok(SalaryBand::From100kTo150k),
            ">150k" => Ok(SalaryBand::Over150k),
            _ => Err(()),
        }
    }
}
