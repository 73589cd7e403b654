//! Experience level filter.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Item;

/// Keeps candidates whose years of experience fall in the selected bucket.
///
/// Jobs carry no experience figure and always pass, as do candidates whose
/// experience text has no leading number.
pub struct ExperienceLevelFilter;

impl Filter for ExperienceLevelFilter {
    fn name(&self) -> &str {
        "ExperienceLevelFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.experience_level().is_some()
    }

    fn matches(&self, item: &Item, criteria: &FilterCriteria) -> bool {
        let (Some(level), Item::Candidate(candidate)) = (criteria.experience_level(), item) else {
            return true;
        };
        candidate
            .experience_years()
            .is_none_or(|years| level.contains(years))
    }
}
