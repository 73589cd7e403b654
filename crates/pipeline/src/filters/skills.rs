//! Skills filter, matched against job tags or candidate skills.

use super::any_tag_contains;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Item;

/// Keeps items with at least one tag or skill matching a selected skill.
pub struct SkillsFilter;

impl Filter for SkillsFilter {
    fn name(&self) -> &str {
        "SkillsFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        !criteria.skills.is_empty()
    }

    fn matches(&self, item: &Item, criteria: &FilterCriteria) -> bool {
        let skills: Vec<String> = criteria.skills.iter().map(|s| s.to_lowercase()).collect();
        any_tag_contains(item.tags(), &skills)
    }
}
