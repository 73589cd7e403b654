//! Job type filter (full-time, contract, ...).

use super::any_tag_contains;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Item;

/// Keeps jobs with a tag matching at least one selected job type.
///
/// ## Algorithm
/// Selected types are ORed: a job passes if any of its tags contains any
/// selected type, case-insensitively. Candidates always pass.
pub struct JobTypeFilter;

impl Filter for JobTypeFilter {
    fn name(&self) -> &str {
        "JobTypeFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        !criteria.job_types.is_empty()
    }

    fn matches(&self, item: &Item, criteria: &FilterCriteria) -> bool {
        match item {
            Item::Job(job) => {
                let types: Vec<String> =
                    criteria.job_types.iter().map(|t| t.to_lowercase()).collect();
                any_tag_contains(&job.tags, &types)
            }
            Item::Candidate(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::{candidate, job};

    #[test]
    fn test_job_type_filter_ors_selected_types() {
        let contract = job("1", "Engineer", "Austin", &["Contract", "Rust"], None);
        let full_time = job("2", "Engineer", "Austin", &["Full-time"], None);
        let untagged = job("3", "Engineer", "Austin", &["Go"], None);
        let criteria = FilterCriteria::new()
            .with_job_type("contract")
            .with_job_type("Full-Time");

        let filter = JobTypeFilter;
        assert!(filter.matches(&contract, &criteria));
        assert!(filter.matches(&full_time, &criteria));
        assert!(!filter.matches(&untagged, &criteria));
    }

    #[test]
    fn test_candidates_pass() {
        let item = candidate("1", "Alex", &["React"], None);
        let criteria = FilterCriteria::new().with_job_type("Internship");
        assert!(JobTypeFilter.matches(&item, &criteria));
    }
}
