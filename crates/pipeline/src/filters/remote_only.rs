//! Filter to keep only remote jobs.

use super::contains_lowercase;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Item;

/// Tag text that marks a job as remote
pub const REMOTE_MARKER: &str = "remote";

/// Keeps jobs tagged as remote.
///
/// Candidates carry no remote marker, so the criterion does not apply to
/// them and they always pass.
pub struct RemoteOnlyFilter;

impl Filter for RemoteOnlyFilter {
    fn name(&self) -> &str {
        "RemoteOnlyFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.remote_only
    }

    fn matches(&self, item: &Item, _criteria: &FilterCriteria) -> bool {
        match item {
            Item::Job(job) => job
                .tags
                .iter()
                .any(|tag| contains_lowercase(tag, REMOTE_MARKER)),
            Item::Candidate(_) => true,
        }
    }
}
