//! Salary band filter.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Item;

/// Keeps jobs whose advertised salary band overlaps the selected bucket.
///
/// Candidates, and jobs without a readable salary, always pass.
pub struct SalaryRangeFilter;

impl Filter for SalaryRangeFilter {
    fn name(&self) -> &str {
        "SalaryRangeFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.salary_band().is_some()
    }

    fn matches(&self, item: &Item, criteria: &FilterCriteria) -> bool {
        let (Some(band), Item::Job(job)) = (criteria.salary_band(), item) else {
            return true;
        };
        job.salary_range().is_none_or(|range| band.overlaps(range))
    }
}
