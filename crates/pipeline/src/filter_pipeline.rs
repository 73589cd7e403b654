//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern and evaluates the chain
//! item by item.

use crate::criteria::FilterCriteria;
use crate::filters::{
    ExperienceLevelFilter, JobTypeFilter, LocationFilter, RemoteOnlyFilter, SalaryRangeFilter,
    SearchQueryFilter, SkillsFilter,
};
use crate::traits::Filter;
use catalog::Item;
use rayon::prelude::*;

/// Working sets at least this large are filtered on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 2_048;

/// Chains multiple filters together into a predicate chain.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchQueryFilter)
///     .add_filter(LocationFilter)
///     .add_filter(SkillsFilter);
///
/// let visible = pipeline.apply(repository.list(role), &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline used by swipe decks, in its fixed evaluation order:
    /// search query, location, remote only, job types, skills,
    /// experience level, salary range.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchQueryFilter)
            .add_filter(LocationFilter)
            .add_filter(RemoteOnlyFilter)
            .add_filter(JobTypeFilter)
            .add_filter(SkillsFilter)
            .add_filter(ExperienceLevelFilter)
            .add_filter(SalaryRangeFilter)
    }

    /// Add a filter to the end of the chain (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in evaluation order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply the chain to a sequence of items.
    ///
    /// ## Algorithm
    /// 1. Keep only the filters whose criterion is set
    /// 2. For each item, evaluate the active filters in order, stopping at
    ///    the first one that fails
    /// 3. Collect the passing items, preserving their relative order
    ///
    /// Items are cloned, never reordered. Default criteria return the
    /// input unchanged.
    pub fn apply(&self, items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
        let active: Vec<&dyn Filter> = self
            .filters
            .iter()
            .map(|f| f.as_ref())
            .filter(|f| f.is_active(criteria))
            .collect();

        if active.is_empty() {
            tracing::debug!("No active filters (input count: {})", items.len());
            return items.to_vec();
        }

        tracing::debug!(
            "Applying filters: {} (input count: {})",
            active.iter().map(|f| f.name()).collect::<Vec<_>>().join(", "),
            items.len()
        );

        let passes = |item: &&Item| active.iter().all(|f| f.matches(item, criteria));
        let filtered: Vec<Item> = if items.len() >= PARALLEL_THRESHOLD {
            items.par_iter().filter(passes).cloned().collect()
        } else {
            items.iter().filter(passes).cloned().collect()
        };

        tracing::debug!("Filters applied (output count: {})", filtered.len());
        filtered
    }

    /// Name of the first filter that rejects the item, if any.
    ///
    /// Follows the same short-circuit order as `apply`.
    pub fn first_failure(&self, item: &Item, criteria: &FilterCriteria) -> Option<&str> {
        self.filters
            .iter()
            .filter(|f| f.is_active(criteria))
            .find(|f| !f.matches(item, criteria))
            .map(|f| f.name())
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ItemRepository, Role};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls so tests can observe short-circuiting
    struct CountingFilter {
        name: &'static str,
        verdict: bool,
        calls: Arc<AtomicUsize>,
    }

    impl Filter for CountingFilter {
        fn name(&self) -> &str {
            self.name
        }

        fn is_active(&self, _criteria: &FilterCriteria) -> bool {
            true
        }

        fn matches(&self, _item: &Item, _criteria: &FilterCriteria) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.verdict
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let repository = ItemRepository::sample();

        let filtered = pipeline.apply(repository.list(Role::JobSeeker), &FilterCriteria::new());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let repository = ItemRepository::sample();
        let items = repository.list(Role::Recruiter);

        let filtered = FilterPipeline::standard().apply(items, &FilterCriteria::new());
        assert_eq!(filtered, items.to_vec());
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            FilterPipeline::standard().filter_names(),
            vec![
                "SearchQueryFilter",
                "LocationFilter",
                "RemoteOnlyFilter",
                "JobTypeFilter",
                "SkillsFilter",
                "ExperienceLevelFilter",
                "SalaryRangeFilter",
            ]
        );
    }

    #[test]
    fn test_short_circuits_on_first_failure() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let pipeline = FilterPipeline::new()
            .add_filter(CountingFilter {
                name: "Rejects",
                verdict: false,
                calls: first.clone(),
            })
            .add_filter(CountingFilter {
                name: "NeverReached",
                verdict: true,
                calls: second.clone(),
            });

        let repository = ItemRepository::sample();
        let filtered = pipeline.apply(repository.list(Role::JobSeeker), &FilterCriteria::new());

        assert!(filtered.is_empty());
        assert_eq!(first.load(Ordering::SeqCst), 3);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_first_failure_reports_filter_name() {
        let repository = ItemRepository::sample();
        let pipeline = FilterPipeline::standard();
        let criteria = FilterCriteria::new()
            .with_location("new york")
            .with_skill("Kotlin");

        let frontend = &repository.list(Role::JobSeeker)[0];
        assert_eq!(pipeline.first_failure(frontend, &criteria), Some("LocationFilter"));

        let designer = &repository.list(Role::JobSeeker)[1];
        assert_eq!(pipeline.first_failure(designer, &criteria), Some("SkillsFilter"));

        let criteria = FilterCriteria::new().with_location("new york");
        assert_eq!(pipeline.first_failure(designer, &criteria), None);
    }
}
