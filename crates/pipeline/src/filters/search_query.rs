//! Free-text search across the visible card fields.

use super::contains_lowercase;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Item;

/// Keeps items whose text fields contain the search query.
///
/// ## Algorithm
/// - Jobs: title, company, description, then tags
/// - Candidates: name, title, description, then skills
/// - Case-insensitive substring match of the query as typed; a query of
///   only whitespace turns the filter off
pub struct SearchQueryFilter;

impl Filter for SearchQueryFilter {
    fn name(&self) -> &str {
        "SearchQueryFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.has_search_query()
    }

    fn matches(&self, item: &Item, criteria: &FilterCriteria) -> bool {
        if !criteria.has_search_query() {
            return true;
        }
        let query = criteria.search_query.to_lowercase();

        let fields = match item {
            Item::Job(job) => [&job.title, &job.company, &job.description],
            Item::Candidate(candidate) => {
                [&candidate.name, &candidate.title, &candidate.description]
            }
        };
        fields.iter().any(|field| contains_lowercase(field, &query))
            || item.tags().iter().any(|tag| contains_lowercase(tag, &query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::fixtures::{candidate, job};

    #[test]
    fn test_search_matches_job_fields() {
        let item = job("1", "Frontend Developer", "Austin", &["React"], None);
        let filter = SearchQueryFilter;

        assert!(filter.matches(&item, &FilterCriteria::new().with_search("frontend")));
        assert!(filter.matches(&item, &FilterCriteria::new().with_search("DEVELOPER CO.")));
        assert!(filter.matches(&item, &FilterCriteria::new().with_search("work as")));
        assert!(filter.matches(&item, &FilterCriteria::new().with_search("reac")));
        assert!(!filter.matches(&item, &FilterCriteria::new().with_search("python")));
    }

    #[test]
    fn test_search_matches_candidate_fields() {
        let item = candidate("1", "Jamie Smith", &["Figma"], None);
        let filter = SearchQueryFilter;

        assert!(filter.matches(&item, &FilterCriteria::new().with_search("jamie")));
        assert!(filter.matches(&item, &FilterCriteria::new().with_search("engineer")));
        assert!(filter.matches(&item, &FilterCriteria::new().with_search("figma")));
        assert!(!filter.matches(&item, &FilterCriteria::new().with_search("Taylor")));
    }

    #[test]
    fn test_blank_query_inactive() {
        let filter = SearchQueryFilter;
        assert!(!filter.is_active(&FilterCriteria::new().with_search("  ")));
        assert!(filter.is_active(&FilterCriteria::new().with_search(" ux ")));
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let item = candidate("1", "Dev", &[], None);
        let filter = SearchQueryFilter;

        assert!(filter.matches(&item, &FilterCriteria::new().with_search("dev")));
        assert!(!filter.matches(&item, &FilterCriteria::new().with_search("dev ")));
    }
}
