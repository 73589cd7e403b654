//! Location substring filter.

use super::contains_lowercase;
use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Item;

/// Keeps items whose location contains the requested location text.
pub struct LocationFilter;

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.has_location()
    }

    fn matches(&self, item: &Item, criteria: &FilterCriteria) -> bool {
        !criteria.has_location()
            || contains_lowercase(item.location(), &criteria.location.to_lowercase())
    }
}
