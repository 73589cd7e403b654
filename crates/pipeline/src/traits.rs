//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be evaluated against deck items.

use crate::criteria::FilterCriteria;
use catalog::Item;

/// Core trait for a single filter criterion.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be evaluated from rayon workers
/// - A filter only judges one item at a time, so the pipeline can stop at
///   the first failing criterion
/// - An inactive filter (its criterion left at the default) is skipped
///   entirely
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether the criteria constrain anything this filter checks
    fn is_active(&self, criteria: &FilterCriteria) -> bool;

    /// Does the item satisfy this filter's criterion?
    ///
    /// Only called when `is_active` returned true. Criteria that do not
    /// apply to the item's variant must return `true`.
    fn matches(&self, item: &Item, criteria: &FilterCriteria) -> bool;
}
