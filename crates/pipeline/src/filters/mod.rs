//! Filter implementations for the deck pipeline.
//!
//! One filter per criterion. `FilterPipeline::standard` composes them in
//! the order they are declared here.

pub mod search_query;
pub mod location;
pub mod remote_only;
pub mod job_type;
pub mod skills;
pub mod experience_level;
pub mod salary_range;

// Re-export for convenience
pub use experience_level::ExperienceLevelFilter;
pub use job_type::JobTypeFilter;
pub use location::LocationFilter;
pub use remote_only::RemoteOnlyFilter;
pub use salary_range::SalaryRangeFilter;
pub use search_query::SearchQueryFilter;
pub use skills::SkillsFilter;

/// Case-insensitive substring containment.
///
/// `needle` must already be lowercased.
pub(crate) fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True if any tag contains any of the needles (all lowercased)
pub(crate) fn any_tag_contains(tags: &[String], needles: &[String]) -> bool {
    needles
        .iter()
        .any(|needle| tags.iter().any(|tag| contains_lowercase(tag, needle)))
}
