//! Pipeline for filtering deck items against search and filter criteria.
//!
//! This crate provides:
//! - FilterCriteria, the record behind the search bar and filter sheet
//! - Filter trait and one implementation per criterion
//! - FilterPipeline for composing filters into a short-circuiting chain
//!
//! ## Architecture
//! Each item is checked against the active filters in a fixed order:
//! 1. Search query (headline, subtitle, description, tags)
//! 2. Location
//! 3. Remote only
//! 4. Job types (ORed)
//! 5. Skills (ORed)
//! 6. Experience level
//! 7. Salary range
//!
//! The first failing filter rejects the item. Surviving items keep their
//! repository order.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{ItemRepository, Role};
//! use pipeline::{FilterCriteria, FilterPipeline};
//!
//! let repository = ItemRepository::sample();
//! let criteria = FilterCriteria::new().with_skill("Figma");
//! let deck = FilterPipeline::standard().apply(repository.list(Role::Recruiter), &criteria);
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use criteria::{ExperienceLevel, FilterCriteria, SalaryBand};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
