//! # Catalog Crate
//!
//! This crate holds the swipeable items: job postings for job seekers and
//! candidate profiles for recruiters.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Role, Job, Candidate, Item)
//! - **repository**: The immutable, ordered ItemRepository
//! - **parser**: JSON fixture loading and free-text field parsing
//! - **sample**: The built-in mock catalog
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{ItemRepository, Role};
//!
//! let repository = ItemRepository::sample();
//! for item in repository.list(Role::JobSeeker) {
//!     println!("{} at {}", item.headline(), item.subtitle());
//! }
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod repository;
pub mod sample;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use repository::ItemRepository;
pub use types::{Candidate, Item, ItemId, Job, Role};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_unique_per_role() {
        let repository = ItemRepository::sample();
        for role in [Role::JobSeeker, Role::Recruiter] {
            let items = repository.list(role);
            let mut ids: Vec<&str> = items.iter().map(|i| i.id()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), items.len());
        }
    }

    #[test]
    fn test_sample_items_carry_their_role() {
        let repository = ItemRepository::sample();
        assert!(repository
            .list(Role::JobSeeker)
            .iter()
            .all(|i| i.role() == Role::JobSeeker));
        assert!(repository
            .list(Role::Recruiter)
            .iter()
            .all(|i| i.role() == Role::Recruiter));
    }

    #[test]
    fn test_sample_parsed_fields() {
        let repository = ItemRepository::sample();
        match repository.get(Role::JobSeeker, "1") {
            Some(Item::Job(job)) => assert_eq!(job.salary_range(), Some((120_000, 150_000))),
            other => panic!("expected job, got {:?}", other),
        }
        match repository.get(Role::Recruiter, "2") {
            Some(Item::Candidate(c)) => assert_eq!(c.experience_years(), Some(3)),
            other => panic!("expected candidate, got {:?}", other),
        }
    }
}
