//! The item repository: an immutable, ordered snapshot of swipeable items.
//!
//! The repository owns one list per role and never changes after it is
//! built. Decks borrow from it and clone the items they keep, so repeated
//! filtering and refreshing always starts from the same master order.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::sample;
use crate::types::{Candidate, Item, ItemId, Job, Role};
use std::collections::HashMap;
use std::path::Path;

/// Master list of swipeable items for both roles.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    jobs: Vec<Item>,
    candidates: Vec<Item>,
    /// Position of each job id in `jobs`
    job_index: HashMap<ItemId, usize>,
    /// Position of each candidate id in `candidates`
    candidate_index: HashMap<ItemId, usize>,
}

impl ItemRepository {
    /// Build a repository, rejecting duplicate ids within a role.
    ///
    /// Input order is kept: it is the order decks are dealt in.
    pub fn new(jobs: Vec<Job>, candidates: Vec<Candidate>) -> Result<Self> {
        let jobs: Vec<Item> = jobs.into_iter().map(Item::Job).collect();
        let candidates: Vec<Item> = candidates.into_iter().map(Item::Candidate).collect();

        let job_index = build_index(Role::JobSeeker, &jobs)?;
        let candidate_index = build_index(Role::Recruiter, &candidates)?;

        Ok(Self {
            jobs,
            candidates,
            job_index,
            candidate_index,
        })
    }

    /// The built-in mock catalog
    pub fn sample() -> Self {
        let jobs: Vec<Item> = sample::sample_jobs().into_iter().map(Item::Job).collect();
        let candidates: Vec<Item> = sample::sample_candidates()
            .into_iter()
            .map(Item::Candidate)
            .collect();
        let job_index = positions(&jobs);
        let candidate_index = positions(&candidates);
        Self {
            jobs,
            candidates,
            job_index,
            candidate_index,
        }
    }

    /// Load a catalog from a JSON fixture file.
    ///
    /// Format: `{ "jobs": [...], "candidates": [...] }`; either list may be
    /// omitted.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = parser::parse_catalog_file(path)?;
        let repository = Self::new(file.jobs, file.candidates)?;
        let (jobs, candidates) = repository.counts();
        tracing::info!(
            "Loaded catalog from {}: {} jobs, {} candidates",
            path.display(),
            jobs,
            candidates
        );
        Ok(repository)
    }

    /// All items for a role, in repository order
    pub fn list(&self, role: Role) -> &[Item] {
        match role {
            Role::JobSeeker => &self.jobs,
            Role::Recruiter => &self.candidates,
        }
    }

    /// Look up one item of a role by id
    pub fn get(&self, role: Role, id: &str) -> Option<&Item> {
        let (items, index) = match role {
            Role::JobSeeker => (&self.jobs, &self.job_index),
            Role::Recruiter => (&self.candidates, &self.candidate_index),
        };
        index.get(id).and_then(|&pos| items.get(pos))
    }

    /// (jobs, candidates)
    pub fn counts(&self) -> (usize, usize) {
        (self.jobs.len(), self.candidates.len())
    }
}

impl Default for ItemRepository {
    fn default() -> Self {
        Self::sample()
    }
}

fn positions(items: &[Item]) -> HashMap<ItemId, usize> {
    items
        .iter()
        .enumerate()
        .map(|(pos, item)| (item.id().to_string(), pos))
        .collect()
}

fn build_index(role: Role, items: &[Item]) -> Result<HashMap<ItemId, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        if index.insert(item.id().to_string(), pos).is_some() {
            return Err(CatalogError::DuplicateId {
                role: role.to_string(),
                id: item.id().to_string(),
            });
        }
    }
    Ok(index)
}
