//! Error types for the engine crate.
//!
//! `DeckError` describes refused deck transitions. The session handles
//! every one of them locally: it logs the refusal and leaves the deck as it
//! was. `EngineConfigError` is returned when a configuration file carries
//! values the engine cannot work with.

use catalog::ItemId;
use thiserror::Error;

/// Reasons a deck refuses a decision
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The item was already removed from this deck
    #[error("Item {id} was already decided")]
    DuplicateDecision { id: ItemId },

    /// Only the top item accepts decisions
    #[error("Item {id} is not the top item (top: {top:?})")]
    NotTopItem { id: ItemId, top: Option<ItemId> },

    /// The item is not in this deck at all
    #[error("Item {id} is not in the deck")]
    UnknownItem { id: ItemId },

    /// Another item is still animating off the deck
    #[error("Exit of item {id} is still pending")]
    ExitPending { id: ItemId },

    /// A removal was committed without a matching exit request
    #[error("No pending exit for item {id}")]
    NoPendingExit { id: ItemId },

    /// Cancel never removes anything
    #[error("Cancel is not a deck decision")]
    CancelIsNotADecision,
}

/// Invalid values in an engine configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineConfigError {
    /// Distances and durations must be finite and non-negative
    #[error("Invalid {name}: {value} (must be finite and >= 0)")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// Match thresholds are compared against draws in [0, 1)
    #[error("Invalid {name}: {value} (must be within [0, 1])")]
    InvalidProbability { name: &'static str, value: f64 },
}
