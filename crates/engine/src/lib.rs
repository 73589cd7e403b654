//! # Engine Crate
//!
//! The swipe engine: turns gestures into decisions, keeps the deck and
//! resolves matches.
//!
//! ## Main Components
//!
//! - **gesture**: GestureInterpreter, drag thresholds and action buttons
//! - **deck**: The deck state machine with its two-phase removal
//! - **matching**: Stochastic match resolution behind a RandomSource
//! - **session**: SwipeSession, the state container presentation talks to
//! - **config**: EngineConfig loaded from JSON
//! - **error**: DeckError and EngineConfigError
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{ItemRepository, Role};
//! use engine::{ButtonAction, EngineConfig, GestureOutcome, SwipeSession};
//! use std::sync::Arc;
//!
//! let mut session = SwipeSession::new(
//!     Arc::new(ItemRepository::sample()),
//!     EngineConfig::default(),
//!     Role::JobSeeker,
//! )?;
//! if let GestureOutcome::Exiting(plan) = session.press(ButtonAction::Accept) {
//!     // play plan.motion, then
//!     let (snapshot, outcome) = session.finish_exit();
//! }
//! ```

pub mod config;
pub mod deck;
pub mod error;
pub mod gesture;
pub mod matching;
pub mod session;

pub use config::EngineConfig;
pub use deck::{Deck, DeckStatus, PendingExit};
pub use error::{DeckError, EngineConfigError};
pub use gesture::{ButtonAction, Decision, DragOffset, ExitMotion, GestureConfig, GestureInterpreter};
pub use matching::{
    MatchOutcome, MatchPolicy, MatchRecord, MatchResolver, RandomSource, ScriptedRandom,
    SeededRandom, ThreadRandom,
};
pub use session::{DeckSnapshot, ExitPlan, GestureOutcome, MatchAction, Navigation, SwipeSession};
