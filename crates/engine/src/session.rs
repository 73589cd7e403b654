//! The swipe session: one explicit state container for role, filters,
//! deck and match state.
//!
//! Presentation holds a `SwipeSession`, forwards user intents to it and
//! renders the `DeckSnapshot` values it returns. Every transition is a
//! method taking `&mut self`; nothing is global.
//!
//! ## Gesture flow
//! 1. `drag_release` / `press` interpret the input and, for a commit,
//!    request the exit of the top card (`GestureOutcome::Exiting`)
//! 2. presentation plays the exit animation
//! 3. `finish_exit` commits the removal and resolves a possible match
//!    (or `cancel_exit` keeps the card)
//!
//! `submit_decision` runs steps 1 and 3 at once for callers that already
//! know the decision and the item it targets.
//!
//! Refused transitions (duplicate decisions, non-top items, gestures
//! during an exit or a match celebration) are logged and leave the state
//! untouched; callers always get a valid snapshot back.

use crate::config::EngineConfig;
use crate::deck::{Deck, DeckStatus, PendingExit};
use crate::error::{DeckError, EngineConfigError};
use crate::gesture::{ButtonAction, Decision, DragOffset, ExitMotion, GestureInterpreter};
use crate::matching::{MatchOutcome, MatchRecord, MatchResolver, RandomSource, ThreadRandom};
use catalog::{Item, ItemId, ItemRepository, Role};
use pipeline::{FilterCriteria, FilterPipeline};
use serde::Serialize;
use std::sync::Arc;

// ============================================================================
// Presentation values
// ============================================================================

/// Everything presentation needs to render the deck
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSnapshot {
    pub role: Option<Role>,
    pub status: DeckStatus,
    pub items: Vec<Item>,
    pub top: Option<Item>,
    pub criteria: FilterCriteria,
    /// Match waiting to be celebrated; gestures are refused until dismissed
    pub pending_match: Option<Item>,
    /// Card currently animating off the deck
    pub exiting: Option<PendingExit>,
}

/// An accepted exit request, with the animation to play
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitPlan {
    pub item_id: ItemId,
    pub decision: Decision,
    pub motion: ExitMotion,
}

/// What a released drag or button tap did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GestureOutcome {
    /// Below threshold or invalid input; animate back to the origin
    SnapBack,
    /// The top card leaves; call `finish_exit` once the animation is done
    Exiting(ExitPlan),
    /// Nothing to act on, or input is blocked
    Ignored,
}

/// Buttons on the match celebration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchAction {
    KeepSwiping,
    SendMessage,
}

/// Where presentation should go after a celebration is dismissed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Navigation {
    Deck,
    Chat {
        #[serde(rename = "itemId")]
        item_id: ItemId,
    },
}

// ============================================================================
// Session
// ============================================================================

pub struct SwipeSession {
    repository: Arc<ItemRepository>,
    pipeline: FilterPipeline,
    interpreter: GestureInterpreter,
    resolver: MatchResolver,
    random: Box<dyn RandomSource>,
    role: Option<Role>,
    criteria: FilterCriteria,
    deck: Deck,
    celebration: Option<Item>,
    matches: Vec<MatchRecord>,
}

impl SwipeSession {
    /// A session with no role yet. Draws come from the thread RNG.
    ///
    /// Fails when `config` carries thresholds the engine cannot use.
    pub fn idle(
        repository: Arc<ItemRepository>,
        config: EngineConfig,
    ) -> Result<Self, EngineConfigError> {
        config.validate()?;
        Ok(Self {
            repository,
            pipeline: FilterPipeline::standard(),
            interpreter: GestureInterpreter::new(config.gesture),
            resolver: MatchResolver::new(config.matching),
            random: Box::new(ThreadRandom),
            role: None,
            criteria: FilterCriteria::default(),
            deck: Deck::default(),
            celebration: None,
            matches: Vec::new(),
        })
    }

    /// A session dealt for `role` with default criteria
    pub fn new(
        repository: Arc<ItemRepository>,
        config: EngineConfig,
        role: Role,
    ) -> Result<Self, EngineConfigError> {
        let mut session = Self::idle(repository, config)?;
        session.start(role, FilterCriteria::default());
        Ok(session)
    }

    /// Replace the random source (seeded or scripted draws)
    pub fn with_random_source(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// Replace the filter chain
    pub fn with_pipeline(mut self, pipeline: FilterPipeline) -> Self {
        self.pipeline = pipeline;
        self.deal();
        self
    }

    /// Begin swiping as `role`. `seed_criteria` carries profile-derived
    /// defaults and is taken as-is.
    pub fn start(&mut self, role: Role, seed_criteria: FilterCriteria) -> DeckSnapshot {
        tracing::info!("Starting session as {}", role);
        self.role = Some(role);
        self.criteria = seed_criteria;
        self.celebration = None;
        self.matches.clear();
        self.deal();
        self.snapshot()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn status(&self) -> DeckStatus {
        match self.role {
            Some(_) => self.deck.status(),
            None => DeckStatus::Idle,
        }
    }

    pub fn current_deck(&self) -> &[Item] {
        self.deck.items()
    }

    pub fn top_item(&self) -> Option<&Item> {
        self.deck.top()
    }

    /// Match history of this role, oldest first
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn pending_match(&self) -> Option<&Item> {
        self.celebration.as_ref()
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            role: self.role,
            status: self.status(),
            items: self.deck.items().to_vec(),
            top: self.deck.top().cloned(),
            criteria: self.criteria.clone(),
            pending_match: self.celebration.clone(),
            exiting: self.deck.pending_exit().cloned(),
        }
    }

    // ------------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------------

    /// Handle a drag release on the top card
    pub fn drag_release(&mut self, offset: DragOffset, velocity: Option<f32>) -> GestureOutcome {
        let decision = self.interpreter.interpret(offset, velocity);
        self.begin_exit(decision)
    }

    /// Handle an action button tap
    pub fn press(&mut self, action: ButtonAction) -> GestureOutcome {
        let decision = self.interpreter.press(action);
        self.begin_exit(decision)
    }

    /// Commit the pending exit and resolve a match for accept/super-like.
    ///
    /// Without a pending exit this is a no-op.
    pub fn finish_exit(&mut self) -> (DeckSnapshot, Option<MatchOutcome>) {
        let Some(pending) = self.deck.pending_exit().cloned() else {
            tracing::debug!("finish_exit without a pending exit");
            return (self.snapshot(), None);
        };
        let outcome = self.commit(&pending.item_id);
        (self.snapshot(), outcome)
    }

    /// Abort the pending exit; the card returns to the top
    pub fn cancel_exit(&mut self) -> DeckSnapshot {
        if let Some(pending) = self.deck.cancel_exit() {
            tracing::debug!("Cancelled exit of item {}", pending.item_id);
        }
        self.snapshot()
    }

    /// Apply a decision to `item_id` in one step.
    ///
    /// Cancel, refused decisions and decisions while a celebration is
    /// pending return the unchanged snapshot and no outcome. Reject returns
    /// no outcome; accept and super-like always return one.
    pub fn submit_decision(
        &mut self,
        item_id: &str,
        decision: Decision,
    ) -> (DeckSnapshot, Option<MatchOutcome>) {
        if !decision.is_commit() {
            return (self.snapshot(), None);
        }
        if let Some(item) = &self.celebration {
            tracing::warn!(
                "Ignoring {:?} on {}: match with {} not dismissed",
                decision,
                item_id,
                item.id()
            );
            return (self.snapshot(), None);
        }
        if let Err(e) = self.deck.request_exit(item_id, decision) {
            self.log_refusal(&e);
            return (self.snapshot(), None);
        }
        let outcome = self.commit(item_id);
        (self.snapshot(), outcome)
    }

    // ------------------------------------------------------------------------
    // Filters and role
    // ------------------------------------------------------------------------

    /// Replace the criteria and re-deal
    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> DeckSnapshot {
        self.criteria = criteria;
        self.deal();
        self.snapshot()
    }

    pub fn clear_filters(&mut self) -> DeckSnapshot {
        self.apply_filters(FilterCriteria::default())
    }

    /// Re-deal with the current criteria
    pub fn refresh(&mut self) -> DeckSnapshot {
        self.deal();
        self.snapshot()
    }

    /// Switch to `role` with a fresh search context: default criteria, a
    /// new deck and an empty match history.
    pub fn switch_role(&mut self, role: Role) -> DeckSnapshot {
        if let Some(previous) = self.role {
            tracing::info!("Switching role {} -> {}", previous, role);
        }
        self.start(role, FilterCriteria::default())
    }

    /// Switch to the other role; an idle session starts as job seeker
    pub fn toggle_role(&mut self) -> DeckSnapshot {
        let role = self.role.map_or(Role::JobSeeker, Role::toggled);
        self.switch_role(role)
    }

    /// Close the match celebration.
    ///
    /// Returns the matched item exactly once, with the screen to show next.
    pub fn dismiss_match(&mut self, action: MatchAction) -> Option<(Item, Navigation)> {
        let item = self.celebration.take()?;
        let navigation = match action {
            MatchAction::KeepSwiping => Navigation::Deck,
            MatchAction::SendMessage => Navigation::Chat {
                item_id: item.id().to_string(),
            },
        };
        tracing::debug!("Dismissed match with {} ({:?})", item.id(), action);
        Some((item, navigation))
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn deal(&mut self) {
        let items = match self.role {
            Some(role) => self.pipeline.apply(self.repository.list(role), &self.criteria),
            None => Vec::new(),
        };
        tracing::info!(
            "Dealt {} item(s) for {}",
            items.len(),
            self.role.map_or_else(|| "idle session".to_string(), |r| r.to_string())
        );
        self.deck = Deck::new(items);
    }

    fn begin_exit(&mut self, decision: Decision) -> GestureOutcome {
        if let Some(item) = &self.celebration {
            tracing::warn!("Gesture ignored: match with {} not dismissed", item.id());
            return GestureOutcome::Ignored;
        }
        let Some(motion) = decision.exit_motion(self.interpreter.config()) else {
            return GestureOutcome::SnapBack;
        };
        let Some(top_id) = self.deck.top().map(|item| item.id().to_string()) else {
            tracing::debug!("Gesture ignored: deck is empty");
            return GestureOutcome::Ignored;
        };

        match self.deck.request_exit(&top_id, decision) {
            Ok(pending) => GestureOutcome::Exiting(ExitPlan {
                item_id: pending.item_id,
                decision: pending.decision,
                motion,
            }),
            Err(e) => {
                self.log_refusal(&e);
                GestureOutcome::Ignored
            }
        }
    }

    fn commit(&mut self, item_id: &str) -> Option<MatchOutcome> {
        let (item, decision) = match self.deck.commit_removal(item_id) {
            Ok(removed) => removed,
            Err(e) => {
                self.log_refusal(&e);
                return None;
            }
        };
        tracing::debug!(
            "Committed {:?} on {} ({} left)",
            decision,
            item.id(),
            self.deck.len()
        );

        let outcome = self
            .resolver
            .resolve(decision, &item, self.random.as_mut())?;
        if let MatchOutcome::Matched(matched) = &outcome {
            tracing::info!("It's a match: {}", matched);
            self.matches.push(MatchRecord {
                item: matched.clone(),
                decision,
                sequence: self.matches.len() + 1,
            });
            self.celebration = Some(matched.clone());
        }
        Some(outcome)
    }

    fn log_refusal(&self, error: &DeckError) {
        match error {
            DeckError::DuplicateDecision { .. } => tracing::debug!("Ignored: {}", error),
            _ => tracing::warn!("Refused: {}", error),
        }
    }
}
