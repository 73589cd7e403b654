//! The deck state machine.
//!
//! A deck is the filtered working set for one role. Only the first item is
//! "top" and accepts decisions. Removing an item is a two-phase commit:
//!
//! 1. `request_exit` marks the top item as leaving (the card animates out)
//! 2. `commit_removal` takes it out of the working set
//!
//! While an exit is pending no other request is accepted, so two releases
//! in quick succession can never both claim the top card. Removed ids are
//! remembered for the lifetime of the deck, which makes every decision
//! idempotent per item.

use crate::error::DeckError;
use crate::gesture::Decision;
use catalog::{Item, ItemId};
use serde::Serialize;
use std::collections::HashSet;

/// Lifecycle state of a deck as seen by presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeckStatus {
    /// No role chosen yet, so there is no deck to show
    Idle,
    /// A top item is available
    Active,
    /// Nothing left; refresh or clear filters to recover
    Exhausted,
}

/// A committed decision that is waiting for its exit animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingExit {
    pub item_id: ItemId,
    pub decision: Decision,
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    /// Working set; `items[0]` is the top card
    items: Vec<Item>,
    removed: HashSet<ItemId>,
    pending: Option<PendingExit>,
}

impl Deck {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            removed: HashSet::new(),
            pending: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The only item that accepts decisions
    pub fn top(&self) -> Option<&Item> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> DeckStatus {
        if self.items.is_empty() {
            DeckStatus::Exhausted
        } else {
            DeckStatus::Active
        }
    }

    /// Number of items removed since the deck was dealt
    pub fn decided_count(&self) -> usize {
        self.removed.len()
    }

    pub fn was_decided(&self, id: &str) -> bool {
        self.removed.contains(id)
    }

    pub fn pending_exit(&self) -> Option<&PendingExit> {
        self.pending.as_ref()
    }

    /// Phase one: mark the top item as leaving.
    pub fn request_exit(
        &mut self,
        item_id: &str,
        decision: Decision,
    ) -> Result<PendingExit, DeckError> {
        if !decision.is_commit() {
            return Err(DeckError::CancelIsNotADecision);
        }
        if let Some(pending) = &self.pending {
            return Err(DeckError::ExitPending {
                id: pending.item_id.clone(),
            });
        }
        self.check_top(item_id)?;

        let pending = PendingExit {
            item_id: item_id.to_string(),
            decision,
        };
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    /// Abandon a pending exit; the item stays on top.
    pub fn cancel_exit(&mut self) -> Option<PendingExit> {
        self.pending.take()
    }

    /// Phase two: remove the item whose exit was requested.
    pub fn commit_removal(&mut self, item_id: &str) -> Result<(Item, Decision), DeckError> {
        if self.removed.contains(item_id) {
            return Err(DeckError::DuplicateDecision {
                id: item_id.to_string(),
            });
        }
        let decision = match &self.pending {
            Some(pending) if pending.item_id == item_id => pending.decision,
            _ => {
                return Err(DeckError::NoPendingExit {
                    id: item_id.to_string(),
                });
            }
        };
        let position = self
            .items
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or_else(|| DeckError::UnknownItem {
                id: item_id.to_string(),
            })?;

        self.pending = None;
        let item = self.items.remove(position);
        self.removed.insert(item_id.to_string());
        Ok((item, decision))
    }

    /// Both phases at once, for callers that do not animate.
    pub fn submit(&mut self, item_id: &str, decision: Decision) -> Result<(Item, Decision), DeckError> {
        self.request_exit(item_id, decision)?;
        self.commit_removal(item_id)
    }

    fn check_top(&self, item_id: &str) -> Result<(), DeckError> {
        if self.removed.contains(item_id) {
            return Err(DeckError::DuplicateDecision {
                id: item_id.to_string(),
            });
        }
        match self.top() {
            Some(top) if top.id() == item_id => Ok(()),
            top => {
                if self.items.iter().any(|item| item.id() == item_id) {
                    Err(DeckError::NotTopItem {
                        id: item_id.to_string(),
                        top: top.map(|item| item.id().to_string()),
                    })
                } else {
                    Err(DeckError::UnknownItem {
                        id: item_id.to_string(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ItemRepository, Role};

    fn sample_deck() -> Deck {
        Deck::new(ItemRepository::sample().list(Role::JobSeeker).to_vec())
    }

    fn ids(deck: &Deck) -> Vec<&str> {
        deck.items().iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_submit_removes_top() {
        let mut deck = sample_deck();
        assert_eq!(deck.status(), DeckStatus::Active);

        let (item, decision) = deck.submit("1", Decision::Reject).unwrap();
        assert_eq!(item.id(), "1");
        assert_eq!(decision, Decision::Reject);
        assert_eq!(ids(&deck), vec!["2", "3"]);
        assert_eq!(deck.top().unwrap().id(), "2");
        assert_eq!(deck.decided_count(), 1);
        assert!(deck.was_decided("1"));
        assert!(!deck.was_decided("2"));
    }

    #[test]
    fn test_exhaustion() {
        let mut deck = sample_deck();
        for id in ["1", "2", "3"] {
            deck.submit(id, Decision::Accept).unwrap();
        }
        assert!(deck.is_empty());
        assert!(deck.top().is_none());
        assert_eq!(deck.status(), DeckStatus::Exhausted);
    }

    #[test]
    fn test_duplicate_decision_is_refused() {
        let mut deck = sample_deck();
        deck.submit("1", Decision::Accept).unwrap();

        let err = deck.submit("1", Decision::Accept).unwrap_err();
        assert_eq!(err, DeckError::DuplicateDecision { id: "1".to_string() });
        assert_eq!(ids(&deck), vec!["2", "3"]);
    }

    #[test]
    fn test_only_top_accepts_decisions() {
        let mut deck = sample_deck();

        let err = deck.submit("3", Decision::Reject).unwrap_err();
        assert_eq!(
            err,
            DeckError::NotTopItem {
                id: "3".to_string(),
                top: Some("1".to_string())
            }
        );

        let err = deck.submit("42", Decision::Reject).unwrap_err();
        assert_eq!(err, DeckError::UnknownItem { id: "42".to_string() });
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_two_phase_commit() {
        let mut deck = sample_deck();

        let pending = deck.request_exit("1", Decision::SuperLike).unwrap();
        assert_eq!(pending.item_id, "1");
        // still on top until the removal commits
        assert_eq!(ids(&deck), vec!["1", "2", "3"]);

        // a second release while animating is refused
        let err = deck.request_exit("1", Decision::Accept).unwrap_err();
        assert_eq!(err, DeckError::ExitPending { id: "1".to_string() });

        let (item, decision) = deck.commit_removal("1").unwrap();
        assert_eq!(item.id(), "1");
        assert_eq!(decision, Decision::SuperLike);
        assert!(deck.pending_exit().is_none());

        let err = deck.commit_removal("1").unwrap_err();
        assert_eq!(err, DeckError::DuplicateDecision { id: "1".to_string() });
    }

    #[test]
    fn test_cancel_exit_leaves_deck_untouched() {
        let mut deck = sample_deck();
        deck.request_exit("1", Decision::Reject).unwrap();

        let cancelled = deck.cancel_exit().unwrap();
        assert_eq!(cancelled.decision, Decision::Reject);
        assert_eq!(ids(&deck), vec!["1", "2", "3"]);

        let err = deck.commit_removal("1").unwrap_err();
        assert_eq!(err, DeckError::NoPendingExit { id: "1".to_string() });
    }

    #[test]
    fn test_cancel_is_not_a_decision() {
        let mut deck = sample_deck();
        assert_eq!(
            deck.submit("1", Decision::Cancel).unwrap_err(),
            DeckError::CancelIsNotADecision
        );
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_empty_deck() {
        let mut deck = Deck::default();
        assert_eq!(deck.status(), DeckStatus::Exhausted);
        assert!(matches!(
            deck.request_exit("1", Decision::Accept),
            Err(DeckError::UnknownItem { .. })
        ));
    }
}
