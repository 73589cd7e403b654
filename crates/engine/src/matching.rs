//! Match resolution for accept and super-like decisions.
//!
//! There is no backend to ask whether the other side is interested, so a
//! match is a weighted coin flip: one uniform draw in [0, 1) compared
//! against a per-decision threshold. The draw comes from a `RandomSource`
//! so tests and demos can force outcomes.

use crate::gesture::Decision;
use catalog::Item;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Source of uniform draws in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Reproducible draws from a seeded generator
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed queue of draws, then returns 0.0 forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn push(&mut self, draw: f64) {
        self.draws.push_back(draw);
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(0.0)
    }
}

/// Per-decision match thresholds. A draw strictly above the threshold
/// is a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchPolicy {
    pub accept_threshold: f64,
    pub super_like_threshold: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            accept_threshold: 0.5,
            super_like_threshold: 0.3,
        }
    }
}

impl MatchPolicy {
    /// Threshold for decisions that can match, `None` otherwise
    pub fn threshold_for(&self, decision: Decision) -> Option<f64> {
        match decision {
            Decision::Accept => Some(self.accept_threshold),
            Decision::SuperLike => Some(self.super_like_threshold),
            Decision::Reject | Decision::Cancel => None,
        }
    }
}

/// Result of resolving one accept or super-like
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "item", rename_all = "camelCase")]
pub enum MatchOutcome {
    Matched(Item),
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// A match made during the current session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub item: Item,
    pub decision: Decision,
    /// 1-based order in which matches happened
    pub sequence: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MatchResolver {
    policy: MatchPolicy,
}

impl MatchResolver {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Resolve a decision about `item`.
    ///
    /// Returns `None` without drawing for reject and cancel. Non-finite
    /// draws never match.
    pub fn resolve(
        &self,
        decision: Decision,
        item: &Item,
        random: &mut dyn RandomSource,
    ) -> Option<MatchOutcome> {
        let threshold = self.policy.threshold_for(decision)?;
        let draw = random.next_unit();
        let matched = draw.is_finite() && draw > threshold;

        tracing::debug!(
            "Resolved {:?} on {}: draw {:.3} vs threshold {:.2} -> {}",
            decision,
            item.id(),
            draw,
            threshold,
            if matched { "match" } else { "no match" }
        );

        Some(if matched {
            MatchOutcome::Matched(item.clone())
        } else {
            MatchOutcome::NoMatch
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ItemRepository, Role};

    fn item() -> Item {
        ItemRepository::sample().list(Role::JobSeeker)[0].clone()
    }

    #[test]
    fn test_accept_threshold() {
        let resolver = MatchResolver::default();
        let mut random = ScriptedRandom::new([0.51, 0.5, 0.2]);

        assert!(resolver.resolve(Decision::Accept, &item(), &mut random).unwrap().is_match());
        // exactly at the threshold is not above it
        assert_eq!(
            resolver.resolve(Decision::Accept, &item(), &mut random),
            Some(MatchOutcome::NoMatch)
        );
        assert_eq!(
            resolver.resolve(Decision::Accept, &item(), &mut random),
            Some(MatchOutcome::NoMatch)
        );
    }

    #[test]
    fn test_super_like_threshold() {
        let resolver = MatchResolver::default();
        let mut random = ScriptedRandom::new([0.9, 0.31, 0.3]);

        assert_eq!(
            resolver.resolve(Decision::SuperLike, &item(), &mut random),
            Some(MatchOutcome::Matched(item()))
        );
        assert!(resolver.resolve(Decision::SuperLike, &item(), &mut random).unwrap().is_match());
        assert!(!resolver.resolve(Decision::SuperLike, &item(), &mut random).unwrap().is_match());
    }

    #[test]
    fn test_reject_and_cancel_never_draw() {
        let resolver = MatchResolver::default();
        let mut random = ScriptedRandom::new([0.99]);

        assert_eq!(resolver.resolve(Decision::Reject, &item(), &mut random), None);
        assert_eq!(resolver.resolve(Decision::Cancel, &item(), &mut random), None);
        assert_eq!(random.remaining(), 1);
    }

    #[test]
    fn test_non_finite_draw_never_matches() {
        let resolver = MatchResolver::default();
        let mut random = ScriptedRandom::new([f64::NAN, f64::INFINITY]);

        assert_eq!(
            resolver.resolve(Decision::SuperLike, &item(), &mut random),
            Some(MatchOutcome::NoMatch)
        );
        assert_eq!(
            resolver.resolve(Decision::SuperLike, &item(), &mut random),
            Some(MatchOutcome::NoMatch)
        );
    }

    #[test]
    fn test_configurable_policy() {
        let resolver = MatchResolver::new(MatchPolicy {
            accept_threshold: 0.0,
            super_like_threshold: 1.0,
        });
        assert_eq!(resolver.policy().threshold_for(Decision::Accept), Some(0.0));
        assert_eq!(MatchResolver::default().policy(), &MatchPolicy::default());
        let mut random = ScriptedRandom::new([0.01, 0.999]);

        assert!(resolver.resolve(Decision::Accept, &item(), &mut random).unwrap().is_match());
        assert!(!resolver.resolve(Decision::SuperLike, &item(), &mut random).unwrap().is_match());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..10 {
            let draw = a.next_unit();
            assert!((0.0..1.0).contains(&draw));
            assert_eq!(draw, b.next_unit());
        }
        let draw = ThreadRandom.next_unit();
        assert!((0.0..1.0).contains(&draw));
    }

    #[test]
    fn test_drained_script_returns_zero() {
        let mut random = ScriptedRandom::default();
        random.push(0.75);
        assert_eq!(random.next_unit(), 0.75);
        assert_eq!(random.next_unit(), 0.0);
    }
}
