//! Gesture interpretation: turns a released drag into a deck decision.
//!
//! ## Rules
//! 1. Non-finite offsets or velocity cancel the gesture
//! 2. `|x| > horizontal_threshold` accepts (right) or rejects (left)
//! 3. otherwise `y < -vertical_threshold` (an upward flick) super-likes
//! 4. anything else snaps the card back
//!
//! Horizontal displacement is checked first, so a long diagonal drag is
//! always an accept or reject. The action buttons bypass the thresholds.

use serde::{Deserialize, Serialize};

/// Drag displacement of the top card at release, in px-equivalent units.
/// Positive `x` is right, positive `y` is down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragOffset {
    pub x: f32,
    pub y: f32,
}

impl DragOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// What the user decided about the top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Decision {
    Reject,
    Accept,
    SuperLike,
    /// Snap back to the origin; nothing changes
    Cancel,
}

impl Decision {
    /// True for every decision that removes the card from the deck
    pub fn is_commit(self) -> bool {
        !matches!(self, Decision::Cancel)
    }

    /// True for decisions that may produce a match
    pub fn seeks_match(self) -> bool {
        matches!(self, Decision::Accept | Decision::SuperLike)
    }

    /// Where the card flies when this decision commits.
    ///
    /// `None` for `Cancel`, which animates back to the origin instead.
    pub fn exit_motion(self, config: &GestureConfig) -> Option<ExitMotion> {
        let (x, y) = match self {
            Decision::Reject => (-config.exit_distance, 0.0),
            Decision::Accept => (config.exit_distance, 0.0),
            Decision::SuperLike => (0.0, -config.exit_distance),
            Decision::Cancel => return None,
        };
        Some(ExitMotion {
            x,
            y,
            opacity: 0.0,
            duration_ms: config.exit_duration_ms,
        })
    }
}

/// The three action buttons under the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonAction {
    Reject,
    Accept,
    SuperLike,
}

impl From<ButtonAction> for Decision {
    fn from(action: ButtonAction) -> Self {
        match action {
            ButtonAction::Reject => Decision::Reject,
            ButtonAction::Accept => Decision::Accept,
            ButtonAction::SuperLike => Decision::SuperLike,
        }
    }
}

/// Target of the off-stage exit animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitMotion {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub duration_ms: u64,
}

/// Thresholds and exit animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    pub horizontal_threshold: f32,
    pub vertical_threshold: f32,
    pub exit_distance: f32,
    pub exit_duration_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            horizontal_threshold: 100.0,
            vertical_threshold: 100.0,
            exit_distance: 1000.0,
            exit_duration_ms: 300,
        }
    }
}

/// Stateless translator from raw input to decisions.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Interpret a drag release.
    ///
    /// The release velocity is optional and only validated: a non-finite
    /// velocity cancels, a finite one does not change the outcome.
    pub fn interpret(&self, offset: DragOffset, release_velocity: Option<f32>) -> Decision {
        if !offset.is_finite() || release_velocity.is_some_and(|v| !v.is_finite()) {
            tracing::debug!(
                "Invalid gesture input {:?} (velocity {:?}), cancelling",
                offset,
                release_velocity
            );
            return Decision::Cancel;
        }

        if offset.x.abs() > self.config.horizontal_threshold {
            if offset.x > 0.0 {
                Decision::Accept
            } else {
                Decision::Reject
            }
        } else if offset.y < -self.config.vertical_threshold {
            Decision::SuperLike
        } else {
            Decision::Cancel
        }
    }

    /// Interpret an action button tap
    pub fn press(&self, action: ButtonAction) -> Decision {
        action.into()
    }
}
