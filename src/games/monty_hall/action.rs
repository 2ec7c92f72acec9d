//! First-class action types for the Monty Hall game.
//!
//! Actions are the player's intents as the presentation layer forwards them.
//! They can be validated against the current phase before anything mutates.

use super::types::{Decision, Door, Phase};
use serde::{Deserialize, Serialize};

/// A player intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "door", rename_all = "snake_case")]
pub enum Action {
    /// Pick a door during [`Phase::Choosing`].
    SelectDoor(Door),
    /// Keep the current pick after the reveal.
    Stay,
    /// Switch to the remaining closed door after the reveal.
    Switch,
    /// Abandon the current round and start a fresh one.
    ResetRound,
}

impl Action {
    /// Phase in which this action is legal, or `None` if legal in any phase.
    pub fn required_phase(&self) -> Option<Phase> {
        match self {
            Action::SelectDoor(_) => Some(Phase::Choosing),
            Action::Stay | Action::Switch => Some(Phase::Revealed),
            Action::ResetRound => None,
        }
    }

    /// The final decision this action represents, if any.
    pub fn decision(&self) -> Option<Decision> {
        match self {
            Action::Stay => Some(Decision::Keep),
            Action::Switch => Some(Decision::Switch),
            Action::SelectDoor(_) | Action::ResetRound => None,
        }
    }
}

impl From<Decision> for Action {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Keep => Action::Stay,
            Decision::Switch => Action::Switch,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SelectDoor(door) => write!(f, "select door {}", door),
            Action::Stay => write!(f, "stay"),
            Action::Switch => write!(f, "switch"),
            Action::ResetRound => write!(f, "reset round"),
        }
    }
}

/// Contract violations raised by the engine.
///
/// These indicate a presentation-layer bug, not a game outcome.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The action is not legal in the current phase.
    #[display("Cannot {} while the round is {}", action, phase)]
    InvalidState {
        /// The rejected action.
        action: Action,
        /// Phase the round was in.
        phase: Phase,
    },

    /// The door identifier is not one of 1, 2 or 3.
    #[display("Invalid door identifier: {:?}", _0)]
    InvalidDoor(String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
