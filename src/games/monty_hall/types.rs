//! Core domain types for the Monty Hall game.

use super::action::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the three doors on stage.
///
/// Doors are an opaque, closed set. The only ordering they carry is the
/// identifier order used by [`RevealPolicy::LowestDoor`](super::RevealPolicy),
/// never arithmetic.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Door {
    /// Door 1.
    One,
    /// Door 2.
    Two,
    /// Door 3.
    Three,
}

impl Door {
    /// All three doors, in identifier order.
    pub const ALL: [Door; 3] = [Door::One, Door::Two, Door::Three];

    /// Returns the external identifier (1-3).
    pub fn number(self) -> u8 {
        match self {
            Door::One => 1,
            Door::Two => 2,
            Door::Three => 3,
        }
    }

    /// Creates a door from its external identifier.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Door::One),
            2 => Some(Door::Two),
            3 => Some(Door::Three),
            _ => None,
        }
    }

    /// Position of this door in [`Door::ALL`].
    pub fn index(self) -> usize {
        match self {
            Door::One => 0,
            Door::Two => 1,
            Door::Three => 2,
        }
    }

    /// The two other doors, in identifier order.
    pub fn others(self) -> [Door; 2] {
        match self {
            Door::One => [Door::Two, Door::Three],
            Door::Two => [Door::One, Door::Three],
            Door::Three => [Door::One, Door::Two],
        }
    }

    /// The unique door that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since two doors then remain.
    #[instrument]
    pub fn remaining(a: Door, b: Door) -> Option<Door> {
        if a == b {
            return None;
        }
        Self::ALL.into_iter().find(|door| *door != a && *door != b)
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> Self {
        door.number()
    }
}

impl TryFrom<u8> for Door {
    type Error = GameError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Door::from_number(number).ok_or_else(|| GameError::InvalidDoor(number.to_string()))
    }
}

impl FromStr for Door {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Door::from_number)
            .ok_or_else(|| GameError::InvalidDoor(trimmed.to_string()))
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Position of a round in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the player's first pick.
    #[display("choosing")]
    Choosing,
    /// The host has opened a goat door; waiting for keep or switch.
    #[display("revealed")]
    Revealed,
    /// The player decided; the round is over until reset.
    #[display("resolved")]
    Resolved,
}

/// The player's final decision in a round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Keep the original pick.
    #[display("keep")]
    Keep,
    /// Switch to the remaining closed door.
    #[display("switch")]
    Switch,
}
