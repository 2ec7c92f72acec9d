//! Phase-shaped round state.
//!
//! Each variant carries exactly the fields that exist in that phase, so a
//! revealed or resolved round ALWAYS has a revealed door, not `Option<Door>`.

use super::types::{Decision, Door, Phase};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum Round {
    /// Prize placed, no pick yet.
    Choosing {
        /// Door hiding the prize.
        prize: Door,
    },
    /// Player picked, host opened a goat door.
    Revealed {
        /// Door hiding the prize.
        prize: Door,
        /// Player's pick.
        choice: Door,
        /// Door the host opened.
        revealed: Door,
    },
    /// Player decided; the round is over.
    Resolved(RoundRecord),
}

impl Round {
    /// Fresh round with the prize behind `prize`.
    pub fn new(prize: Door) -> Self {
        Round::Choosing { prize }
    }

    /// Lifecycle phase of this round.
    pub fn phase(&self) -> Phase {
        match self {
            Round::Choosing { .. } => Phase::Choosing,
            Round::Revealed { .. } => Phase::Revealed,
            Round::Resolved(_) => Phase::Resolved,
        }
    }

    /// Door hiding the prize.
    pub fn prize(&self) -> Door {
        match self {
            Round::Choosing { prize } | Round::Revealed { prize, .. } => *prize,
            Round::Resolved(record) => record.prize,
        }
    }

    /// Player's current pick, if any.
    pub fn player_choice(&self) -> Option<Door> {
        match self {
            Round::Choosing { .. } => None,
            Round::Revealed { choice, .. } => Some(*choice),
            Round::Resolved(record) => Some(record.final_choice),
        }
    }

    /// Door the host opened, if any.
    pub fn revealed_door(&self) -> Option<Door> {
        match self {
            Round::Choosing { .. } => None,
            Round::Revealed { revealed, .. } => Some(*revealed),
            Round::Resolved(record) => Some(record.revealed),
        }
    }

    /// Summary of the finished round.
    pub fn record(&self) -> Option<&RoundRecord> {
        match self {
            Round::Resolved(record) => Some(record),
            _ => None,
        }
    }
}

/// Summary of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Door hiding the prize.
    prize: Door,
    /// Player's first pick.
    first_choice: Door,
    /// Door the host opened.
    revealed: Door,
    /// Keep or switch.
    decision: Decision,
    /// Player's pick after the decision.
    final_choice: Door,
    /// Whether the final pick hides the prize.
    won: bool,
}

impl RoundRecord {
    /// Builds the record of a round resolved with `decision`.
    ///
    /// `won` is derived from the final pick.
    pub fn new(prize: Door, first_choice: Door, revealed: Door, decision: Decision, final_choice: Door) -> Self {
        Self {
            prize,
            first_choice,
            revealed,
            decision,
            final_choice,
            won: final_choice == prize,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_won(&mut self, won: bool) {
        self.won = won;
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "picked {}, host opened {}, {} -> {}: {}",
            self.first_choice,
            self.revealed,
            self.decision,
            self.final_choice,
            if self.won { "won" } else { "lost" }
        )
    }
}
