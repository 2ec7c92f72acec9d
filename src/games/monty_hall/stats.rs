//! Per-strategy session statistics.

use super::types::Decision;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cumulative attempt/win counters for the session.
///
/// Counters only ever grow; a round reset never touches them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds resolved by keeping.
    keep_attempts: u64,
    /// Kept rounds that won.
    keep_wins: u64,
    /// Rounds resolved by switching.
    switch_attempts: u64,
    /// Switched rounds that won.
    switch_wins: u64,
}

impl SessionStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one resolved round.
    #[instrument(skip(self))]
    pub fn record(&mut self, decision: Decision, won: bool) {
        let (attempts, wins) = match decision {
            Decision::Keep => (&mut self.keep_attempts, &mut self.keep_wins),
            Decision::Switch => (&mut self.switch_attempts, &mut self.switch_wins),
        };
        *attempts += 1;
        if won {
            *wins += 1;
        }
    }

    /// Attempts recorded for `decision`.
    pub fn attempts(&self, decision: Decision) -> u64 {
        match decision {
            Decision::Keep => self.keep_attempts,
            Decision::Switch => self.switch_attempts,
        }
    }

    /// Wins recorded for `decision`.
    pub fn wins(&self, decision: Decision) -> u64 {
        match decision {
            Decision::Keep => self.keep_wins,
            Decision::Switch => self.switch_wins,
        }
    }

    /// Total resolved rounds.
    pub fn total_attempts(&self) -> u64 {
        self.keep_attempts + self.switch_attempts
    }

    /// True when every counter is at least the one in `earlier`.
    pub fn dominates(&self, earlier: &SessionStats) -> bool {
        self.keep_attempts >= earlier.keep_attempts
            && self.keep_wins >= earlier.keep_wins
            && self.switch_attempts >= earlier.switch_attempts
            && self.switch_wins >= earlier.switch_wins
    }

    #[cfg(test)]
    pub(crate) fn corrupt_keep_wins(&mut self, wins: u64) {
        self.keep_wins = wins;
    }
}

/// Win rate for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinRate {
    /// No rounds played with this strategy yet.
    NoData,
    /// Fraction of rounds won, in `[0, 1]`.
    Rate(f64),
}

impl WinRate {
    /// Computes `wins / attempts`, or [`WinRate::NoData`] for zero attempts.
    pub fn from_counts(wins: u64, attempts: u64) -> Self {
        if attempts == 0 {
            WinRate::NoData
        } else {
            WinRate::Rate(wins as f64 / attempts as f64)
        }
    }

    /// Returns the fraction, if any rounds were played.
    pub fn value(&self) -> Option<f64> {
        match self {
            WinRate::NoData => None,
            WinRate::Rate(rate) => Some(*rate),
        }
    }
}

impl std::fmt::Display for WinRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinRate::NoData => write!(f, "no data"),
            WinRate::Rate(rate) => write!(f, "{:.1}%", rate * 100.0),
        }
    }
}

/// Read-only copy of the session statistics with derived win rates.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Raw counters.
    #[serde(flatten)]
    stats: SessionStats,
    /// `keep_wins / keep_attempts`.
    keep_rate: WinRate,
    /// `switch_wins / switch_attempts`.
    switch_rate: WinRate,
}

impl StatsSnapshot {
    /// Snapshots `stats`.
    pub fn new(stats: SessionStats) -> Self {
        Self {
            stats,
            keep_rate: WinRate::from_counts(stats.keep_wins, stats.keep_attempts),
            switch_rate: WinRate::from_counts(stats.switch_wins, stats.switch_attempts),
        }
    }

    /// Win rate for `decision`.
    pub fn rate(&self, decision: Decision) -> WinRate {
        match decision {
            Decision::Keep => self.keep_rate,
            Decision::Switch => self.switch_rate,
        }
    }

    /// `wins/attempts = rate` for one strategy.
    pub fn summary_line(&self, decision: Decision) -> String {
        format!(
            "{}/{} = {}",
            self.stats.wins(decision),
            self.stats.attempts(decision),
            self.rate(decision)
        )
    }
}

impl From<SessionStats> for StatsSnapshot {
    fn from(stats: SessionStats) -> Self {
        Self::new(stats)
    }
}
