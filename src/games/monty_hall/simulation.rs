//! Batch play for observing the long-run win rates.

use super::action::GameError;
use super::dealer::Dealer;
use super::engine::GameEngine;
use super::stats::StatsSnapshot;
use super::types::{Decision, Door};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A player's decision pattern across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Never switch.
    #[display("always keep")]
    AlwaysKeep,
    /// Always switch.
    #[display("always switch")]
    AlwaysSwitch,
    /// Keep or switch with equal probability.
    #[display("random")]
    Random,
}

impl Strategy {
    /// Decision for the next round.
    pub fn decide<R: Rng>(&self, rng: &mut R) -> Decision {
        match self {
            Strategy::AlwaysKeep => Decision::Keep,
            Strategy::AlwaysSwitch => Decision::Switch,
            Strategy::Random => {
                if rng.random_bool(0.5) {
                    Decision::Switch
                } else {
                    Decision::Keep
                }
            }
        }
    }
}

/// Plays `rounds` complete rounds on `engine`.
///
/// The first pick is uniform over the doors; the decision follows
/// `strategy`. Every round goes through the public operations, so the
/// engine's contracts apply exactly as in interactive play. Returns the
/// engine's statistics afterwards, which include any earlier rounds.
#[instrument(skip(engine, player_rng))]
pub fn simulate<D: Dealer, R: Rng>(
    engine: &mut GameEngine<D>,
    player_rng: &mut R,
    strategy: Strategy,
    rounds: u64,
) -> Result<StatsSnapshot, GameError> {
    info!("Starting simulation");
    engine.reset_round();

    for round in 0..rounds {
        let pick = Door::ALL[player_rng.random_range(0..Door::ALL.len())];
        engine.select_door(pick)?;
        let record = engine.decide(strategy.decide(player_rng))?;
        debug!(round, %record, "Simulated round");
        engine.reset_round();
    }

    let snapshot = engine.stats_snapshot();
    info!(
        keep = %snapshot.keep_rate(),
        switch = %snapshot.switch_rate(),
        "Simulation finished"
    );
    Ok(snapshot)
}
