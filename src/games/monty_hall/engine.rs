//! The Monty Hall game engine.
//!
//! A finite state machine over [`Round`] plus session-lifetime
//! [`SessionStats`]. Every transition is gated by [`ActionContract`]:
//! preconditions always, postconditions in debug builds.

use super::action::{Action, GameError};
use super::contracts::{ActionContract, Contract};
use super::dealer::{Dealer, RandomDealer};
use super::invariants::{InvariantSet, MontyHallInvariants};
use super::round::{Round, RoundRecord};
use super::rules::{self, RevealPolicy};
use super::stats::{SessionStats, StatsSnapshot};
use super::types::{Decision, Door, Phase};
use super::view::RoundView;
use crate::config::GameConfig;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Everything the engine knows apart from its dealer.
///
/// Holds the prize location, so it never leaves the crate; callers see
/// [`RoundView`] and [`StatsSnapshot`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EngineState {
    /// Current round.
    pub(crate) round: Round,
    /// Session statistics.
    pub(crate) stats: SessionStats,
}

/// Monty Hall engine for one player session.
///
/// Owns the round and statistics exclusively; the presentation layer holds
/// one engine per session and reads [`GameEngine::current_view`] after each
/// operation. The prize location is only reachable through those views,
/// so there is no accessor for the raw state:
///
/// ```compile_fail
/// let engine = strictly_monty::GameEngine::seeded(1);
/// let _ = engine.state();
/// ```
#[derive(Debug, Clone)]
pub struct GameEngine<D = RandomDealer> {
    dealer: D,
    reveal_policy: RevealPolicy,
    pub(crate) state: EngineState,
}

impl GameEngine<RandomDealer> {
    /// Starts a reproducible session with the default reveal policy.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomDealer::seeded(seed), RevealPolicy::default())
    }

    /// Starts a session seeded from operating system entropy.
    #[instrument]
    pub fn from_os_rng() -> Self {
        Self::new(RandomDealer::from_os_rng(), RevealPolicy::default())
    }

    /// Starts a session as described by `config`.
    #[instrument(skip(config), fields(seed = ?config.seed(), policy = %config.reveal_policy()))]
    pub fn from_config(config: &GameConfig) -> Self {
        let dealer = match config.seed() {
            Some(seed) => RandomDealer::seeded(*seed),
            None => RandomDealer::from_os_rng(),
        };
        Self::new(dealer, *config.reveal_policy())
    }
}

impl<D: Dealer> GameEngine<D> {
    /// Starts a session: empty statistics and a fresh round.
    #[instrument(skip(dealer))]
    pub fn new(mut dealer: D, reveal_policy: RevealPolicy) -> Self {
        let round = Round::new(dealer.place_prize());
        info!(%reveal_policy, "Starting Monty Hall session");
        Self {
            dealer,
            reveal_policy,
            state: EngineState {
                round,
                stats: SessionStats::new(),
            },
        }
    }

    /// Abandons the current round and starts a fresh one.
    ///
    /// Legal in any phase; statistics are untouched.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn reset_round(&mut self) {
        self.state.round = Round::new(self.dealer.place_prize());
        debug!("Round reset");
        debug_assert!(MontyHallInvariants::check_all(&self.state).is_ok());
    }

    /// Records the player's first pick and opens a goat door.
    ///
    /// Returns the door the host opened.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn select_door(&mut self, door: Door) -> Result<Door, GameError> {
        let action = Action::SelectDoor(door);
        self.guarded(action, |engine| {
            let Round::Choosing { prize } = engine.state.round else {
                return Err(engine.invalid(action));
            };
            let revealed = rules::reveal_door(prize, door, engine.reveal_policy, &mut engine.dealer);
            engine.state.round = Round::Revealed {
                prize,
                choice: door,
                revealed,
            };
            debug!(choice = %door, %revealed, "Host opened a goat door");
            Ok(revealed)
        })
    }

    /// Like [`GameEngine::select_door`], taking the raw identifier (1-3).
    #[instrument(skip(self))]
    pub fn select_door_number(&mut self, number: u8) -> Result<Door, GameError> {
        let door = Door::try_from(number)?;
        self.select_door(door)
    }

    /// Keeps the current pick and resolves the round.
    pub fn stay(&mut self) -> Result<RoundRecord, GameError> {
        self.decide(Decision::Keep)
    }

    /// Switches to the remaining closed door and resolves the round.
    pub fn switch_choice(&mut self) -> Result<RoundRecord, GameError> {
        self.decide(Decision::Switch)
    }

    /// Resolves the round with `decision`, updating the statistics.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn decide(&mut self, decision: Decision) -> Result<RoundRecord, GameError> {
        let action = Action::from(decision);
        self.guarded(action, |engine| {
            let Round::Revealed {
                prize,
                choice,
                revealed,
            } = engine.state.round
            else {
                return Err(engine.invalid(action));
            };

            let final_choice = match decision {
                Decision::Keep => choice,
                Decision::Switch => rules::switch_target(choice, revealed).ok_or_else(|| {
                    GameError::InvariantViolation(format!("No door left to switch to from {}", choice))
                })?,
            };

            let record = RoundRecord::new(prize, choice, revealed, decision, final_choice);
            engine.state.stats.record(decision, *record.won());
            engine.state.round = Round::Resolved(record);
            info!(%record, "Round resolved");
            Ok(record)
        })
    }

    /// Applies a first-class action and returns the resulting view.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Result<RoundView, GameError> {
        match action {
            Action::SelectDoor(door) => {
                self.select_door(door)?;
            }
            Action::Stay => {
                self.stay()?;
            }
            Action::Switch => {
                self.switch_choice()?;
            }
            Action::ResetRound => self.reset_round(),
        }
        Ok(self.current_view())
    }

    /// Snapshot of the round; hides the prize until resolved.
    pub fn current_view(&self) -> RoundView {
        RoundView::of(&self.state.round)
    }

    /// Snapshot of the session statistics with derived win rates.
    pub fn stats_snapshot(&self) -> StatsSnapshot {
        StatsSnapshot::new(self.state.stats)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.round.phase()
    }

    /// Tie-break rule the host uses.
    pub fn reveal_policy(&self) -> RevealPolicy {
        self.reveal_policy
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &EngineState {
        &self.state
    }

    fn invalid(&self, action: Action) -> GameError {
        GameError::InvalidState {
            action,
            phase: self.phase(),
        }
    }

    /// Runs `apply` between the action's pre- and postconditions.
    ///
    /// A failed precondition or postcondition leaves the state as it was.
    fn guarded<T>(
        &mut self,
        action: Action,
        apply: impl FnOnce(&mut Self) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        ActionContract::pre(&self.state, &action)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let output = apply(self)?;

        #[cfg(debug_assertions)]
        if let Err(err) = ActionContract::post(&before, &self.state) {
            self.state = before;
            return Err(err);
        }

        Ok(output)
    }
}
