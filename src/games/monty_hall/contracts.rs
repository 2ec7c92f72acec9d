//! Contract-based validation for engine actions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions gate every action before any state changes;
//! postconditions verify the transition afterwards.

use super::action::{Action, GameError};
use super::engine::EngineState;
use super::invariants::{InvariantSet, MontyHallInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round is in the phase the action requires.
pub struct PhaseAllows;

impl PhaseAllows {
    /// Rejects `action` with [`GameError::InvalidState`] outside its phase.
    #[instrument(skip(state))]
    pub fn check(action: &Action, state: &EngineState) -> Result<(), GameError> {
        let phase = state.round().phase();
        match action.required_phase() {
            Some(required) if required != phase => {
                warn!(%action, %phase, "Action rejected in current phase");
                Err(GameError::InvalidState {
                    action: *action,
                    phase,
                })
            }
            _ => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: statistics never shrink and grow by at most one round.
pub struct StatsAdvanceByAtMostOne;

impl StatsAdvanceByAtMostOne {
    /// True when `after` extends `before` by zero or one resolved round.
    #[instrument(skip_all)]
    pub fn holds(before: &EngineState, after: &EngineState) -> bool {
        let valid = after.stats().dominates(before.stats())
            && after.stats().total_attempts() <= before.stats().total_attempts() + 1;
        if !valid {
            warn!(before = ?before.stats(), after = ?after.stats(), "Statistics advanced illegally");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Action Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for every engine action.
///
/// Preconditions:
/// - Action is legal in the current phase
///
/// Postconditions:
/// - All engine invariants hold
/// - Statistics are monotonic and advance by at most one round
pub struct ActionContract;

impl Contract<EngineState, Action> for ActionContract {
    fn pre(state: &EngineState, action: &Action) -> Result<(), GameError> {
        PhaseAllows::check(action, state)
    }

    fn post(before: &EngineState, after: &EngineState) -> Result<(), GameError> {
        let mut descriptions = match MontyHallInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };
        if !StatsAdvanceByAtMostOne::holds(before, after) {
            descriptions.push("Statistics advance by at most one round".to_string());
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(GameError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::monty_hall::{Decision, Door, GameEngine, Phase, RevealPolicy, ScriptedDealer};

    #[test]
    fn test_select_allowed_while_choosing() {
        let engine = GameEngine::seeded(1);
        assert!(ActionContract::pre(engine.state(), &Action::SelectDoor(Door::One)).is_ok());
        assert!(ActionContract::pre(engine.state(), &Action::ResetRound).is_ok());
    }

    #[test]
    fn test_decisions_rejected_while_choosing() {
        let engine = GameEngine::seeded(1);
        for action in [Action::Stay, Action::Switch] {
            assert_eq!(
                ActionContract::pre(engine.state(), &action),
                Err(GameError::InvalidState {
                    action,
                    phase: Phase::Choosing
                })
            );
        }
    }

    #[test]
    fn test_select_rejected_after_reveal() {
        let mut engine = GameEngine::new(ScriptedDealer::always(Door::One), RevealPolicy::LowestDoor);
        engine.select_door(Door::Two).expect("select");
        assert!(matches!(
            ActionContract::pre(engine.state(), &Action::SelectDoor(Door::Three)),
            Err(GameError::InvalidState {
                phase: Phase::Revealed,
                ..
            })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_round() {
        let mut engine = GameEngine::new(ScriptedDealer::always(Door::One), RevealPolicy::LowestDoor);
        engine.select_door(Door::Two).expect("select");
        let before = engine.state().clone();
        engine.decide(Decision::Switch).expect("switch");
        assert!(ActionContract::post(&before, engine.state()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_shrinking_stats() {
        let mut engine = GameEngine::new(ScriptedDealer::always(Door::One), RevealPolicy::LowestDoor);
        engine.select_door(Door::One).expect("select");
        engine.stay().expect("stay");
        let before = engine.state().clone();

        let fresh = GameEngine::new(ScriptedDealer::always(Door::One), RevealPolicy::LowestDoor);
        assert!(matches!(
            ActionContract::post(&before, fresh.state()),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut engine = GameEngine::seeded(3);
        let before = engine.state().clone();
        engine.state.stats.corrupt_keep_wins(2);
        assert!(ActionContract::post(&before, engine.state()).is_err());
    }
}
