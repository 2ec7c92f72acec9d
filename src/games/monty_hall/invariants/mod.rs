//! First-class invariants for the Monty Hall engine.
//!
//! Invariants are logical properties of [`EngineState`](super::EngineState)
//! that hold after every operation. They are checked as postconditions in
//! debug builds and can be tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        tracing::warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod outcome_consistent;
pub mod reveal_excludes;
pub mod wins_within_attempts;

pub use outcome_consistent::OutcomeConsistentInvariant;
pub use reveal_excludes::RevealExcludesInvariant;
pub use wins_within_attempts::WinsWithinAttemptsInvariant;

/// All engine invariants as a composable set.
pub type MontyHallInvariants = (
    RevealExcludesInvariant,
    WinsWithinAttemptsInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::monty_hall::{Door, GameEngine, RevealPolicy, ScriptedDealer};

    #[test]
    fn test_invariant_set_holds_for_fresh_engine() {
        let engine = GameEngine::seeded(1);
        assert!(MontyHallInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_round() {
        let mut engine = GameEngine::new(ScriptedDealer::always(Door::Two), RevealPolicy::LowestDoor);
        engine.select_door(Door::One).expect("select");
        assert!(MontyHallInvariants::check_all(engine.state()).is_ok());
        engine.switch_choice().expect("switch");
        assert!(MontyHallInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::seeded(9);
        engine.state.stats.corrupt_keep_wins(5);
        engine.state.round = crate::games::monty_hall::Round::Revealed {
            prize: Door::One,
            choice: Door::Two,
            revealed: Door::One,
        };

        let violations = MontyHallInvariants::check_all(engine.state()).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::seeded(2);
        type TwoInvariants = (RevealExcludesInvariant, WinsWithinAttemptsInvariant);
        assert!(TwoInvariants::check_all(engine.state()).is_ok());
    }
}
