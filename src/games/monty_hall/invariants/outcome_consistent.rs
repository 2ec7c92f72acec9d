//! Outcome invariant: a resolved round's record agrees with the rules.

use super::super::{Decision, Door, EngineState};
use super::Invariant;

/// Invariant: in a resolved round, the final pick follows from the decision
/// and `won` is true exactly when the final pick hides the prize.
pub struct OutcomeConsistentInvariant;

impl Invariant<EngineState> for OutcomeConsistentInvariant {
    fn holds(state: &EngineState) -> bool {
        let Some(record) = state.round().record() else {
            return true;
        };

        let expected_final = match record.decision() {
            Decision::Keep => Some(*record.first_choice()),
            Decision::Switch => Door::remaining(*record.first_choice(), *record.revealed()),
        };

        expected_final == Some(*record.final_choice())
            && *record.won() == (record.final_choice() == record.prize())
    }

    fn description() -> &'static str {
        "Resolved round follows from the decision and reports the right result"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::monty_hall::{GameEngine, RevealPolicy, Round, RoundRecord, ScriptedDealer};

    #[test]
    fn test_keep_and_switch_hold() {
        for decision in [Decision::Keep, Decision::Switch] {
            let mut engine = GameEngine::new(ScriptedDealer::always(Door::Three), RevealPolicy::LowestDoor);
            engine.select_door(Door::One).expect("select");
            engine.decide(decision).expect("decide");
            assert!(OutcomeConsistentInvariant::holds(engine.state()));
        }
    }

    #[test]
    fn test_wrong_result_violates() {
        let mut engine = GameEngine::seeded(6);
        let mut record = RoundRecord::new(Door::One, Door::One, Door::Two, Decision::Keep, Door::One);
        record.set_won(false);
        engine.state.round = Round::Resolved(record);
        assert!(!OutcomeConsistentInvariant::holds(engine.state()));
    }

    #[test]
    fn test_keep_that_moved_violates() {
        let mut engine = GameEngine::seeded(6);
        let record = RoundRecord::new(Door::One, Door::Two, Door::Three, Decision::Keep, Door::One);
        engine.state.round = Round::Resolved(record);
        assert!(!OutcomeConsistentInvariant::holds(engine.state()));
    }
}
