//! Statistics invariant: no strategy wins more rounds than it played.

use super::super::EngineState;
use super::Invariant;

/// Invariant: `keep_wins <= keep_attempts` and `switch_wins <= switch_attempts`.
pub struct WinsWithinAttemptsInvariant;

impl Invariant<EngineState> for WinsWithinAttemptsInvariant {
    fn holds(state: &EngineState) -> bool {
        let stats = state.stats();
        stats.keep_wins() <= stats.keep_attempts() && stats.switch_wins() <= stats.switch_attempts()
    }

    fn description() -> &'static str {
        "Wins never exceed attempts for either strategy"
    }
}
