//! Reveal invariant: the host never opens the prize or the player's pick.

use super::super::{EngineState, Round};
use super::Invariant;

/// Invariant: the revealed door is neither the prize nor a door the player
/// has picked this round.
///
/// For a resolved round both the first and final pick are checked, so a
/// switch can never land on the open door.
pub struct RevealExcludesInvariant;

impl Invariant<EngineState> for RevealExcludesInvariant {
    fn holds(state: &EngineState) -> bool {
        match state.round() {
            Round::Choosing { .. } => true,
            Round::Revealed {
                prize,
                choice,
                revealed,
            } => revealed != prize && revealed != choice,
            Round::Resolved(record) => {
                let revealed = record.revealed();
                revealed != record.prize()
                    && revealed != record.first_choice()
                    && revealed != record.final_choice()
            }
        }
    }

    fn description() -> &'static str {
        "Revealed door is neither the prize nor the player's pick"
    }
}
