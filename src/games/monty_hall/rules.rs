//! Host rules: which door opens, and where a switch lands.

use super::dealer::Dealer;
use super::types::Door;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the host breaks the tie when the player's first pick hides the prize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum RevealPolicy {
    /// Always open the lower-numbered goat door.
    #[display("lowest door")]
    LowestDoor,
    /// Open either goat door with equal probability.
    #[default]
    #[display("uniform")]
    Uniform,
}

/// Chooses the door the host opens after the player picks `choice`.
#[instrument(skip(dealer))]
pub fn reveal_door<D: Dealer>(prize: Door, choice: Door, policy: RevealPolicy, dealer: &mut D) -> Door {
    match Door::remaining(prize, choice) {
        Some(forced) => forced,
        None => {
            let candidates = choice.others();
            let revealed = match policy {
                RevealPolicy::LowestDoor => candidates[0],
                RevealPolicy::Uniform => dealer.pick_reveal(candidates),
            };
            debug!(%revealed, ?policy, "Tie broken between two goat doors");
            revealed
        }
    }
}

/// The door a switch moves to: the one neither picked nor opened.
pub fn switch_target(choice: Door, revealed: Door) -> Option<Door> {
    Door::remaining(choice, revealed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::monty_hall::{RandomDealer, ScriptedDealer};
    use strum::IntoEnumIterator;

    #[test]
    fn test_reveal_never_opens_prize_or_choice() {
        let mut dealer = RandomDealer::seeded(3);
        for policy in [RevealPolicy::LowestDoor, RevealPolicy::Uniform] {
            for prize in Door::iter() {
                for choice in Door::iter() {
                    for _ in 0..10 {
                        let revealed = reveal_door(prize, choice, policy, &mut dealer);
                        assert_ne!(revealed, prize);
                        assert_ne!(revealed, choice);
                    }
                }
            }
        }
    }

    #[test]
    fn test_forced_reveal_when_pick_misses() {
        let mut dealer = ScriptedDealer::always(Door::Two);
        let revealed = reveal_door(Door::Two, Door::One, RevealPolicy::Uniform, &mut dealer);
        assert_eq!(revealed, Door::Three);
    }

    #[test]
    fn test_lowest_door_policy_ignores_dealer() {
        let mut dealer = RandomDealer::seeded(11);
        for _ in 0..20 {
            let revealed = reveal_door(Door::Two, Door::Two, RevealPolicy::LowestDoor, &mut dealer);
            assert_eq!(revealed, Door::One);
        }
    }

    #[test]
    fn test_uniform_policy_opens_both_goats_over_time() {
        let mut dealer = RandomDealer::seeded(5);
        let mut seen_one = false;
        let mut seen_three = false;
        for _ in 0..100 {
            match reveal_door(Door::Two, Door::Two, RevealPolicy::Uniform, &mut dealer) {
                Door::One => seen_one = true,
                Door::Three => seen_three = true,
                Door::Two => panic!("Host opened the prize door"),
            }
        }
        assert!(seen_one && seen_three);
    }

    #[test]
    fn test_switch_target() {
        assert_eq!(switch_target(Door::One, Door::Three), Some(Door::Two));
        assert_eq!(switch_target(Door::One, Door::One), None);
    }

    #[test]
    fn test_policy_toml_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: RevealPolicy,
        }
        let parsed: Wrapper = toml::from_str("policy = \"lowest_door\"").expect("parse");
        assert_eq!(parsed.policy, RevealPolicy::LowestDoor);
        assert_eq!(RevealPolicy::default(), RevealPolicy::Uniform);
    }
}
