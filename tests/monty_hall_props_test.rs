//! Property tests for the Monty Hall engine.
//!
//! Arbitrary intent sequences are driven through seeded engines; every
//! step must preserve the engine invariants whether it succeeds or not.

use proptest::prelude::*;
use strictly_monty::{Action, Door, GameEngine, Phase, RandomDealer, RevealPolicy};

fn door_strategy() -> impl Strategy<Value = Door> {
    prop_oneof![Just(Door::One), Just(Door::Two), Just(Door::Three)]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => door_strategy().prop_map(Action::SelectDoor),
        2 => Just(Action::Stay),
        2 => Just(Action::Switch),
        1 => Just(Action::ResetRound),
    ]
}

fn policy_strategy() -> impl Strategy<Value = RevealPolicy> {
    prop_oneof![Just(RevealPolicy::LowestDoor), Just(RevealPolicy::Uniform)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the reveal is never the pick or the prize, and is a valid door.
    #[test]
    fn prop_reveal_excludes_choice_and_prize(
        seed in any::<u64>(),
        door in door_strategy(),
        policy in policy_strategy(),
    ) {
        let mut engine = GameEngine::new(RandomDealer::seeded(seed), policy);
        let revealed = engine.select_door(door).unwrap();

        let record = engine.stay().unwrap();
        let prize = *record.prize();
        prop_assert_ne!(revealed, door);
        prop_assert_ne!(revealed, prize);
    }

    /// Property: stay keeps the pick; switch moves to the unique third door.
    #[test]
    fn prop_decisions_move_choice_correctly(
        seed in any::<u64>(),
        door in door_strategy(),
        switch in any::<bool>(),
    ) {
        let mut engine = GameEngine::seeded(seed);
        let revealed = engine.select_door(door).unwrap();

        let record = if switch {
            engine.switch_choice().unwrap()
        } else {
            engine.stay().unwrap()
        };

        if switch {
            prop_assert_eq!(Some(*record.final_choice()), Door::remaining(door, revealed));
            prop_assert_ne!(*record.final_choice(), door);
        } else {
            prop_assert_eq!(*record.final_choice(), door);
        }
        prop_assert_eq!(*record.won(), record.final_choice() == record.prize());
    }

    /// Property: any action sequence keeps the statistics consistent, never
    /// leaks the prize early, and changes nothing when an action is rejected.
    #[test]
    fn prop_action_sequences_preserve_invariants(
        seed in any::<u64>(),
        policy in policy_strategy(),
        actions in prop::collection::vec(action_strategy(), 1..60),
    ) {
        let mut engine = GameEngine::new(RandomDealer::seeded(seed), policy);

        for action in actions {
            let view_before = engine.current_view();
            let stats_before = engine.stats_snapshot();
            match engine.apply(action) {
                Ok(view) => {
                    prop_assert_eq!(view.prize.is_some(), view.phase == Phase::Resolved);
                    let stats = *engine.stats_snapshot().stats();
                    prop_assert!(stats.dominates(stats_before.stats()));
                    prop_assert!(stats.total_attempts() <= stats_before.stats().total_attempts() + 1);
                }
                Err(_) => {
                    prop_assert_eq!(engine.current_view(), view_before);
                    prop_assert_eq!(engine.stats_snapshot(), stats_before);
                }
            }

            let stats = *engine.stats_snapshot().stats();
            prop_assert!(stats.keep_wins() <= stats.keep_attempts());
            prop_assert!(stats.switch_wins() <= stats.switch_attempts());

            let view = engine.current_view();
            if view.phase != Phase::Resolved {
                prop_assert!(view.prize.is_none());
                prop_assert!(view.outcome.is_none());
            }
            if let (Some(choice), Some(revealed)) = (view.player_choice, view.revealed_door) {
                prop_assert_ne!(choice, revealed);
            }
        }
    }
}
