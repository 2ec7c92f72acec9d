//! Read-only snapshot of a round for rendering.
//!
//! A view never reveals where the prize is until the round is resolved.

use super::round::{Round, RoundRecord};
use super::types::{Door, Phase};
use serde::{Deserialize, Serialize};

/// What an opened door shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorContents {
    /// The prize.
    Prize,
    /// A goat.
    Goat,
}

/// Rendering state of one door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorView {
    /// Which door.
    pub door: Door,
    /// Whether the door is open.
    pub opened: bool,
    /// Whether it is the player's current pick.
    pub selected: bool,
    /// Contents, known only for open doors.
    pub contents: Option<DoorContents>,
}

/// Snapshot of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Player's current pick.
    pub player_choice: Option<Door>,
    /// Door the host opened.
    pub revealed_door: Option<Door>,
    /// Prize location, present only once resolved.
    pub prize: Option<Door>,
    /// Per-door rendering state, in identifier order.
    pub doors: [DoorView; 3],
    /// Round summary, present only once resolved.
    pub outcome: Option<RoundRecord>,
}

impl RoundView {
    /// Builds the view of `round`.
    pub fn of(round: &Round) -> Self {
        let phase = round.phase();
        let player_choice = round.player_choice();
        let revealed_door = round.revealed_door();
        let resolved = phase == Phase::Resolved;

        let doors = Door::ALL.map(|door| {
            let opened = resolved || revealed_door == Some(door);
            let contents = match (opened, resolved) {
                (false, _) => None,
                (true, true) if door == round.prize() => Some(DoorContents::Prize),
                (true, _) => Some(DoorContents::Goat),
            };
            DoorView {
                door,
                opened,
                selected: player_choice == Some(door),
                contents,
            }
        });

        Self {
            phase,
            player_choice,
            revealed_door,
            prize: resolved.then(|| round.prize()),
            doors,
            outcome: round.record().copied(),
        }
    }

    /// Whether the player won, once resolved.
    pub fn won(&self) -> Option<bool> {
        self.outcome.map(|record| *record.won())
    }

    /// View of a single door.
    pub fn door(&self, door: Door) -> &DoorView {
        &self.doors[door.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::monty_hall::Decision;

    #[test]
    fn test_choosing_view_is_all_closed() {
        let view = RoundView::of(&Round::new(Door::Three));
        assert_eq!(view.phase, Phase::Choosing);
        assert_eq!(view.prize, None);
        assert!(view.doors.iter().all(|d| !d.opened && !d.selected && d.contents.is_none()));
    }

    #[test]
    fn test_revealed_view_opens_only_goat() {
        let round = Round::Revealed {
            prize: Door::Two,
            choice: Door::One,
            revealed: Door::Three,
        };
        let view = RoundView::of(&round);
        assert_eq!(view.prize, None);
        assert_eq!(view.outcome, None);
        assert!(view.door(Door::One).selected);
        assert!(!view.door(Door::Two).opened);
        assert_eq!(view.door(Door::Two).contents, None);
        assert_eq!(view.door(Door::Three).contents, Some(DoorContents::Goat));
    }

    #[test]
    fn test_resolved_view_opens_everything() {
        let record = RoundRecord::new(Door::Two, Door::One, Door::Three, Decision::Switch, Door::Two);
        let view = RoundView::of(&Round::Resolved(record));
        assert_eq!(view.prize, Some(Door::Two));
        assert_eq!(view.won(), Some(true));
        assert!(view.doors.iter().all(|d| d.opened));
        assert_eq!(view.door(Door::Two).contents, Some(DoorContents::Prize));
        assert!(view.door(Door::Two).selected);
        assert_eq!(view.door(Door::One).contents, Some(DoorContents::Goat));
    }

    #[test]
    fn test_revealed_json_has_no_prize() {
        let round = Round::Revealed {
            prize: Door::One,
            choice: Door::One,
            revealed: Door::Two,
        };
        let value = serde_json::to_value(RoundView::of(&round)).expect("serialize");
        assert!(value["prize"].is_null());
        assert_eq!(value["phase"], "revealed");
        assert_eq!(value["revealed_door"], 2);
    }
}
