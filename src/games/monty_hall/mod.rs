//! Monty Hall: three doors, one prize, keep or switch.

mod action;
mod contracts;
mod dealer;
mod engine;
pub mod invariants;
mod round;
mod rules;
mod simulation;
mod stats;
mod types;
mod view;

pub use action::{Action, GameError};
pub use dealer::{Dealer, RandomDealer, ScriptedDealer};
pub use engine::{EngineState, GameEngine};
pub use round::{Round, RoundRecord};
pub use rules::RevealPolicy;
pub use simulation::{Strategy, simulate};
pub use stats::{SessionStats, StatsSnapshot, WinRate};
pub use types::{Decision, Door, Phase};
pub use view::{DoorContents, DoorView, RoundView};
