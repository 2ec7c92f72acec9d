//! Strictly Monty library - a type-safe Monty Hall game engine
//!
//! Three doors hide one prize. The player picks a door, the host opens a
//! goat door among the other two, and the player keeps or switches. The
//! engine tracks wins separately for both decisions so the long-run result
//! (switching wins about two thirds of the time) can be observed directly.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`], a state machine owned by the caller, with
//!   an injected [`Dealer`] as its only source of randomness
//! - **Contracts**: every action is checked against phase preconditions and
//!   invariant postconditions
//! - **Views**: [`RoundView`] and [`StatsSnapshot`] are pulled after each
//!   operation; the prize stays hidden until the round is resolved
//! - **Terminal**: a line-oriented front end over any reader and writer
//!
//! # Example
//!
//! ```
//! use strictly_monty::{Door, GameEngine, Phase};
//!
//! # fn example() -> Result<(), strictly_monty::GameError> {
//! let mut engine = GameEngine::seeded(42);
//! let opened = engine.select_door(Door::One)?;
//! assert_ne!(opened, Door::One);
//!
//! let record = engine.switch_choice()?;
//! assert_eq!(engine.phase(), Phase::Resolved);
//! assert_eq!(engine.current_view().prize, Some(*record.prize()));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal front end
pub use terminal::{Command, Format, TerminalSession, render_view};

// Crate-level exports - Game types (Monty Hall)
pub use games::monty_hall::{
    Action, Dealer, Decision, Door, DoorContents, DoorView, GameEngine, GameError, Phase, RandomDealer,
    RevealPolicy, RoundRecord, RoundView, ScriptedDealer, SessionStats, StatsSnapshot, Strategy, WinRate,
    simulate,
};
