//! Randomness seam for the engine.
//!
//! The engine never touches global randomness. Whatever places the prize
//! and breaks reveal ties is injected as a [`Dealer`].

use super::types::Door;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Source of the two random choices the host makes.
pub trait Dealer {
    /// Places the prize behind a door at round start.
    fn place_prize(&mut self) -> Door;

    /// Picks which of two goat doors to open.
    fn pick_reveal(&mut self, candidates: [Door; 2]) -> Door;
}

/// Uniform dealer backed by an injected RNG.
#[derive(Debug, Clone)]
pub struct RandomDealer<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomDealer<R> {
    /// Wraps an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDealer<ChaCha8Rng> {
    /// Creates a reproducible dealer.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a dealer seeded from operating system entropy.
    #[instrument]
    pub fn from_os_rng() -> Self {
        Self::new(ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> Dealer for RandomDealer<R> {
    fn place_prize(&mut self) -> Door {
        Door::ALL[self.rng.random_range(0..Door::ALL.len())]
    }

    fn pick_reveal(&mut self, candidates: [Door; 2]) -> Door {
        candidates[self.rng.random_range(0..candidates.len())]
    }
}

/// Deterministic dealer that cycles through a fixed list of prize doors.
///
/// Reveal ties always go to the first candidate.
#[derive(Debug, Clone)]
pub struct ScriptedDealer {
    prizes: Vec<Door>,
    cursor: usize,
}

impl ScriptedDealer {
    /// Creates a dealer that places prizes in the given order, repeating.
    ///
    /// An empty script places every prize behind door 1.
    #[instrument]
    pub fn new(prizes: Vec<Door>) -> Self {
        Self { prizes, cursor: 0 }
    }

    /// Creates a dealer that always hides the prize behind `door`.
    pub fn always(door: Door) -> Self {
        Self::new(vec![door])
    }
}

impl Dealer for ScriptedDealer {
    fn place_prize(&mut self) -> Door {
        let Some(door) = self.prizes.get(self.cursor % self.prizes.len().max(1)).copied() else {
            debug!("Empty prize script, defaulting to door 1");
            return Door::One;
        };
        self.cursor += 1;
        door
    }

    fn pick_reveal(&mut self, candidates: [Door; 2]) -> Door {
        candidates[0]
    }
}
