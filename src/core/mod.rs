//! Core engine types: RNG, configuration, errors.
//!
//! These are the ambient building blocks every other module leans on.
//! Game rules live in `rules` and `state`, not here.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameOptions, DECK_SIZE, DEFAULT_INITIAL_CARDS, MIN_PLAYERS};
pub use error::{GameError, SnapshotError};
pub use rng::{GameRng, GameRngState};
