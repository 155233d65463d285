//! # check-engine
//!
//! Headless rules engine for Check, a Crazy-Eights style shedding game.
//!
//! Players take turns discarding onto a shared pile. Twos and Jacks go on
//! anything, Aces skip the next player, Jacks let the player declare a new
//! suit, and Sevens and Jokers open escalating draw-penalty attack chains
//! that only other wild cards can answer. Emptying your hand takes you out
//! of the game; the last player holding cards loses.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A game owns one seeded RNG used for the deal and
//!    every reshuffle, so a seed plus the move history replays exactly.
//!
//! 2. **All-or-nothing commands**: Every precondition is checked before any
//!    mutation, so a rejected command leaves the game untouched.
//!
//! 3. **Invalid states unrepresentable**: The turn phase is one enum, not a
//!    pair of flags, and the discard pile always has a top card.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card values, the draw pile and the discard pile
//! - `player`: Players and hands
//! - `rules`: The matching rule
//! - `state`: The turn engine, moves, and snapshots
//!
//! ## Example
//!
//! ```
//! use check_engine::{GameOptions, GameState, Move};
//!
//! let mut game = GameState::new(&["alice", "bob"], GameOptions::new().with_seed(7)).unwrap();
//!
//! let current = game.current_player_id().to_string();
//! let first = game.legal_moves(&current)[0];
//! game.apply(&current, first).unwrap();
//!
//! let restored = GameState::from_json(&game.to_json().unwrap()).unwrap();
//! assert_eq!(restored.current_player_id(), game.current_player_id());
//! assert_eq!(restored.top_card(), game.top_card());
//! ```

pub mod cards;
pub mod core;
pub mod player;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::core::{GameError, GameOptions, GameRng, GameRngState, SnapshotError, DECK_SIZE};

pub use crate::cards::{Card, Color, Deck, DiscardPile, Rank, Suit};

pub use crate::player::{Hand, Player};

pub use crate::rules::{can_play, can_play_with_suit};

pub use crate::state::{Direction, GameState, Move, MoveRecord, Snapshot, TurnPhase};
