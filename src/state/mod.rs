//! The turn engine and its persisted form.
//!
//! ## Key Types
//!
//! - `GameState`: one game's complete state and its three commands
//! - `TurnPhase`: idle, attack chain, or waiting for a suit declaration
//! - `Direction`: rotation over the active players
//! - `Move` / `MoveRecord`: commands as data, and the history they leave
//! - `Snapshot`: flat serializable mirror of a `GameState`

pub mod game;
pub mod moves;
pub mod snapshot;
pub mod turn;

pub use game::GameState;
pub use moves::{Move, MoveRecord};
pub use snapshot::Snapshot;
pub use turn::{Direction, TurnPhase};
