//! Players and their hands.
//!
//! A `Player` is an id plus a `Hand`. Players are owned by `GameState`;
//! callers only ever see copies of hands.

pub mod hand;

use serde::{Deserialize, Serialize};

pub use hand::Hand;

/// A seat in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique within a game.
    pub id: String,

    pub hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hand: Hand::new(),
        }
    }

    /// Create a player already holding `hand`.
    pub fn with_hand(id: impl Into<String>, hand: Hand) -> Self {
        Self { id: id.into(), hand }
    }

    /// True once the player has shed every card.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.hand.is_empty()
    }
}
