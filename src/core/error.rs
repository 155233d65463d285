//! Error types.
//!
//! ## GameError
//!
//! Every command failure is a validation failure the caller hands back to
//! the acting client. Commands check all preconditions before mutating, so
//! an `Err` always leaves the game untouched.
//!
//! The one exception in spirit is `DeckExhausted`: it means the 54-card
//! conservation invariant was broken somewhere and is reported as fatal
//! via [`GameError::is_fatal`].
//!
//! ## SnapshotError
//!
//! Decoding and validation failures when restoring a persisted game.

use thiserror::Error;

use crate::cards::{Card, Suit};

/// Failure of a game command, query, or construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Fewer than two player ids supplied.
    #[error("at least 2 players required, got {0}")]
    NotEnoughPlayers(usize),

    /// The same player id appears twice.
    #[error("duplicate player id {0:?}")]
    DuplicatePlayer(String),

    /// The deck cannot deal every hand plus the starting card.
    #[error("cannot deal {per_player} cards to each of {players} players")]
    NotEnoughCards { players: usize, per_player: usize },

    /// Player id not found among the game's players.
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    /// Command issued by someone other than the current player.
    #[error("not {player}'s turn (current player is {current})")]
    NotYourTurn { player: String, current: String },

    /// A suit declaration is pending; nothing else may happen.
    #[error("turn is locked until a suit is declared")]
    TurnLocked,

    /// The named card is not in the actor's hand.
    #[error("{0} is not in hand")]
    CardNotHeld(Card),

    /// The card does not match the top card.
    #[error("{card} cannot be played on {top}")]
    IllegalPlay { card: Card, top: Card },

    /// An attack chain is open and the card is not wild.
    #[error("must answer the attack with a wild card, got {0}")]
    MustDefend(Card),

    /// Declared suit is not one of the four real suits.
    #[error("{0} is not a declarable suit")]
    InvalidSuit(Suit),

    /// `change_suit` without a suit-changer waiting for its declaration.
    #[error("no suit change is pending")]
    NoSuitChangePending,

    /// The game already ended.
    #[error("game is over")]
    GameOver,

    /// Draw and discard piles together cannot supply the cards owed.
    #[error("deck exhausted: {needed} cards owed, {available} available")]
    DeckExhausted { needed: usize, available: usize },
}

impl GameError {
    /// Whether this error signals a broken invariant rather than a bad move.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::DeckExhausted { .. })
    }

    /// Whether the card itself was not allowed: it fails the matching rule
    /// or does not answer an open attack chain.
    #[must_use]
    pub fn is_illegal_play(&self) -> bool {
        matches!(self, GameError::IllegalPlay { .. } | GameError::MustDefend(_))
    }
}

/// Failure to restore a game from a persisted snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot binary: {0}")]
    Binary(#[from] bincode::Error),

    /// Decoded fine, but describes an impossible game.
    #[error("invalid snapshot: {0}")]
    Invalid(String),
}
