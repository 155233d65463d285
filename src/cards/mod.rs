//! Cards and the draw pile.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Color`: card attributes
//! - `Card`: immutable card value with rule classifications
//! - `Deck`: ordered pile with shuffle, draw and insert operations
//! - `DiscardPile`: face-up pile that always has a top card

pub mod card;
pub mod deck;
pub mod discard;

pub use card::{Card, Color, ParseCardError, Rank, Suit};
pub use deck::Deck;
pub use discard::DiscardPile;
