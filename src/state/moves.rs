//! Commands as data, and the history they leave behind.
//!
//! A `Move` is one of the three commands a player can issue. Every accepted
//! move is appended to the game's history as a `MoveRecord`, which is
//! enough to replay the game from its seed.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// A player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    /// Discard a card from hand.
    Play(Card),
    /// Draw one card, or the whole penalty during an attack chain.
    Draw,
    /// Declare the suit after a Jack.
    ChangeSuit(Suit),
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Play(card) => write!(f, "play {}", card),
            Move::Draw => write!(f, "draw"),
            Move::ChangeSuit(suit) => write!(f, "declare {}", suit),
        }
    }
}

/// An accepted move with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Position in the game's history, from 0.
    pub sequence: u32,

    /// Who moved.
    pub player: String,

    /// What they did.
    pub action: Move,

    /// Cards taken into hand (non-zero only for draws).
    pub cards_drawn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(sequence: u32, player: impl Into<String>, action: Move, cards_drawn: u32) -> Self {
        Self {
            sequence,
            player: player.into(),
            action,
            cards_drawn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Play(Card::new(Suit::Clubs, Rank::Ace)).to_string(), "play Ace of Clubs");
        assert_eq!(Move::Draw.to_string(), "draw");
        assert_eq!(Move::ChangeSuit(Suit::Hearts).to_string(), "declare Hearts");
    }

    #[test]
    fn test_move_serde() {
        let json = serde_json::to_string(&Move::ChangeSuit(Suit::Diamonds)).unwrap();
        assert_eq!(json, r#"{"change_suit":"DIAMONDS"}"#);

        let json = serde_json::to_string(&Move::Draw).unwrap();
        assert_eq!(json, r#""draw""#);

        let record = MoveRecord::new(3, "A", Move::Play(Card::red_joker()), 0);
        let back: MoveRecord = serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
