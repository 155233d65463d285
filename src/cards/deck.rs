//! Ordered card pile used for the draw pile.
//!
//! The top of the deck is the end of the backing `Vec`, so drawing is a
//! `pop`. Serialized order is bottom to top.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Rank, Suit};
use crate::core::GameRng;

/// An ordered stack of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    /// Bottom first, top last.
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full 54-card Check deck, unshuffled.
    ///
    /// Suits in Spades, Hearts, Diamonds, Clubs order, each Ace to King,
    /// then the red and black Jokers.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(crate::core::DECK_SIZE);
        for suit in Suit::REAL {
            cards.extend(Rank::ALL.into_iter().filter_map(|rank| Card::try_new(suit, rank)));
        }
        cards.push(Card::joker(Color::Red));
        cards.push(Card::joker(Color::Black));
        Self::from_cards(cards)
    }

    /// Wrap an existing ordering (bottom first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Cards bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` if empty.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return the top `n` cards, topmost first.
    ///
    /// All or nothing: returns `None` and draws nothing if fewer than `n`
    /// remain.
    pub fn draw_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        let split = self.cards.len() - n;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Some(drawn)
    }

    /// Put a card on top.
    pub fn add_to_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Slide a card under the deck.
    pub fn add_to_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Slide several cards under the deck, keeping their relative order:
    /// the first card given ends up nearest the top.
    pub fn add_many_to_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        let mut incoming: Vec<Card> = cards.into_iter().collect();
        incoming.reverse();
        incoming.append(&mut self.cards);
        self.cards = incoming;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
