//! A player's hand.
//!
//! Hands are small (7 cards dealt, rarely past 20), so lookups are linear
//! scans over a `SmallVec` that stays inline for a fresh deal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::rules;

/// Cards held by one player, in the order they were received.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove the first card equal to `card`.
    ///
    /// Returns the removed card, or `None` if the hand holds no such card.
    pub fn remove(&mut self, card: &Card) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c == card)?;
        Some(self.cards.remove(pos))
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards that may legally go on `top`, in hand order.
    #[must_use]
    pub fn playable_against(&self, top: &Card, in_attack_chain: bool) -> Vec<Card> {
        self.playable_with_suit(top, top.suit(), in_attack_chain)
    }

    /// Like [`Hand::playable_against`], with a declared suit in force.
    #[must_use]
    pub fn playable_with_suit(&self, top: &Card, active_suit: Suit, in_attack_chain: bool) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| rules::can_play_with_suit(c, top, active_suit, in_attack_chain))
            .copied()
            .collect()
    }
}
