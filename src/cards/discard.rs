//! The discard pile.
//!
//! Never empty: a game starts by flipping a card onto it, and recycling
//! keeps the top card behind. The top card is stored apart from the rest,
//! so "top card is the last discard" holds by construction.

use super::card::Card;

/// Face-up pile with a guaranteed top card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscardPile {
    /// Cards under the top, oldest first.
    under: Vec<Card>,
    top: Card,
}

impl DiscardPile {
    /// Start a pile with a single card.
    #[must_use]
    pub fn new(top: Card) -> Self {
        Self {
            under: Vec::new(),
            top,
        }
    }

    /// Rebuild from a bottom-to-top listing; `None` if `cards` is empty.
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Option<Self> {
        let top = cards.pop()?;
        Some(Self { under: cards, top })
    }

    #[must_use]
    pub fn top(&self) -> Card {
        self.top
    }

    /// Lay a card on top.
    pub fn push(&mut self, card: Card) {
        self.under.push(self.top);
        self.top = card;
    }

    /// Cards that could be recycled into the draw pile.
    #[must_use]
    pub fn recyclable(&self) -> usize {
        self.under.len()
    }

    /// Take every card except the top, oldest first.
    pub fn take_under(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.under)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.under.len() + 1
    }

    /// Always false; present for symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Bottom-to-top listing.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        let mut cards = self.under.clone();
        cards.push(self.top);
        cards
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.under.iter().chain(std::iter::once(&self.top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn test_push_moves_top_under() {
        let mut pile = DiscardPile::new(card("5H"));
        pile.push(card("5S"));
        pile.push(card("9S"));

        assert_eq!(pile.top(), card("9S"));
        assert_eq!(pile.len(), 3);
        assert_eq!(pile.to_vec(), vec![card("5H"), card("5S"), card("9S")]);
    }

    #[test]
    fn test_take_under_keeps_top() {
        let mut pile = DiscardPile::from_cards(vec![card("2C"), card("3C"), card("4C")]).unwrap();
        assert_eq!(pile.recyclable(), 2);

        assert_eq!(pile.take_under(), vec![card("2C"), card("3C")]);
        assert_eq!(pile.to_vec(), vec![card("4C")]);
        assert_eq!(pile.recyclable(), 0);
    }

    #[test]
    fn test_from_empty_is_rejected() {
        assert_eq!(DiscardPile::from_cards(vec![]), None);
    }
}
