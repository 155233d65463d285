//! The matching rule: may this card go on that one?
//!
//! Inside an attack chain only wild cards answer. Outside one:
//!
//! 1. Twos and Jacks go on anything.
//! 2. Wild goes on wild.
//! 3. Same suit, or same rank.
//! 4. A Joker goes on any card of its own color.

use crate::cards::{Card, Suit};

/// Whether `played` may be discarded onto `top`.
///
/// The suit comparison uses `top`'s printed suit. Use
/// [`can_play_with_suit`] when a declared suit overrides it.
#[must_use]
pub fn can_play(played: &Card, top: &Card, in_attack_chain: bool) -> bool {
    can_play_with_suit(played, top, top.suit(), in_attack_chain)
}

/// Whether `played` may be discarded onto `top` while `active_suit` is the
/// suit in force.
#[must_use]
pub fn can_play_with_suit(played: &Card, top: &Card, active_suit: Suit, in_attack_chain: bool) -> bool {
    if in_attack_chain {
        return played.is_wild();
    }

    played.is_transparent()
        || played.is_suit_changer()
        || (played.is_wild() && top.is_wild())
        || played.suit() == active_suit
        || (played.rank().is_some() && played.rank() == top.rank())
        || (played.is_joker() && played.color() == top.color())
}
