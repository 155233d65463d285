//! Card-on-card legality.
//!
//! The matching rule is shared by move validation in `state` and by the
//! playable-card filter on `Hand`, so both always agree.

pub mod matching;

pub use matching::{can_play, can_play_with_suit};
