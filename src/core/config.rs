//! Game configuration.
//!
//! Callers configure a game at construction by providing `GameOptions`:
//! - `initial_cards`: cards dealt to each player
//! - `random_seed`: seed for every shuffle (`0` picks one from entropy)

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Cards in a full Check deck: 4 suits × 13 ranks + 2 Jokers.
pub const DECK_SIZE: usize = 54;

/// Default hand size dealt to each player.
pub const DEFAULT_INITIAL_CARDS: usize = 7;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Options for a new game.
///
/// ## Example
///
/// ```
/// use check_engine::core::GameOptions;
///
/// let options = GameOptions::new().with_initial_cards(5).with_seed(42);
/// assert_eq!(options.initial_cards, 5);
/// assert_eq!(options.random_seed, 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of cards dealt to each player at start.
    pub initial_cards: usize,

    /// Seed for the game RNG. `0` derives a seed from entropy.
    pub random_seed: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_cards: DEFAULT_INITIAL_CARDS,
            random_seed: 0,
        }
    }
}

impl GameOptions {
    /// Create options with the defaults (7 cards, entropy seed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards dealt to each player.
    #[must_use]
    pub fn with_initial_cards(mut self, count: usize) -> Self {
        self.initial_cards = count;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Check that `player_count` players can be dealt in with one card left
    /// over to start the discard pile.
    pub fn validate(&self, player_count: usize) -> Result<(), GameError> {
        if player_count < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers(player_count));
        }

        let needed = player_count
            .checked_mul(self.initial_cards)
            .and_then(|dealt| dealt.checked_add(1));
        match needed {
            Some(n) if n <= DECK_SIZE => Ok(()),
            _ => Err(GameError::NotEnoughCards {
                players: player_count,
                per_player: self.initial_cards,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GameOptions::default();
        assert_eq!(options.initial_cards, 7);
        assert_eq!(options.random_seed, 0);
    }

    #[test]
    fn test_builder() {
        let options = GameOptions::new().with_initial_cards(3).with_seed(9);
        assert_eq!(options.initial_cards, 3);
        assert_eq!(options.random_seed, 9);
    }

    #[test]
    fn test_validate_player_count() {
        let options = GameOptions::default();
        assert_eq!(options.validate(1), Err(GameError::NotEnoughPlayers(1)));
        assert!(options.validate(2).is_ok());
        assert!(options.validate(7).is_ok());
    }

    #[test]
    fn test_validate_deal_size() {
        // 7 players × 7 cards + 1 starter = 50 fits, 8 × 7 + 1 = 57 does not
        let options = GameOptions::default();
        assert_eq!(
            options.validate(8),
            Err(GameError::NotEnoughCards { players: 8, per_player: 7 })
        );

        let huge = GameOptions::new().with_initial_cards(usize::MAX);
        assert!(huge.validate(2).is_err());
    }

    #[test]
    fn test_options_serde() {
        let options = GameOptions::new().with_seed(5);
        let json = serde_json::to_string(&options).unwrap();
        let back: GameOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
