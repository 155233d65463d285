//! Property tests over randomly played games.
//!
//! Each case deals a seeded game and walks it with moves picked from
//! `legal_moves`, checking the invariants after every step.

mod common;

use check_engine::{Card, Deck, GameError, GameOptions, GameState, Move, Rank};
use proptest::prelude::*;

fn new_game(seed: u64, players: usize) -> GameState {
    let ids: Vec<String> = (0..players).map(|i| format!("p{i}")).collect();
    GameState::new(&ids, GameOptions::new().with_seed(seed)).unwrap()
}

/// Apply the move picked by `choice`; `None` when nothing can be played.
fn step(game: &mut GameState, choice: usize) -> Option<(String, Move)> {
    if game.is_game_over() {
        return None;
    }
    let current = game.current_player_id().to_string();
    let moves = game.legal_moves(&current);
    if moves.is_empty() {
        return None;
    }
    let mv = moves[choice % moves.len()];
    game.apply(&current, mv).unwrap();
    Some((current, mv))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Cards are conserved and the turn always belongs to an active player.
    #[test]
    fn test_invariants_hold(seed in 1u64.., players in 2usize..=6, choices in prop::collection::vec(any::<usize>(), 0..300)) {
        let mut game = new_game(seed, players);
        common::assert_invariants(&game);

        for choice in choices {
            if step(&mut game, choice).is_none() {
                break;
            }
            common::assert_invariants(&game);
        }
    }

    /// Wilds grow the penalty by exactly their own value; drawing clears it.
    #[test]
    fn test_chain_monotonicity(seed in 1u64.., players in 2usize..=5, choices in prop::collection::vec(any::<usize>(), 0..300)) {
        let mut game = new_game(seed, players);

        for choice in choices {
            let before = game.attack_amount();
            let was_chained = game.is_in_attack_chain();
            let Some((_, mv)) = step(&mut game, choice) else { break };

            match mv {
                Move::Play(card) if card.is_wild() => {
                    prop_assert_eq!(game.attack_amount(), before + card.draw_penalty());
                }
                Move::Play(_) => {
                    prop_assert!(!was_chained);
                    prop_assert_eq!(game.attack_amount(), 0);
                }
                Move::Draw => {
                    prop_assert!(!game.is_in_attack_chain());
                    prop_assert_eq!(game.attack_amount(), 0);
                }
                Move::ChangeSuit(_) => prop_assert!(!was_chained),
            }
        }
    }

    /// With two players, an Ace that does not end the game keeps the turn.
    #[test]
    fn test_two_player_ace(seed in 1u64.., choices in prop::collection::vec(any::<usize>(), 0..300)) {
        let mut game = new_game(seed, 2);

        for choice in choices {
            let Some((actor, mv)) = step(&mut game, choice) else { break };
            if let Move::Play(card) = mv {
                if card.rank() == Some(Rank::Ace) && !game.is_game_over() {
                    prop_assert_eq!(game.current_player_id(), actor.as_str());
                }
            }
        }
    }

    /// After a Jack, nothing but a declaration is accepted.
    #[test]
    fn test_suit_lock(seed in 1u64.., players in 2usize..=5, choices in prop::collection::vec(any::<usize>(), 0..300)) {
        let mut game = new_game(seed, players);

        for choice in choices {
            if step(&mut game, choice).is_none() {
                break;
            }
            if game.is_turn_locked() {
                let current = game.current_player_id().to_string();
                let held = game.hand(&current).unwrap();
                prop_assert_eq!(game.clone().draw_card(&current), Err(GameError::TurnLocked));
                if let Some(card) = held.first() {
                    prop_assert_eq!(game.clone().play_card(&current, *card), Err(GameError::TurnLocked));
                }
            }
        }
    }

    /// A refused command leaves the game as it was.
    #[test]
    fn test_rejected_play_changes_nothing(seed in 1u64.., players in 2usize..=5, choices in prop::collection::vec((any::<usize>(), 0usize..54), 0..150)) {
        let deck: Vec<Card> = Deck::standard().cards().to_vec();
        let mut game = new_game(seed, players);

        for (choice, pick) in choices {
            if game.is_game_over() {
                break;
            }
            let current = game.current_player_id().to_string();
            let before = game.snapshot();
            let mut probe = game.clone();
            if probe.play_card(&current, deck[pick]).is_err() {
                prop_assert_eq!(probe.snapshot(), before);
            }
            if step(&mut game, choice).is_none() {
                break;
            }
        }
    }

    /// Any reachable state survives both encodings.
    #[test]
    fn test_round_trip(seed in 1u64.., players in 2usize..=6, choices in prop::collection::vec(any::<usize>(), 0..200)) {
        let mut game = new_game(seed, players);
        for choice in choices {
            if step(&mut game, choice).is_none() {
                break;
            }
        }

        let from_json = GameState::from_json(&game.to_json().unwrap()).unwrap();
        prop_assert_eq!(from_json.snapshot(), game.snapshot());

        let from_bytes = GameState::from_bytes(&game.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(from_bytes.current_player_id(), game.current_player_id());
        prop_assert_eq!(from_bytes.top_card(), game.top_card());
        prop_assert_eq!(from_bytes.active_player_count(), game.active_player_count());
        for id in game.player_ids() {
            prop_assert_eq!(from_bytes.hand(id), game.hand(id));
        }
    }
}
