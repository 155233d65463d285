//! Persisted snapshots.
//!
//! A `Snapshot` is the flat, serializable mirror of a `GameState`: the
//! turn phase is spread back into the `in_attack_chain` / `attack_amount`
//! / `locked_turn` flags and the discard pile is a plain list whose last
//! card is the top card.
//!
//! Restoring goes through [`GameState::from_snapshot`], which refuses
//! anything a real game could not have produced (bad indices, flag
//! combinations, or a card multiset that is not exactly one deck).
//!
//! ## Encodings
//!
//! - JSON (`serde_json`) for documents a server stores or ships
//! - Binary (`bincode`) for compact checkpoints

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::game::GameState;
use super::moves::MoveRecord;
use super::turn::{Direction, TurnPhase};
use crate::cards::{Card, Deck, DiscardPile, Suit};
use crate::core::{GameRng, GameRngState, SnapshotError};
use crate::player::Player;

/// Serializable game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every player with their hand, in join order.
    pub players: Vec<Player>,

    /// Ids still holding cards, in turn order.
    pub active_players: Vec<String>,

    pub current_player_index: usize,

    pub direction: Direction,

    /// Bottom to top.
    pub draw_pile: Vec<Card>,

    /// Bottom to top; the last card is `top_card`.
    pub discard_pile: Vec<Card>,

    pub top_card: Card,

    pub in_attack_chain: bool,

    pub attack_amount: u32,

    pub last_active_suit: Suit,

    #[serde(alias = "blocked_turn")]
    pub locked_turn: bool,

    /// Generator position; absent means "reseed from entropy".
    #[serde(default)]
    pub rng: Option<GameRngState>,

    #[serde(default)]
    pub history: Vector<MoveRecord>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check that this snapshot describes a reachable game.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let invalid = |msg: String| Err(SnapshotError::Invalid(msg));

        let mut ids = FxHashSet::default();
        for player in &self.players {
            if !ids.insert(player.id.as_str()) {
                return invalid(format!("duplicate player {:?}", player.id));
            }
        }

        if self.active_players.is_empty() {
            return invalid("no active players".into());
        }
        let mut active = FxHashSet::default();
        for id in &self.active_players {
            if !ids.contains(id.as_str()) {
                return invalid(format!("active player {id:?} is not seated"));
            }
            if !active.insert(id.as_str()) {
                return invalid(format!("player {id:?} is active twice"));
            }
        }
        for player in &self.players {
            let is_active = active.contains(player.id.as_str());
            if !is_active && !player.hand.is_empty() {
                return invalid(format!("inactive player {:?} still holds cards", player.id));
            }
            if is_active && player.hand.is_empty() {
                return invalid(format!("active player {:?} holds no cards", player.id));
            }
        }

        if self.current_player_index >= self.active_players.len() {
            return invalid(format!(
                "current index {} out of range for {} active players",
                self.current_player_index,
                self.active_players.len()
            ));
        }

        match self.discard_pile.last() {
            None => return invalid("empty discard pile".into()),
            Some(last) if *last != self.top_card => {
                return invalid(format!("top card {} is not the last discard {}", self.top_card, last));
            }
            Some(_) => {}
        }

        let Some(phase) = TurnPhase::from_flags(self.in_attack_chain, self.attack_amount, self.locked_turn) else {
            return invalid(format!(
                "impossible flags: in_attack_chain={} attack_amount={} locked_turn={}",
                self.in_attack_chain, self.attack_amount, self.locked_turn
            ));
        };
        if !self.last_active_suit.is_real() {
            return invalid(format!("{} cannot be the suit in force", self.last_active_suit));
        }
        if phase.is_locked() && !self.top_card.is_suit_changer() {
            return invalid(format!("turn locked but top card {} is not a Jack", self.top_card));
        }

        self.check_conservation()
    }

    /// Every card of one standard deck appears exactly once.
    fn check_conservation(&self) -> Result<(), SnapshotError> {
        let mut counts: FxHashMap<Card, i32> = FxHashMap::default();
        for card in Deck::standard().cards() {
            *counts.entry(*card).or_default() += 1;
        }

        let held = self.players.iter().flat_map(|p| p.hand.cards().iter());
        for card in self.draw_pile.iter().chain(&self.discard_pile).chain(held) {
            if !card.is_consistent() {
                return Err(SnapshotError::Invalid(format!("malformed card {card:?}")));
            }
            *counts.entry(*card).or_default() -= 1;
        }

        match counts.iter().find(|(_, &n)| n != 0) {
            Some((card, n)) if *n > 0 => Err(SnapshotError::Invalid(format!("{card} is missing"))),
            Some((card, _)) => Err(SnapshotError::Invalid(format!("{card} appears more than once"))),
            None => Ok(()),
        }
    }
}

impl GameState {
    /// Capture the full state, including RNG position and history.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            active_players: self.active_players.clone(),
            current_player_index: self.current_player_index,
            direction: self.direction,
            draw_pile: self.draw_pile.cards().to_vec(),
            discard_pile: self.discard_pile.to_vec(),
            top_card: self.top_card(),
            in_attack_chain: self.phase.in_attack_chain(),
            attack_amount: self.phase.attack_amount(),
            last_active_suit: self.last_active_suit,
            locked_turn: self.phase.is_locked(),
            rng: Some(self.rng.state()),
            history: self.history.clone(),
        }
    }

    /// Restore a game from a snapshot after validating it.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let phase = TurnPhase::from_flags(snapshot.in_attack_chain, snapshot.attack_amount, snapshot.locked_turn)
            .ok_or_else(|| SnapshotError::Invalid("impossible turn flags".into()))?;
        let discard_pile = DiscardPile::from_cards(snapshot.discard_pile)
            .ok_or_else(|| SnapshotError::Invalid("empty discard pile".into()))?;
        let rng = match &snapshot.rng {
            Some(state) => GameRng::from_state(state),
            None => GameRng::from_entropy(),
        };
        let seats = snapshot
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        Ok(GameState {
            players: snapshot.players,
            seats,
            active_players: snapshot.active_players,
            current_player_index: snapshot.current_player_index,
            direction: snapshot.direction,
            draw_pile: Deck::from_cards(snapshot.draw_pile),
            discard_pile,
            last_active_suit: snapshot.last_active_suit,
            phase,
            rng,
            history: snapshot.history,
        })
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        self.snapshot().to_json()
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Self::from_snapshot(Snapshot::from_json(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        self.snapshot().to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Self::from_snapshot(Snapshot::from_bytes(bytes)?)
    }
}
