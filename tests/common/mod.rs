//! Shared fixtures for integration tests.
//!
//! `Table` lays out an exact position (hands, top card, phase) and fills
//! in the rest of the deck so the 54-card invariant holds.

#![allow(dead_code)]

use check_engine::{Card, Deck, Direction, GameRngState, GameState, Snapshot, Suit};

/// Parse a card code like `"10H"` or `"RJ"`.
pub fn card(code: &str) -> Card {
    code.parse().unwrap()
}

pub fn cards(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|c| card(c)).collect()
}

/// Builder for a hand-crafted position.
pub struct Table {
    top: Card,
    under: Vec<Card>,
    players: Vec<(String, Vec<Card>)>,
    inactive: Vec<String>,
    current: usize,
    direction: Direction,
    attack: u32,
    locked: bool,
    last_active_suit: Option<Suit>,
    draw_pile: Option<Vec<Card>>,
}

impl Table {
    /// Start a table with `top` face up.
    pub fn new(top: &str) -> Self {
        Self {
            top: card(top),
            under: Vec::new(),
            players: Vec::new(),
            inactive: Vec::new(),
            current: 0,
            direction: Direction::Clockwise,
            attack: 0,
            locked: false,
            last_active_suit: None,
            draw_pile: None,
        }
    }

    /// Seat a player holding `hand`.
    pub fn player(mut self, id: &str, hand: &[&str]) -> Self {
        self.players.push((id.to_string(), cards(hand)));
        self
    }

    /// Seat a player who already went out.
    pub fn finished_player(mut self, id: &str) -> Self {
        self.players.push((id.to_string(), Vec::new()));
        self.inactive.push(id.to_string());
        self
    }

    /// Index into the active players of whose turn it is.
    pub fn current(mut self, index: usize) -> Self {
        self.current = index;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Open an attack chain worth `amount`.
    pub fn attack(mut self, amount: u32) -> Self {
        self.attack = amount;
        self
    }

    /// Leave a suit declaration pending (top must be a Jack).
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn active_suit(mut self, suit: Suit) -> Self {
        self.last_active_suit = Some(suit);
        self
    }

    /// Cards under the top card, oldest first.
    pub fn discards(mut self, codes: &[&str]) -> Self {
        self.under = cards(codes);
        self
    }

    /// Exact draw pile, bottom first. Leftover cards go under the top
    /// discard instead.
    pub fn draw_pile(mut self, codes: &[&str]) -> Self {
        self.draw_pile = Some(cards(codes));
        self
    }

    pub fn snapshot(self) -> Snapshot {
        let mut placed: Vec<Card> = self.under.clone();
        placed.push(self.top);
        for (_, hand) in &self.players {
            placed.extend(hand.iter().copied());
        }
        if let Some(pile) = &self.draw_pile {
            placed.extend(pile.iter().copied());
        }

        let mut rest: Vec<Card> = Deck::standard().cards().to_vec();
        for card in &placed {
            let pos = rest
                .iter()
                .position(|c| c == card)
                .unwrap_or_else(|| panic!("{card} placed twice"));
            rest.remove(pos);
        }

        let (draw_pile, mut discard_pile) = match self.draw_pile {
            Some(pile) => {
                let mut under = rest;
                under.extend(self.under);
                (pile, under)
            }
            None => (rest, self.under),
        };
        discard_pile.push(self.top);

        let active_players = self
            .players
            .iter()
            .map(|(id, _)| id.clone())
            .filter(|id| !self.inactive.contains(id))
            .collect();

        let players = self
            .players
            .into_iter()
            .map(|(id, hand)| check_engine::Player::with_hand(id, check_engine::Hand::from_cards(hand)))
            .collect();

        Snapshot {
            players,
            active_players,
            current_player_index: self.current,
            direction: self.direction,
            draw_pile,
            discard_pile,
            top_card: self.top,
            in_attack_chain: self.attack > 0,
            attack_amount: self.attack,
            last_active_suit: self
                .last_active_suit
                .unwrap_or(if self.top.suit().is_real() { self.top.suit() } else { Suit::Hearts }),
            locked_turn: self.locked,
            rng: Some(GameRngState { seed: 1, word_pos: 0 }),
            history: Default::default(),
        }
    }

    pub fn build(self) -> GameState {
        GameState::from_snapshot(self.snapshot()).unwrap()
    }
}

/// Check the invariants every reachable state must satisfy.
pub fn assert_invariants(game: &GameState) {
    assert_eq!(game.total_cards(), 54, "conservation");

    let ids: Vec<&str> = game.player_ids().collect();
    for id in game.active_player_ids() {
        assert!(ids.contains(&id.as_str()), "{id} is active but not seated");
    }

    if !game.active_player_ids().is_empty() {
        assert!(game.is_player_active(game.current_player_id()));
    }

    assert!(!(game.is_in_attack_chain() && game.is_turn_locked()));
    assert_eq!(game.is_in_attack_chain(), game.attack_amount() > 0);
}
