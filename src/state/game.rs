//! The turn engine.
//!
//! `GameState` owns everything about one game: players and hands, the
//! active-player rotation, both piles, the turn phase, the RNG and the
//! move history. It changes only through three commands:
//!
//! - [`GameState::play_card`]
//! - [`GameState::draw_card`]
//! - [`GameState::change_suit`]
//!
//! Each command checks every precondition before touching anything, so a
//! rejected command leaves the game exactly as it was.
//!
//! ## Turn effects
//!
//! After a card lands, exactly one of these fires, first match wins:
//!
//! 1. Ace: skip the next player (no-op with two players left)
//! 2. Wild answering an open chain: pass the chain on
//! 3. Jack: lock the turn until a suit is declared
//! 4. Anything else, including a wild that opens a chain: next player
//!
//! ## Elimination
//!
//! A player who sheds their last card leaves the rotation at once, and the
//! effect is judged against the players who remain. The turn pointer is
//! re-anchored on the seat before the leaver's successor, so a normal
//! advance lands on the successor and an Ace with three or more left skips
//! them. A void Ace hands the turn to the successor, and so does a Jack,
//! whose suit the successor then declares.

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, error, info, trace};

use super::moves::{Move, MoveRecord};
use super::turn::{Direction, TurnPhase};
use crate::cards::{Card, Deck, DiscardPile, Suit};
use crate::core::{GameError, GameOptions, GameRng};
use crate::player::Player;
use crate::rules;

/// Complete state of one game of Check.
///
/// `Clone` yields a fully independent copy: hands, piles and id lists are
/// owned collections, and the history is a persistent vector whose copies
/// never observe each other's pushes. Use it for speculative validation or
/// to snapshot mid-game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Everyone who ever sat down, in join order.
    pub(crate) players: Vec<Player>,

    /// Player id -> index into `players`.
    pub(crate) seats: FxHashMap<String, usize>,

    /// Ids still holding cards. Shrinks, never grows.
    pub(crate) active_players: Vec<String>,

    /// Index into `active_players` of whose turn it is.
    pub(crate) current_player_index: usize,

    pub(crate) direction: Direction,

    pub(crate) draw_pile: Deck,

    pub(crate) discard_pile: DiscardPile,

    /// Suit in force: the last non-Joker card's suit, or the declared one.
    pub(crate) last_active_suit: Suit,

    pub(crate) phase: TurnPhase,

    pub(crate) rng: GameRng,

    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// Start a new game: shuffle, deal `options.initial_cards` to each
    /// player round-robin, and flip a non-wild starting card.
    ///
    /// The first id in `player_ids` moves first.
    ///
    /// ```
    /// use check_engine::{GameOptions, GameState};
    ///
    /// let game = GameState::new(&["A", "B", "C"], GameOptions::new().with_seed(42)).unwrap();
    /// assert_eq!(game.current_player_id(), "A");
    /// assert!(!game.top_card().is_wild());
    /// ```
    pub fn new<S: AsRef<str>>(player_ids: &[S], options: GameOptions) -> Result<Self, GameError> {
        options.validate(player_ids.len())?;

        let mut seen = FxHashSet::default();
        for id in player_ids {
            if !seen.insert(id.as_ref()) {
                return Err(GameError::DuplicatePlayer(id.as_ref().to_string()));
            }
        }

        let mut rng = GameRng::from_seed_or_entropy(options.random_seed);
        let mut draw_pile = Deck::standard();
        draw_pile.shuffle(&mut rng);

        let not_enough = || GameError::NotEnoughCards {
            players: player_ids.len(),
            per_player: options.initial_cards,
        };

        let mut players: Vec<Player> = player_ids.iter().map(|id| Player::new(id.as_ref())).collect();
        for _ in 0..options.initial_cards {
            for player in &mut players {
                let card = draw_pile.draw_one().ok_or_else(not_enough)?;
                player.hand.add(card);
            }
        }

        // Wild cards go back and get reshuffled until a plain card turns up
        if draw_pile.cards().iter().all(Card::is_wild) {
            return Err(not_enough());
        }
        let starter = loop {
            let card = draw_pile.draw_one().ok_or_else(not_enough)?;
            if !card.is_wild() {
                break card;
            }
            draw_pile.add_to_bottom(card);
            draw_pile.shuffle(&mut rng);
        };

        let seats = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        let active_players = players.iter().map(|p| p.id.clone()).collect();

        debug!(
            players = player_ids.len(),
            seed = rng.seed(),
            starter = %starter,
            "game created"
        );

        Ok(Self {
            players,
            seats,
            active_players,
            current_player_index: 0,
            direction: Direction::Clockwise,
            draw_pile,
            discard_pile: DiscardPile::new(starter),
            last_active_suit: starter.suit(),
            phase: TurnPhase::Idle,
            rng,
            history: Vector::new(),
        })
    }

    /// Rebuild a game from its seed and recorded moves.
    ///
    /// `options` must carry the original non-zero seed. Stops at the first
    /// move the rebuilt game rejects.
    pub fn replay<'a, S: AsRef<str>>(
        player_ids: &[S],
        options: GameOptions,
        moves: impl IntoIterator<Item = &'a MoveRecord>,
    ) -> Result<Self, GameError> {
        let mut game = Self::new(player_ids, options)?;
        for record in moves {
            game.apply(&record.player, record.action)?;
        }
        Ok(game)
    }

    // === Commands ===

    /// Run a command given as data.
    pub fn apply(&mut self, player_id: &str, action: Move) -> Result<(), GameError> {
        match action {
            Move::Play(card) => self.play_card(player_id, card),
            Move::Draw => self.draw_card(player_id),
            Move::ChangeSuit(suit) => self.change_suit(player_id, suit),
        }
    }

    /// Discard `card` from `player_id`'s hand.
    pub fn play_card(&mut self, player_id: &str, card: Card) -> Result<(), GameError> {
        let seat = self.check_play(player_id, &card)?;

        self.players[seat].hand.remove(&card);
        self.discard_pile.push(card);
        if !card.is_joker() {
            self.last_active_suit = card.suit();
        }

        let answering_chain = self.phase.in_attack_chain();
        if card.is_wild() {
            self.phase = self.phase.escalate(card.draw_penalty());
        }

        debug!(player = player_id, card = %card, phase = ?self.phase, "card played");

        let went_out = self.players[seat].is_out();
        if went_out {
            self.remove_current_player();
        }

        if card.is_skip() {
            self.skip_next_player(went_out);
        } else if card.is_wild() && answering_chain {
            self.advance_turn();
        } else if card.is_suit_changer() {
            self.lock_turn(went_out);
        } else {
            self.advance_turn();
        }

        self.record(player_id, Move::Play(card), 0);
        Ok(())
    }

    /// Draw for `player_id`: one card, or the whole running penalty when an
    /// attack chain is open. Ends the player's turn and closes any chain.
    pub fn draw_card(&mut self, player_id: &str) -> Result<(), GameError> {
        let seat = self.check_turn(player_id)?;
        if self.phase.is_locked() {
            return Err(GameError::TurnLocked);
        }

        let owed = self.cards_owed();
        let available = self.draw_pile.count() + self.discard_pile.recyclable();
        if owed > available {
            error!(player = player_id, owed, available, "draw pile exhausted");
            return Err(GameError::DeckExhausted {
                needed: owed,
                available,
            });
        }

        for _ in 0..owed {
            let card = self.take_from_draw_pile()?;
            self.players[seat].hand.add(card);
        }
        self.phase = TurnPhase::Idle;

        debug!(player = player_id, drawn = owed, "cards drawn");

        self.advance_turn();
        self.record(player_id, Move::Draw, owed as u32);
        Ok(())
    }

    /// Declare the suit after a Jack.
    pub fn change_suit(&mut self, player_id: &str, suit: Suit) -> Result<(), GameError> {
        self.check_change_suit(player_id, suit)?;

        self.last_active_suit = suit;
        self.phase = TurnPhase::Idle;

        debug!(player = player_id, suit = %suit, "suit declared");

        self.advance_turn();
        self.record(player_id, Move::ChangeSuit(suit), 0);
        Ok(())
    }

    /// Move every discard but the top into the draw pile and shuffle it.
    ///
    /// Fails with the fatal [`GameError::DeckExhausted`] when nothing sits
    /// under the top card.
    pub fn reshuffle_discard_into_draw(&mut self) -> Result<(), GameError> {
        if self.discard_pile.recyclable() == 0 {
            error!(draw_pile = self.draw_pile.count(), "nothing to reshuffle");
            return Err(GameError::DeckExhausted {
                needed: 1,
                available: 0,
            });
        }

        let recycled = self.discard_pile.take_under();
        trace!(cards = recycled.len(), "reshuffling discard pile");
        self.draw_pile.add_many_to_bottom(recycled);
        self.draw_pile.shuffle(&mut self.rng);
        Ok(())
    }

    // === Validation ===

    /// Every `play_card` precondition, in order, without mutating.
    ///
    /// Returns the actor's index into the player list.
    pub fn check_play(&self, player_id: &str, card: &Card) -> Result<usize, GameError> {
        let seat = self.check_turn(player_id)?;
        if self.phase.is_locked() {
            return Err(GameError::TurnLocked);
        }
        if !self.players[seat].hand.contains(card) {
            return Err(GameError::CardNotHeld(*card));
        }

        if self.phase.in_attack_chain() && !card.is_wild() {
            return Err(GameError::MustDefend(*card));
        }
        let top = self.top_card();
        if !rules::can_play_with_suit(card, &top, self.matching_suit(), self.phase.in_attack_chain()) {
            return Err(GameError::IllegalPlay { card: *card, top });
        }
        Ok(seat)
    }

    /// Every `change_suit` precondition, in order, without mutating.
    pub fn check_change_suit(&self, player_id: &str, suit: Suit) -> Result<(), GameError> {
        self.check_turn(player_id)?;
        if !self.phase.is_locked() || !self.top_card().is_suit_changer() {
            return Err(GameError::NoSuitChangePending);
        }
        if !suit.is_real() {
            return Err(GameError::InvalidSuit(suit));
        }
        Ok(())
    }

    /// Dry-run check of a play.
    #[must_use]
    pub fn validate_move(&self, player_id: &str, card: &Card) -> bool {
        self.check_play(player_id, card).is_ok()
    }

    /// Every move `player_id` could make right now.
    ///
    /// Empty when it is not their turn or the game is over.
    #[must_use]
    pub fn legal_moves(&self, player_id: &str) -> Vec<Move> {
        if self.check_turn(player_id).is_err() {
            return Vec::new();
        }
        if self.phase.is_locked() {
            return Suit::REAL.into_iter().map(Move::ChangeSuit).collect();
        }

        let mut moves: Vec<Move> = self
            .playable_cards(player_id)
            .unwrap_or_default()
            .into_iter()
            .map(Move::Play)
            .collect();
        if self.cards_owed() <= self.draw_pile.count() + self.discard_pile.recyclable() {
            moves.push(Move::Draw);
        }
        moves
    }

    fn check_turn(&self, player_id: &str) -> Result<usize, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let seat = self.seat(player_id)?;
        let current = self.current_player_id();
        if current != player_id {
            return Err(GameError::NotYourTurn {
                player: player_id.to_string(),
                current: current.to_string(),
            });
        }
        Ok(seat)
    }

    fn seat(&self, player_id: &str) -> Result<usize, GameError> {
        self.seats
            .get(player_id)
            .copied()
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))
    }

    // === Turn order ===

    /// Pass the turn to the next active player.
    fn advance_turn(&mut self) {
        let len = self.active_players.len();
        if len <= 1 {
            return;
        }
        self.current_player_index = self.direction.next(self.current_player_index, len);
    }

    /// Ace effect. With two or fewer left the skip is void: the actor goes
    /// again, or if the actor just went out, their successor moves.
    fn skip_next_player(&mut self, actor_went_out: bool) {
        if self.active_players.len() <= 2 {
            if actor_went_out {
                self.advance_turn();
            }
            return;
        }
        self.advance_turn();
        self.advance_turn();
    }

    /// Jack effect. The actor declares, or their successor if the actor
    /// just went out. Nothing locks once the game is over.
    fn lock_turn(&mut self, actor_went_out: bool) {
        if actor_went_out {
            self.advance_turn();
        }
        if !self.is_game_over() {
            self.phase = TurnPhase::SuitLocked;
        }
    }

    /// Take the current player out of the rotation and park the pointer on
    /// the seat before their successor.
    fn remove_current_player(&mut self) {
        let removed_at = self.current_player_index;
        let id = self.active_players.remove(removed_at);
        let len = self.active_players.len();

        info!(player = %id, remaining = len, "player went out");

        if len == 0 {
            self.current_player_index = 0;
            return;
        }

        let successor = match self.direction {
            Direction::Clockwise => removed_at % len,
            Direction::CounterClockwise => (removed_at + len - 1) % len,
        };
        self.current_player_index = self.direction.previous(successor, len);

        if len == 1 {
            info!(loser = %self.active_players[0], "game over");
        }
    }

    // === Drawing ===

    fn cards_owed(&self) -> usize {
        match self.phase {
            TurnPhase::AttackChain { amount } => amount.max(1) as usize,
            _ => 1,
        }
    }

    fn take_from_draw_pile(&mut self) -> Result<Card, GameError> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discard_into_draw()?;
        }
        self.draw_pile.draw_one().ok_or(GameError::DeckExhausted {
            needed: 1,
            available: 0,
        })
    }

    fn record(&mut self, player_id: &str, action: Move, cards_drawn: u32) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(MoveRecord::new(sequence, player_id, action, cards_drawn));
    }

    /// Suit the next play must follow: the declared suit while a Jack is
    /// on top, the top card's own suit otherwise.
    fn matching_suit(&self) -> Suit {
        let top = self.top_card();
        if top.is_suit_changer() {
            self.last_active_suit
        } else {
            top.suit()
        }
    }

    // === Queries ===

    /// Whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> &str {
        &self.active_players[self.current_player_index]
    }

    #[must_use]
    pub fn is_player_turn(&self, player_id: &str) -> bool {
        !self.is_game_over() && self.current_player_id() == player_id
    }

    #[must_use]
    pub fn top_card(&self) -> Card {
        self.discard_pile.top()
    }

    #[must_use]
    pub fn last_active_suit(&self) -> Suit {
        self.last_active_suit
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_in_attack_chain(&self) -> bool {
        self.phase.in_attack_chain()
    }

    #[must_use]
    pub fn attack_amount(&self) -> u32 {
        self.phase.attack_amount()
    }

    /// True while a suit declaration is pending.
    #[must_use]
    pub fn is_turn_locked(&self) -> bool {
        self.phase.is_locked()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Over once at most one player still holds cards.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.active_players.len() <= 1
    }

    /// Every player, active or not, whose hand is empty, in join order.
    #[must_use]
    pub fn winners(&self) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| p.is_out())
            .map(|p| p.id.as_str())
            .collect()
    }

    /// The last player holding cards, once exactly one remains.
    #[must_use]
    pub fn loser(&self) -> Option<&str> {
        match self.active_players.as_slice() {
            [last] => Some(last.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn active_player_count(&self) -> usize {
        self.active_players.len()
    }

    #[must_use]
    pub fn active_player_ids(&self) -> &[String] {
        &self.active_players
    }

    #[must_use]
    pub fn is_player_active(&self, player_id: &str) -> bool {
        self.active_players.iter().any(|id| id == player_id)
    }

    /// All player ids in join order.
    pub fn player_ids(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.id.as_str())
    }

    /// Copy of a player's hand.
    pub fn hand(&self, player_id: &str) -> Result<Vec<Card>, GameError> {
        let seat = self.seat(player_id)?;
        Ok(self.players[seat].hand.cards().to_vec())
    }

    pub fn hand_size(&self, player_id: &str) -> Result<usize, GameError> {
        let seat = self.seat(player_id)?;
        Ok(self.players[seat].hand.size())
    }

    /// Cards in `player_id`'s hand that could be played now.
    ///
    /// Requires it to be their turn. Empty while a suit declaration is
    /// pending.
    pub fn playable_cards(&self, player_id: &str) -> Result<Vec<Card>, GameError> {
        let seat = self.check_turn(player_id)?;
        if self.phase.is_locked() {
            return Ok(Vec::new());
        }
        Ok(self.players[seat].hand.playable_with_suit(
            &self.top_card(),
            self.matching_suit(),
            self.phase.in_attack_chain(),
        ))
    }

    #[must_use]
    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.count()
    }

    #[must_use]
    pub fn discard_pile_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Cards in play: both piles plus every hand. Always 54.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.count()
            + self.discard_pile.len()
            + self.players.iter().map(|p| p.hand.size()).sum::<usize>()
    }

    /// Seed of the game RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }
}
