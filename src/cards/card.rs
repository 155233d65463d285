//! Card values and their rule classifications.
//!
//! A `Card` is an immutable suit/rank/color triple. Colors follow the
//! suit (Hearts and Diamonds red, Spades and Clubs black) except for the
//! two Jokers, whose color is chosen when they are made.
//!
//! ## Special cards
//!
//! | Card  | Predicate          | Effect                                   |
//! |-------|--------------------|------------------------------------------|
//! | Seven | `is_wild`          | opens/extends an attack chain (+2)       |
//! | Joker | `is_wild`          | opens/extends an attack chain (+4)       |
//! | Two   | `is_transparent`   | playable on anything outside a chain     |
//! | Ace   | `is_skip`          | skips the next player                    |
//! | Jack  | `is_suit_changer`  | playable on anything; declares a suit    |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card suit. `Joker` is the pseudo-suit carried by both Jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    Joker,
}

impl Suit {
    /// The four suits a player may declare.
    pub const REAL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// True for Spades, Hearts, Diamonds and Clubs.
    #[must_use]
    pub const fn is_real(self) -> bool {
        !matches!(self, Suit::Joker)
    }

    /// Printed color of this suit; `None` for the Joker pseudo-suit.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Suit::Hearts | Suit::Diamonds => Some(Color::Red),
            Suit::Spades | Suit::Clubs => Some(Color::Black),
            Suit::Joker => None,
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Joker => 'J',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Joker => "Joker",
        };
        f.write_str(name)
    }
}

/// Card rank. Jokers have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    fn from_code(value: &str) -> Option<Self> {
        match value {
            "A" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            _ => None,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        };
        f.write_str(name)
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// A playing card.
///
/// Fields are private so a card can only be built consistently; equality
/// is structural over suit, rank and color.
///
/// ```
/// use check_engine::cards::{Card, Color, Rank, Suit};
///
/// let seven = Card::new(Suit::Hearts, Rank::Seven);
/// assert_eq!(seven.color(), Color::Red);
/// assert!(seven.is_wild());
/// assert_eq!(seven.draw_penalty(), 2);
///
/// let joker = Card::joker(Color::Black);
/// assert_eq!(joker.rank(), None);
/// assert_eq!(joker.draw_penalty(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Option<Rank>,
    color: Color,
}

impl Card {
    /// Create a ranked card. Color is derived from the suit.
    ///
    /// # Panics
    ///
    /// If `suit` is `Suit::Joker`. Use [`Card::joker`] for Jokers, or
    /// [`Card::try_new`] when the suit comes from outside input.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        match Self::try_new(suit, rank) {
            Some(card) => card,
            None => panic!("Jokers are built with Card::joker"),
        }
    }

    /// Create a ranked card, or `None` for the Joker pseudo-suit.
    #[must_use]
    pub const fn try_new(suit: Suit, rank: Rank) -> Option<Self> {
        match suit.color() {
            Some(color) => Some(Self {
                suit,
                rank: Some(rank),
                color,
            }),
            None => None,
        }
    }

    /// Create a Joker of the given color.
    #[must_use]
    pub const fn joker(color: Color) -> Self {
        Self {
            suit: Suit::Joker,
            rank: None,
            color,
        }
    }

    #[must_use]
    pub const fn red_joker() -> Self {
        Self::joker(Color::Red)
    }

    #[must_use]
    pub const fn black_joker() -> Self {
        Self::joker(Color::Black)
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank, or `None` for a Joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        self.rank
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Whether suit, rank and color agree with each other.
    ///
    /// Always true for cards built through the constructors; used to
    /// vet cards decoded from a snapshot.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match (self.suit.color(), self.rank) {
            (None, None) => true,
            (Some(color), Some(_)) => color == self.color,
            _ => false,
        }
    }

    // === Classification ===

    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }

    /// Sevens and Jokers.
    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.rank == Some(Rank::Seven) || self.is_joker()
    }

    /// Twos.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.rank == Some(Rank::Two)
    }

    /// Aces.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.rank == Some(Rank::Ace)
    }

    /// Jacks.
    #[must_use]
    pub fn is_suit_changer(&self) -> bool {
        self.rank == Some(Rank::Jack)
    }

    /// Cards the next player owes if they cannot answer: 2 for a Seven,
    /// 4 for a Joker, 0 otherwise.
    #[must_use]
    pub fn draw_penalty(&self) -> u32 {
        if self.is_joker() {
            4
        } else if self.rank == Some(Rank::Seven) {
            2
        } else {
            0
        }
    }

    // === Codes ===

    /// Short code: rank then suit letter (`"AS"`, `"10H"`), or `"RJ"`/`"BJ"`.
    #[must_use]
    pub fn code(&self) -> String {
        match self.rank {
            Some(rank) => format!("{}{}", rank.code(), self.suit.to_char()),
            None => match self.color {
                Color::Red => "RJ".to_string(),
                Color::Black => "BJ".to_string(),
            },
        }
    }

    /// Parse a short code produced by [`Card::code`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RJ" => return Some(Self::red_joker()),
            "BJ" => return Some(Self::black_joker()),
            _ => {}
        }
        let suit_char = code.chars().last()?;
        let suit = Suit::from_char(suit_char)?;
        let rank = Rank::from_code(&code[..code.len() - suit_char.len_utf8()])?;
        Self::try_new(suit, rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Some(rank) => write!(f, "{} of {}", rank, self.suit),
            None => write!(f, "{} Joker", self.color),
        }
    }
}

/// Error parsing a card code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised card code {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s.trim()).ok_or_else(|| ParseCardError(s.to_string()))
    }
}
