//! Playing cards: suits, ranks, colors, and the card value itself.
//!
//! A `Card` is identified by its `(Suit, Rank)` pair; exactly 52 distinct
//! pairs exist per game. The `face_up` flag travels *with* the value, so
//! moving a card between piles is a plain value transfer with no shared
//! references to reason about.

use serde::{Deserialize, Serialize};

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// Red or black, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    /// All four suits, in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The color of this suit. Hearts and Diamonds are red.
    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    /// Unicode suit symbol for rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
            Suit::Spades => '\u{2660}',
        }
    }
}

/// Card rank: Ace (1) through King (13).
///
/// Stored as the ordinal value so stacking rules can compare adjacent
/// ranks directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    /// Create a rank from its ordinal value. Returns `None` outside 1..=13.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=13).contains(&value).then_some(Self(value))
    }

    /// The ordinal value, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Short label: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => unreachable!("rank out of range"),
        }
    }
}

/// A playing card value.
///
/// Identity is the `(suit, rank)` pair; `face_up` is mutable state carried
/// in the value. Piles own cards directly, so a card is in exactly one pile
/// at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// The card's color, derived from its suit.
    #[must_use]
    pub const fn color(self) -> CardColor {
        self.suit.color()
    }
}

impl std::fmt::Display for Card {
    /// Face-up cards render as `[10♥]`; face-down cards as `[###]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "[{:>2}{}]", self.rank.label(), self.suit.symbol())
        } else {
            write!(f, "[###]")
        }
    }
}
