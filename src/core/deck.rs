//! The 52-card deck used to set up a game.
//!
//! A deck is constructed once per game, shuffled once, and fully consumed
//! by the deal: 28 cards into the tableau pyramid, 24 into the stock.

use super::card::{Card, Rank, Suit};
use super::rng::GameRng;

/// A standard 52-card deck.
///
/// Cards start face-down; the top of the deck is the end of the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build an unshuffled deck: all 52 `(suit, rank)` pairs, face-down.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::all() {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Shuffle the deck with the given RNG.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card, or `None` when the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
