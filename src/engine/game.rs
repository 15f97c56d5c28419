//! The game engine: authoritative state and all move commands.
//!
//! `GameEngine` owns the four pile groups (stock, waste, foundations,
//! tableau), the score, the redeal counter, and the undo log. Commands
//! validate fully before mutating, so every command either commits (state
//! change plus history record) or returns an error with the state
//! untouched.
//!
//! The engine is single-threaded and does no internal locking; a host
//! with concurrent input (such as a UI event queue) must serialize calls.

use std::fmt;
use std::time::{Duration, Instant};

use im::Vector;
use rand::Rng;

use super::history::{MoveKind, MoveRecord, MovedCards};
use super::rules;
use crate::core::card::Card;
use crate::core::deck::Deck;
use crate::core::options::GameOptions;
use crate::core::rng::GameRng;

/// Number of tableau columns on the board.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Why a command was rejected. All variants are recoverable: the engine
/// state is unchanged and play continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Placement rule violated, empty source, or out-of-range index.
    InvalidMove,
    /// Stock recycle attempted after exhausting the configured limit.
    RedealLimitReached { limit: u32 },
    /// Foundation-to-tableau attempted while the option is off.
    FeatureDisabled,
    /// Undo attempted on an empty history.
    NothingToUndo,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMove => write!(f, "move is not legal in the current position"),
            Self::RedealLimitReached { limit } => {
                write!(f, "maximum redeals ({limit}) reached")
            }
            Self::FeatureDisabled => write!(f, "foundation to tableau moves are disabled"),
            Self::NothingToUndo => write!(f, "no moves to undo"),
        }
    }
}

impl std::error::Error for MoveError {}

/// What a successful `draw_from_stock` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Cards were turned from stock to waste.
    Drew { count: usize },
    /// The stock was empty; the waste was recycled into it.
    Recycled { redeals: u32 },
}

/// A Klondike solitaire game in progress.
///
/// Created once per game with a freshly shuffled deal, mutated only
/// through its move commands, and discarded when a new game starts.
#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    pub(super) options: GameOptions,
    pub(super) seed: u64,
    pub(super) stock: Vec<Card>,
    pub(super) waste: Vec<Card>,
    pub(super) foundations: [Vec<Card>; FOUNDATION_PILES],
    pub(super) tableau: [Vec<Card>; TABLEAU_COLUMNS],
    pub(super) waste_cursor: Option<usize>,
    pub(super) score: i32,
    pub(super) redeals: u32,
    pub(super) history: Vector<MoveRecord>,
    pub(super) started_at: Instant,
}

impl GameEngine {
    /// Deal a new game from thread entropy.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self::with_seed(options, rand::thread_rng().gen())
    }

    /// Deal a new game from a seed; the same seed deals the same board.
    #[must_use]
    pub fn with_seed(options: GameOptions, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut engine = Self {
            options,
            seed,
            stock: Vec::with_capacity(24),
            waste: Vec::new(),
            foundations: std::array::from_fn(|_| Vec::new()),
            tableau: std::array::from_fn(|_| Vec::new()),
            waste_cursor: None,
            score: 0,
            redeals: 0,
            history: Vector::new(),
            started_at: Instant::now(),
        };

        for col in 0..TABLEAU_COLUMNS {
            for row in 0..=col {
                let mut card = deck.draw().expect("a fresh deck covers the deal");
                card.face_up = row == col;
                engine.tableau[col].push(card);
            }
        }

        while let Some(card) = deck.draw() {
            engine.stock.push(card);
        }

        tracing::debug!(seed, options = ?engine.options, "dealt new game");
        engine
    }

    // === Commands ===

    /// Turn up to `draw_count` cards from the stock onto the waste, or
    /// recycle the waste into the stock when the stock is empty.
    ///
    /// A partial draw (fewer cards than `draw_count` remaining) succeeds.
    /// Recycling fails with `RedealLimitReached` once the configured limit
    /// is exhausted, and costs 100 points.
    pub fn draw_from_stock(&mut self) -> Result<DrawOutcome, MoveError> {
        if self.stock.is_empty() {
            return self.recycle_waste();
        }

        let cursor_before = self.waste_cursor;
        let mut cards = MovedCards::new();
        for _ in 0..self.options.draw_count.count() {
            let Some(mut card) = self.stock.pop() else {
                break;
            };
            card.face_up = true;
            self.waste.push(card);
            cards.push(card);
        }

        let count = cards.len();
        self.waste_cursor = self.waste.len().checked_sub(1);
        self.push_record(MoveKind::DrawStock { cards }, cursor_before, 0);
        Ok(DrawOutcome::Drew { count })
    }

    fn recycle_waste(&mut self) -> Result<DrawOutcome, MoveError> {
        if let Some(limit) = self.options.max_stock_redeals {
            if self.redeals >= limit {
                return Err(MoveError::RedealLimitReached { limit });
            }
        }
        if self.waste.is_empty() {
            return Err(MoveError::InvalidMove);
        }

        let cursor_before = self.waste_cursor;
        let waste_before = std::mem::take(&mut self.waste);

        let mut returned = waste_before.clone();
        if self.options.reverse_waste_on_recycle {
            returned.reverse();
        }
        for mut card in returned {
            card.face_up = false;
            self.stock.push(card);
        }

        self.waste_cursor = None;
        self.redeals += 1;
        let delta = self.scaled_delta(-100);
        self.score += delta;
        self.push_record(MoveKind::RecycleWaste { waste_before }, cursor_before, delta);

        tracing::debug!(redeals = self.redeals, "waste recycled into stock");
        Ok(DrawOutcome::Recycled {
            redeals: self.redeals,
        })
    }

    /// Move the active waste card onto a tableau column. Scores +5.
    pub fn move_waste_to_tableau(&mut self, column: usize) -> Result<(), MoveError> {
        let cursor = match self.waste_cursor {
            Some(i) if i < self.waste.len() => i,
            _ => return Err(MoveError::InvalidMove),
        };
        if column >= TABLEAU_COLUMNS {
            return Err(MoveError::InvalidMove);
        }
        let card = self.waste[cursor];
        if !rules::can_stack_on_tableau(
            self.tableau[column].last(),
            card,
            self.options.allow_any_card_in_empty_tableau,
        ) {
            return Err(MoveError::InvalidMove);
        }

        let cursor_before = self.waste_cursor;
        let card = self.waste.remove(cursor);
        self.tableau[column].push(card);
        self.waste_cursor = self.waste.len().checked_sub(1);

        let delta = self.scaled_delta(5);
        self.score += delta;
        self.push_record(
            MoveKind::WasteToTableau {
                card,
                waste_position: cursor,
                column,
            },
            cursor_before,
            delta,
        );
        Ok(())
    }

    /// Move the active waste card onto a foundation. Scores +10.
    pub fn move_waste_to_foundation(&mut self, foundation: usize) -> Result<(), MoveError> {
        let cursor = match self.waste_cursor {
            Some(i) if i < self.waste.len() => i,
            _ => return Err(MoveError::InvalidMove),
        };
        if foundation >= FOUNDATION_PILES {
            return Err(MoveError::InvalidMove);
        }
        let card = self.waste[cursor];
        if !rules::can_stack_on_foundation(self.foundations[foundation].last(), card) {
            return Err(MoveError::InvalidMove);
        }

        let cursor_before = self.waste_cursor;
        let card = self.waste.remove(cursor);
        self.foundations[foundation].push(card);
        self.waste_cursor = self.waste.len().checked_sub(1);

        let delta = self.scaled_delta(10);
        self.score += delta;
        self.push_record(
            MoveKind::WasteToFoundation {
                card,
                waste_position: cursor,
                foundation,
            },
            cursor_before,
            delta,
        );
        Ok(())
    }

    /// Move a column's top card onto a foundation. Scores +10, plus +5
    /// when the move turns the next source card face-up.
    pub fn move_tableau_to_foundation(
        &mut self,
        column: usize,
        foundation: usize,
    ) -> Result<(), MoveError> {
        if column >= TABLEAU_COLUMNS || foundation >= FOUNDATION_PILES {
            return Err(MoveError::InvalidMove);
        }
        let card = *self.tableau[column].last().ok_or(MoveError::InvalidMove)?;
        if !card.face_up {
            return Err(MoveError::InvalidMove);
        }
        if !rules::can_stack_on_foundation(self.foundations[foundation].last(), card) {
            return Err(MoveError::InvalidMove);
        }

        let cursor_before = self.waste_cursor;
        self.tableau[column].pop();
        self.foundations[foundation].push(card);
        let flipped = self.flip_exposed_card(column);

        let delta = self.scaled_delta(if flipped { 15 } else { 10 });
        self.score += delta;
        self.push_record(
            MoveKind::TableauToFoundation {
                card,
                column,
                foundation,
                flipped,
            },
            cursor_before,
            delta,
        );
        Ok(())
    }

    /// Move the face-up run starting at `start` from one column to
    /// another. Scores +5 only when the move turns a source card face-up.
    pub fn move_tableau_to_tableau(
        &mut self,
        from: usize,
        to: usize,
        start: usize,
    ) -> Result<(), MoveError> {
        if from >= TABLEAU_COLUMNS || to >= TABLEAU_COLUMNS || from == to {
            return Err(MoveError::InvalidMove);
        }
        let source = &self.tableau[from];
        if start >= source.len() || source[start..].iter().any(|card| !card.face_up) {
            return Err(MoveError::InvalidMove);
        }
        if !rules::can_stack_on_tableau(
            self.tableau[to].last(),
            source[start],
            self.options.allow_any_card_in_empty_tableau,
        ) {
            return Err(MoveError::InvalidMove);
        }

        let cursor_before = self.waste_cursor;
        let moved = self.tableau[from].split_off(start);
        let cards = MovedCards::from_slice(&moved);
        self.tableau[to].extend(moved);
        let flipped = self.flip_exposed_card(from);

        let delta = if flipped { self.scaled_delta(5) } else { 0 };
        self.score += delta;
        self.push_record(
            MoveKind::TableauToTableau {
                cards,
                from,
                to,
                start,
                flipped,
            },
            cursor_before,
            delta,
        );
        Ok(())
    }

    /// Move a foundation's top card down onto a tableau column. Costs 15
    /// points and requires the `allow_foundation_to_tableau` option.
    pub fn move_foundation_to_tableau(
        &mut self,
        foundation: usize,
        column: usize,
    ) -> Result<(), MoveError> {
        if !self.options.allow_foundation_to_tableau {
            return Err(MoveError::FeatureDisabled);
        }
        if foundation >= FOUNDATION_PILES || column >= TABLEAU_COLUMNS {
            return Err(MoveError::InvalidMove);
        }
        let card = *self.foundations[foundation]
            .last()
            .ok_or(MoveError::InvalidMove)?;
        if !rules::can_stack_on_tableau(
            self.tableau[column].last(),
            card,
            self.options.allow_any_card_in_empty_tableau,
        ) {
            return Err(MoveError::InvalidMove);
        }

        let cursor_before = self.waste_cursor;
        self.foundations[foundation].pop();
        self.tableau[column].push(card);

        let delta = self.scaled_delta(-15);
        self.score += delta;
        self.push_record(
            MoveKind::FoundationToTableau {
                card,
                foundation,
                column,
            },
            cursor_before,
            delta,
        );
        Ok(())
    }

    /// Exactly reverse the most recent move.
    ///
    /// Moved cards return to their recorded positions, side-effect flips
    /// are turned back down, the waste cursor and redeal counter are
    /// restored, and the recorded score delta is subtracted. Undo is not
    /// itself recorded; there is no redo.
    pub fn undo_last_move(&mut self) -> Result<(), MoveError> {
        let record = self.history.pop_back().ok_or(MoveError::NothingToUndo)?;
        let MoveRecord {
            kind,
            waste_cursor_before,
            score_delta,
        } = record;
        let name = kind.name();

        self.score -= score_delta;
        match kind {
            MoveKind::DrawStock { cards } => {
                for _ in 0..cards.len() {
                    let mut card = self.waste.pop().expect("draw record implies waste cards");
                    card.face_up = false;
                    self.stock.push(card);
                }
            }
            MoveKind::RecycleWaste { waste_before } => {
                let kept = self.stock.len() - waste_before.len();
                self.stock.truncate(kept);
                self.waste = waste_before;
                self.redeals -= 1;
            }
            MoveKind::WasteToTableau {
                waste_position,
                column,
                ..
            } => {
                let card = self.tableau[column]
                    .pop()
                    .expect("record implies a placed card");
                self.waste.insert(waste_position, card);
            }
            MoveKind::WasteToFoundation {
                waste_position,
                foundation,
                ..
            } => {
                let card = self.foundations[foundation]
                    .pop()
                    .expect("record implies a placed card");
                self.waste.insert(waste_position, card);
            }
            MoveKind::TableauToFoundation {
                column,
                foundation,
                flipped,
                ..
            } => {
                if flipped {
                    if let Some(top) = self.tableau[column].last_mut() {
                        top.face_up = false;
                    }
                }
                let card = self.foundations[foundation]
                    .pop()
                    .expect("record implies a placed card");
                self.tableau[column].push(card);
            }
            MoveKind::TableauToTableau {
                cards,
                from,
                to,
                flipped,
                ..
            } => {
                if flipped {
                    if let Some(top) = self.tableau[from].last_mut() {
                        top.face_up = false;
                    }
                }
                let split = self.tableau[to].len() - cards.len();
                let run = self.tableau[to].split_off(split);
                self.tableau[from].extend(run);
            }
            MoveKind::FoundationToTableau {
                foundation, column, ..
            } => {
                let card = self.tableau[column]
                    .pop()
                    .expect("record implies a placed card");
                self.foundations[foundation].push(card);
            }
        }
        self.waste_cursor = waste_cursor_before;

        tracing::trace!(kind = name, "move undone");
        Ok(())
    }

    // === Placement queries ===

    /// Whether `card` could be placed on the given tableau column.
    #[must_use]
    pub fn can_place_on_tableau(&self, card: Card, column: usize) -> bool {
        column < TABLEAU_COLUMNS
            && rules::can_stack_on_tableau(
                self.tableau[column].last(),
                card,
                self.options.allow_any_card_in_empty_tableau,
            )
    }

    /// Whether `card` could be placed on the given foundation.
    #[must_use]
    pub fn can_place_on_foundation(&self, card: Card, foundation: usize) -> bool {
        foundation < FOUNDATION_PILES
            && rules::can_stack_on_foundation(self.foundations[foundation].last(), card)
    }

    // === State queries ===

    /// The rule variants this game was created with.
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// The deal seed; `with_seed` replays the same board.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// How many times the waste has been recycled.
    #[must_use]
    pub fn redeals(&self) -> u32 {
        self.redeals
    }

    /// Cards remaining in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// The stock contents, bottom to top.
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// Cards in the waste.
    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// The waste contents, oldest first.
    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// Index of the active (playable) waste card, if any.
    #[must_use]
    pub fn waste_cursor(&self) -> Option<usize> {
        self.waste_cursor
    }

    /// The active waste card, if any.
    #[must_use]
    pub fn active_waste_card(&self) -> Option<Card> {
        let cursor = self.waste_cursor?;
        self.waste.get(cursor).copied()
    }

    /// The up-to-`draw_count` most recently drawn waste cards, for fanned
    /// rendering. The last card of the slice is the active one.
    #[must_use]
    pub fn visible_waste(&self) -> &[Card] {
        let shown = self.waste.len().min(self.options.draw_count.count());
        &self.waste[self.waste.len() - shown..]
    }

    /// All seven tableau columns.
    #[must_use]
    pub fn tableau(&self) -> &[Vec<Card>; TABLEAU_COLUMNS] {
        &self.tableau
    }

    /// One tableau column, bottom to top. `None` if out of range.
    #[must_use]
    pub fn tableau_column(&self, column: usize) -> Option<&[Card]> {
        self.tableau.get(column).map(Vec::as_slice)
    }

    /// All four foundations.
    #[must_use]
    pub fn foundations(&self) -> &[Vec<Card>; FOUNDATION_PILES] {
        &self.foundations
    }

    /// One foundation, Ace upward. `None` if out of range.
    #[must_use]
    pub fn foundation(&self, foundation: usize) -> Option<&[Card]> {
        self.foundations.get(foundation).map(Vec::as_slice)
    }

    /// Time since the game was dealt.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Number of moves committed (and undoable).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Snapshot of the move history, oldest first. O(1) via persistent
    /// structure sharing.
    #[must_use]
    pub fn history(&self) -> Vector<MoveRecord> {
        self.history.clone()
    }

    /// The most recent committed move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    // === Internals ===

    /// Turn the new top card of a column face-up if it is face-down.
    /// Returns whether a flip happened.
    fn flip_exposed_card(&mut self, column: usize) -> bool {
        match self.tableau[column].last_mut() {
            Some(top) if !top.face_up => {
                top.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Scale a raw point value by the difficulty multiplier. Zero when
    /// scoring is disabled.
    fn scaled_delta(&self, points: i32) -> i32 {
        if !self.options.enable_scoring {
            return 0;
        }
        (f64::from(points) * self.options.score_multiplier()).round() as i32
    }

    fn push_record(&mut self, kind: MoveKind, waste_cursor_before: Option<usize>, delta: i32) {
        self.history
            .push_back(MoveRecord::new(kind, waste_cursor_before, delta));
    }
}

/// An engine with no cards anywhere, for hand-built test positions.
#[cfg(test)]
pub(crate) fn empty_engine(options: GameOptions) -> GameEngine {
    GameEngine {
        options,
        seed: 0,
        stock: Vec::new(),
        waste: Vec::new(),
        foundations: std::array::from_fn(|_| Vec::new()),
        tableau: std::array::from_fn(|_| Vec::new()),
        waste_cursor: None,
        score: 0,
        redeals: 0,
        history: Vector::new(),
        started_at: Instant::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};
    use crate::core::options::DrawCount;

    fn card(suit: Suit, rank: u8, face_up: bool) -> Card {
        Card {
            suit,
            rank: Rank::new(rank).unwrap(),
            face_up,
        }
    }

    fn push_waste(engine: &mut GameEngine, c: Card) {
        engine.waste.push(c);
        engine.waste_cursor = Some(engine.waste.len() - 1);
    }

    #[test]
    fn test_draw_turns_card_face_up_and_sets_cursor() {
        let mut game = empty_engine(GameOptions::new());
        game.stock.push(card(Suit::Spades, 7, false));

        let outcome = game.draw_from_stock().unwrap();

        assert_eq!(outcome, DrawOutcome::Drew { count: 1 });
        assert_eq!(game.stock_len(), 0);
        assert_eq!(game.waste_len(), 1);
        assert!(game.waste()[0].face_up);
        assert_eq!(game.waste_cursor(), Some(0));
        assert_eq!(game.score(), 0);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_draw_three_is_partial_when_stock_is_low() {
        let mut game = empty_engine(GameOptions::new().with_draw_count(DrawCount::Three));
        game.stock.push(card(Suit::Spades, 12, false));
        game.stock.push(card(Suit::Spades, 13, false));

        let outcome = game.draw_from_stock().unwrap();

        assert_eq!(outcome, DrawOutcome::Drew { count: 2 });
        assert_eq!(game.stock_len(), 0);
        assert_eq!(game.waste_len(), 2);
        assert_eq!(game.waste_cursor(), Some(1));
        // Top of stock is drawn first.
        assert_eq!(game.waste()[0].rank, Rank::KING);
    }

    #[test]
    fn test_recycle_keeps_order_and_turns_cards_down() {
        let mut game = empty_engine(GameOptions::new());
        game.waste.push(card(Suit::Hearts, 2, true));
        game.waste.push(card(Suit::Clubs, 9, true));
        game.waste_cursor = Some(1);

        let outcome = game.draw_from_stock().unwrap();

        assert_eq!(outcome, DrawOutcome::Recycled { redeals: 1 });
        assert_eq!(game.waste_len(), 0);
        assert_eq!(game.waste_cursor(), None);
        assert_eq!(game.redeals(), 1);
        assert_eq!(game.score(), -100);
        assert!(game.stock().iter().all(|c| !c.face_up));
        // Same relative order: oldest waste card stays at the bottom.
        assert_eq!(game.stock()[0].rank, Rank::new(2).unwrap());
        assert_eq!(game.stock()[1].rank, Rank::new(9).unwrap());
    }

    #[test]
    fn test_recycle_reversed_variant_flips_order() {
        let mut game = empty_engine(GameOptions::new().with_reversed_recycle());
        game.waste.push(card(Suit::Hearts, 2, true));
        game.waste.push(card(Suit::Clubs, 9, true));
        game.waste_cursor = Some(1);

        game.draw_from_stock().unwrap();

        assert_eq!(game.stock()[0].rank, Rank::new(9).unwrap());
        assert_eq!(game.stock()[1].rank, Rank::new(2).unwrap());
    }

    #[test]
    fn test_recycle_respects_redeal_limit() {
        let mut game = empty_engine(GameOptions::new().with_max_stock_redeals(0));
        game.waste.push(card(Suit::Hearts, 2, true));
        game.waste_cursor = Some(0);

        let err = game.draw_from_stock().unwrap_err();

        assert_eq!(err, MoveError::RedealLimitReached { limit: 0 });
        assert_eq!(game.waste_len(), 1);
        assert_eq!(game.redeals(), 0);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_draw_with_no_stock_and_no_waste_is_invalid() {
        let mut game = empty_engine(GameOptions::new());
        assert_eq!(game.draw_from_stock().unwrap_err(), MoveError::InvalidMove);
    }

    #[test]
    fn test_undo_partial_draw_restores_stock() {
        let mut game = empty_engine(GameOptions::new().with_draw_count(DrawCount::Three));
        game.stock.push(card(Suit::Spades, 12, false));
        game.stock.push(card(Suit::Spades, 13, false));
        let before = game.clone();

        game.draw_from_stock().unwrap();
        assert_eq!(game.waste_len(), 2);

        game.undo_last_move().unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_waste_to_foundation_establishes_suit_with_ace() {
        let mut game = empty_engine(GameOptions::new());
        push_waste(&mut game, card(Suit::Clubs, 1, true));

        game.move_waste_to_foundation(0).unwrap();
        assert_eq!(game.foundation(0).unwrap().len(), 1);
        assert_eq!(game.score(), 10);
        assert_eq!(game.waste_cursor(), None);

        // Same suit continues the run; another suit is rejected.
        push_waste(&mut game, card(Suit::Clubs, 2, true));
        game.move_waste_to_foundation(0).unwrap();
        assert_eq!(game.foundation(0).unwrap().len(), 2);

        push_waste(&mut game, card(Suit::Spades, 3, true));
        assert_eq!(
            game.move_waste_to_foundation(0).unwrap_err(),
            MoveError::InvalidMove
        );
    }

    #[test]
    fn test_waste_moves_require_an_active_card() {
        let mut game = empty_engine(GameOptions::new());

        assert_eq!(
            game.move_waste_to_tableau(0).unwrap_err(),
            MoveError::InvalidMove
        );
        assert_eq!(
            game.move_waste_to_foundation(0).unwrap_err(),
            MoveError::InvalidMove
        );
    }

    #[test]
    fn test_waste_to_tableau_scores_and_advances_cursor() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[3].push(card(Suit::Spades, 9, true));
        push_waste(&mut game, card(Suit::Diamonds, 4, true));
        push_waste(&mut game, card(Suit::Hearts, 8, true));

        game.move_waste_to_tableau(3).unwrap();

        assert_eq!(game.tableau[3].len(), 2);
        assert_eq!(game.score(), 5);
        // Cursor slides down to the newly exposed waste card.
        assert_eq!(game.waste_cursor(), Some(0));
        assert_eq!(
            game.active_waste_card().unwrap().rank,
            Rank::new(4).unwrap()
        );
    }

    #[test]
    fn test_tableau_to_foundation_flip_bonus() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[0].push(card(Suit::Clubs, 5, false));
        game.tableau[0].push(card(Suit::Hearts, 1, true));

        game.move_tableau_to_foundation(0, 2).unwrap();

        assert_eq!(game.foundation(2).unwrap().len(), 1);
        assert!(game.tableau[0][0].face_up);
        assert_eq!(game.score(), 15);
        match &game.last_move().unwrap().kind {
            MoveKind::TableauToFoundation { flipped, .. } => assert!(flipped),
            other => panic!("unexpected record {other:?}"),
        }
    }

    #[test]
    fn test_tableau_to_foundation_without_flip_scores_ten() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[0].push(card(Suit::Hearts, 1, true));

        game.move_tableau_to_foundation(0, 0).unwrap();
        assert_eq!(game.score(), 10);
    }

    #[test]
    fn test_tableau_to_foundation_rejects_face_down_top() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[0].push(card(Suit::Diamonds, 1, false));

        assert_eq!(
            game.move_tableau_to_foundation(0, 0).unwrap_err(),
            MoveError::InvalidMove
        );
        assert!(game.foundation(0).unwrap().is_empty());
    }

    #[test]
    fn test_tableau_run_moves_as_a_unit() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[0].push(card(Suit::Spades, 9, false));
        game.tableau[0].push(card(Suit::Hearts, 8, true));
        game.tableau[0].push(card(Suit::Clubs, 7, true));
        game.tableau[1].push(card(Suit::Clubs, 9, true));

        game.move_tableau_to_tableau(0, 1, 1).unwrap();

        assert_eq!(game.tableau[0].len(), 1);
        assert!(game.tableau[0][0].face_up);
        assert_eq!(game.tableau[1].len(), 3);
        assert_eq!(game.tableau[1][1].rank, Rank::new(8).unwrap());
        assert_eq!(game.tableau[1][2].rank, Rank::new(7).unwrap());
        assert_eq!(game.score(), 5); // flip bonus only
    }

    #[test]
    fn test_tableau_run_starting_face_down_is_rejected() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[0].push(card(Suit::Spades, 9, false));
        game.tableau[0].push(card(Suit::Hearts, 8, true));
        game.tableau[1].push(card(Suit::Diamonds, 10, true));

        assert_eq!(
            game.move_tableau_to_tableau(0, 1, 0).unwrap_err(),
            MoveError::InvalidMove
        );
    }

    #[test]
    fn test_tableau_move_without_flip_scores_nothing() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[0].push(card(Suit::Hearts, 5, true));
        game.tableau[1].push(card(Suit::Spades, 6, true));

        game.move_tableau_to_tableau(0, 1, 0).unwrap();
        assert_eq!(game.score(), 0);
        assert!(game.tableau[0].is_empty());
    }

    #[test]
    fn test_empty_column_takes_king_only_unless_option_set() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[0].push(card(Suit::Hearts, 5, true));

        assert_eq!(
            game.move_tableau_to_tableau(0, 1, 0).unwrap_err(),
            MoveError::InvalidMove
        );

        let mut game = empty_engine(GameOptions::new().with_any_card_in_empty_tableau());
        game.tableau[0].push(card(Suit::Hearts, 5, true));

        game.move_tableau_to_tableau(0, 1, 0).unwrap();
        assert_eq!(game.tableau[1].len(), 1);
    }

    #[test]
    fn test_same_column_move_is_rejected() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[2].push(card(Suit::Hearts, 13, true));

        assert_eq!(
            game.move_tableau_to_tableau(2, 2, 0).unwrap_err(),
            MoveError::InvalidMove
        );
    }

    #[test]
    fn test_foundation_to_tableau_requires_option() {
        let mut game = empty_engine(GameOptions::new());
        game.foundations[0].push(card(Suit::Hearts, 1, true));

        assert_eq!(
            game.move_foundation_to_tableau(0, 0).unwrap_err(),
            MoveError::FeatureDisabled
        );
    }

    #[test]
    fn test_foundation_to_tableau_costs_fifteen() {
        let options = GameOptions::new().with_foundation_to_tableau();
        let multiplier = options.score_multiplier();
        let mut game = empty_engine(options);
        game.foundations[0].push(card(Suit::Hearts, 1, true));
        game.foundations[0].push(card(Suit::Hearts, 2, true));
        game.tableau[4].push(card(Suit::Spades, 3, true));

        game.move_foundation_to_tableau(0, 4).unwrap();

        assert_eq!(game.foundation(0).unwrap().len(), 1);
        assert_eq!(game.tableau[4].len(), 2);
        let expected = (-15.0 * multiplier).round() as i32;
        assert_eq!(game.score(), expected);
    }

    #[test]
    fn test_scoring_disabled_means_zero_deltas() {
        let mut game = empty_engine(GameOptions::new().without_scoring());
        push_waste(&mut game, card(Suit::Clubs, 1, true));

        game.move_waste_to_foundation(0).unwrap();
        assert_eq!(game.score(), 0);
        assert_eq!(game.last_move().unwrap().score_delta, 0);
    }

    #[test]
    fn test_draw_three_multiplier_scales_recycle_cost() {
        let mut game = empty_engine(GameOptions::new().with_draw_count(DrawCount::Three));
        game.waste.push(card(Suit::Hearts, 2, true));
        game.waste_cursor = Some(0);

        game.draw_from_stock().unwrap();

        assert_eq!(game.score(), -150);
        assert_eq!(game.last_move().unwrap().score_delta, -150);
    }

    #[test]
    fn test_out_of_range_indices_are_invalid() {
        let mut game = empty_engine(GameOptions::new());
        push_waste(&mut game, card(Suit::Hearts, 13, true));

        assert_eq!(
            game.move_waste_to_tableau(7).unwrap_err(),
            MoveError::InvalidMove
        );
        assert_eq!(
            game.move_waste_to_foundation(4).unwrap_err(),
            MoveError::InvalidMove
        );
        assert_eq!(
            game.move_tableau_to_tableau(0, 1, 5).unwrap_err(),
            MoveError::InvalidMove
        );
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut game = empty_engine(GameOptions::new());
        game.tableau[0].push(card(Suit::Spades, 9, true));
        push_waste(&mut game, card(Suit::Hearts, 4, true));
        let before = game.clone();

        assert!(game.move_waste_to_tableau(0).is_err());
        assert!(game.move_tableau_to_foundation(0, 0).is_err());
        assert!(game.move_foundation_to_tableau(0, 0).is_err());

        assert_eq!(game, before);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::RedealLimitReached { limit: 2 }.to_string(),
            "maximum redeals (2) reached"
        );
        assert_eq!(MoveError::NothingToUndo.to_string(), "no moves to undo");
        assert_eq!(
            MoveError::FeatureDisabled.to_string(),
            "foundation to tableau moves are disabled"
        );
    }
}
