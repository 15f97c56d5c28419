//! Move records: the entries of the undo log.
//!
//! Each committed command appends exactly one `MoveRecord` holding
//! everything needed to reverse it without searching: the moved cards in
//! order, the positions they came from and went to, whether a tableau
//! card was flipped as a side effect, the waste cursor before the move,
//! and the exact score delta that was applied. Recycles additionally
//! snapshot the whole waste so the pre-recycle order can be restored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// The moved cards of one record.
///
/// Inline capacity of three covers every move except long tableau runs
/// (a single card for most moves, up to three for a draw).
pub type MovedCards = SmallVec<[Card; 3]>;

/// What a recorded move did, with the data needed to reverse it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Cards turned from stock to waste, in drawn order.
    DrawStock { cards: MovedCards },

    /// Waste recycled into stock; `waste_before` is the exact waste
    /// content (order and face flags) prior to the recycle.
    RecycleWaste { waste_before: Vec<Card> },

    /// The active waste card placed on a tableau column.
    WasteToTableau {
        card: Card,
        waste_position: usize,
        column: usize,
    },

    /// The active waste card placed on a foundation.
    WasteToFoundation {
        card: Card,
        waste_position: usize,
        foundation: usize,
    },

    /// A column's top card placed on a foundation.
    TableauToFoundation {
        card: Card,
        column: usize,
        foundation: usize,
        flipped: bool,
    },

    /// A face-up run moved between columns; `start` is the index the run
    /// occupied in the source column.
    TableauToTableau {
        cards: MovedCards,
        from: usize,
        to: usize,
        start: usize,
        flipped: bool,
    },

    /// A foundation's top card moved down to a tableau column.
    FoundationToTableau {
        card: Card,
        foundation: usize,
        column: usize,
    },
}

impl MoveKind {
    /// Short name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DrawStock { .. } => "DrawStock",
            Self::RecycleWaste { .. } => "RecycleWaste",
            Self::WasteToTableau { .. } => "WasteToTableau",
            Self::WasteToFoundation { .. } => "WasteToFoundation",
            Self::TableauToFoundation { .. } => "TableauToFoundation",
            Self::TableauToTableau { .. } => "TableauToTableau",
            Self::FoundationToTableau { .. } => "FoundationToTableau",
        }
    }
}

/// One entry of the undo log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move and its reversal data.
    pub kind: MoveKind,

    /// Waste cursor before the move, restored verbatim on undo.
    pub waste_cursor_before: Option<usize>,

    /// The score delta that was applied, already multiplier-adjusted.
    /// Undo subtracts exactly this value.
    pub score_delta: i32,
}

impl MoveRecord {
    /// Create a record.
    #[must_use]
    pub fn new(kind: MoveKind, waste_cursor_before: Option<usize>, score_delta: i32) -> Self {
        Self {
            kind,
            waste_cursor_before,
            score_delta,
        }
    }
}
