//! Placement legality: pure predicates with no side effects.
//!
//! Both predicates look only at the candidate card and the destination
//! pile's top card. The engine wraps them with index handling; UI layers
//! can call the engine's `can_place_*` queries for hinting.

use crate::core::card::{Card, Rank};

/// Whether `card` may be placed on a tableau pile whose top is `top`.
///
/// An empty column takes a King, or any card when the variant allows it.
/// Otherwise the card must be the opposite color and exactly one rank
/// below the face-up top card.
#[must_use]
pub fn can_stack_on_tableau(top: Option<&Card>, card: Card, allow_any_in_empty: bool) -> bool {
    match top {
        None => allow_any_in_empty || card.rank == Rank::KING,
        Some(top_card) => {
            top_card.face_up
                && top_card.color() != card.color()
                && card.rank.value() + 1 == top_card.rank.value()
        }
    }
}

/// Whether `card` may be placed on a foundation pile whose top is `top`.
///
/// An empty foundation takes an Ace; a started foundation takes only the
/// next rank of its established suit.
#[must_use]
pub fn can_stack_on_foundation(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == Rank::ACE,
        Some(top_card) => {
            top_card.suit == card.suit && card.rank.value() == top_card.rank.value() + 1
        }
    }
}
