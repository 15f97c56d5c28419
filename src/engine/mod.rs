//! The Klondike game engine: state, commands, legality, history, analysis.
//!
//! ## Key Types
//!
//! - `GameEngine`: the one-per-game state machine
//! - `MoveError`: recoverable command failures
//! - `DrawOutcome`: what a stock draw did (drew vs. recycled)
//! - `MoveRecord` / `MoveKind`: undo log entries
//!
//! Commands flow in, read-only snapshots flow out; every mutation goes
//! through a command that records exactly how to reverse itself.

pub mod game;
pub mod history;
pub mod rules;

mod analysis;

pub use game::{DrawOutcome, GameEngine, MoveError, FOUNDATION_PILES, TABLEAU_COLUMNS};
pub use history::{MoveKind, MoveRecord, MovedCards};
