//! # klondike-engine
//!
//! A Klondike solitaire game engine: authoritative game state, move
//! legality, scoring, and exact undo.
//!
//! ## Design Principles
//!
//! 1. **Values, not references**: piles own their cards. Moving a card is
//!    a value transfer between `Vec`s, so a card is in exactly one pile
//!    at any moment and there is no aliasing to reason about.
//!
//! 2. **Commands in, snapshots out**: every mutation goes through a move
//!    command that fully validates first, so commands either commit
//!    (including their history record) or leave state untouched. UI
//!    layers read the board through read-only queries.
//!
//! 3. **Positional undo**: each `MoveRecord` stores exact positions, run
//!    lengths, and the applied score delta, so reversal is a direct
//!    removal/insertion rather than a search.
//!
//! The engine is single-threaded with no internal locking; hosts with
//! concurrent input must serialize calls to it.
//!
//! ## Modules
//!
//! - `core`: cards, deck, options, deal RNG
//! - `engine`: the game state machine, rules, history, analysis
//! - `stats`: aggregate statistics and their persistence (collaborator)
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{DrawOutcome, GameEngine, GameOptions};
//!
//! let mut game = GameEngine::with_seed(GameOptions::new(), 42);
//! assert_eq!(game.stock_len(), 24);
//!
//! let outcome = game.draw_from_stock().unwrap();
//! assert_eq!(outcome, DrawOutcome::Drew { count: 1 });
//!
//! game.undo_last_move().unwrap();
//! assert_eq!(game.stock_len(), 24);
//! ```

pub mod core;
pub mod engine;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{Card, CardColor, Deck, DrawCount, GameOptions, GameRng, Rank, Suit};

pub use crate::engine::{
    DrawOutcome, GameEngine, MoveError, MoveKind, MoveRecord, FOUNDATION_PILES, TABLEAU_COLUMNS,
};

pub use crate::stats::{format_config_name, GameStatistics, JsonFileStore, StatsStore};
