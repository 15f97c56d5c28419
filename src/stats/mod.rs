//! Statistics collaborator: aggregate records and their persistence.
//!
//! Out of the engine core proper: the engine supplies `(options, won,
//! final_score, duration)` at game end and this module does the rest.
//!
//! ## Key Types
//!
//! - `GameStatistics`: lifetime aggregates keyed by rule variant
//! - `StatsStore`: narrow load/save interface
//! - `JsonFileStore`: JSON-file implementation with graceful degradation

pub mod record;
pub mod store;

pub use record::GameStatistics;
pub use store::{format_config_name, JsonFileStore, StatsStore};
