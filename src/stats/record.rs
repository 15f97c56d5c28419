//! Aggregate play statistics across games.
//!
//! The engine hands over four values at game end (the options, whether
//! the game was won, the final score, and the elapsed time) and this
//! record folds them into lifetime aggregates keyed by the rule-variant
//! `config_key`.

use std::time::{Duration, SystemTime};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::options::GameOptions;

/// Lifetime win/loss/score/time aggregates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStatistics {
    pub total_games_played: u32,
    pub total_games_won: u32,

    /// Best final score among won, scored games.
    pub highest_score: i32,

    /// Shortest duration among won, scored games.
    pub fastest_win: Option<Duration>,

    /// Games played per rule variant, keyed by `config_key`.
    #[serde(default)]
    pub config_usage: FxHashMap<String, u32>,

    /// Variant that produced `highest_score`.
    pub highest_score_config: Option<String>,

    /// Variant that produced `fastest_win`.
    pub fastest_win_config: Option<String>,

    /// When a game was last recorded.
    pub last_played: Option<SystemTime>,
}

impl GameStatistics {
    /// Fold one finished game into the aggregates.
    ///
    /// Score and time records only update for won games played with
    /// scoring enabled; usage counts update regardless.
    pub fn record_game(
        &mut self,
        options: &GameOptions,
        won: bool,
        score: i32,
        duration: Duration,
    ) {
        self.total_games_played += 1;
        if won {
            self.total_games_won += 1;
        }

        let config_key = options.config_key();
        *self.config_usage.entry(config_key.clone()).or_insert(0) += 1;

        if won && options.enable_scoring {
            if score > self.highest_score {
                self.highest_score = score;
                self.highest_score_config = Some(config_key.clone());
            }
            if self.fastest_win.map_or(true, |fastest| duration < fastest) {
                self.fastest_win = Some(duration);
                self.fastest_win_config = Some(config_key);
            }
        }

        self.last_played = Some(SystemTime::now());
    }

    /// Win percentage, 0.0 to 100.0. Zero before any game is recorded.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games_played == 0 {
            return 0.0;
        }
        f64::from(self.total_games_won) / f64::from(self.total_games_played) * 100.0
    }

    /// The most frequently played rule variant, if any.
    #[must_use]
    pub fn most_used_config(&self) -> Option<&str> {
        self.config_usage
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(key, _)| key.as_str())
    }
}
