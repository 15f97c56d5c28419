//! Statistics persistence behind a narrow store interface.
//!
//! The engine never touches storage; hosts pick a `StatsStore` and call
//! `load`/`save` around their game loop. Loading degrades to default
//! (empty) statistics on any failure so a damaged stats file can never
//! take the game down.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::record::GameStatistics;

/// A key-value style store for the aggregate statistics.
pub trait StatsStore {
    /// Load statistics, falling back to defaults on any failure.
    fn load(&self) -> GameStatistics;

    /// Persist statistics.
    fn save(&self, stats: &GameStatistics) -> io::Result<()>;
}

/// Statistics stored as a pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path. Parent directories
    /// are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> GameStatistics {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return GameStatistics::default();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to read stats file");
                return GameStatistics::default();
            }
        };

        match serde_json::from_str(&json) {
            Ok(stats) => stats,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to parse stats file");
                GameStatistics::default()
            }
        }
    }

    fn save(&self, stats: &GameStatistics) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, json)
    }
}

/// Expand a `config_key` into a readable description, e.g.
/// `"King_3Draw_NoFT_0Redeals"` into
/// `"King Only, 3 Card Draw, No Foundation→Tableau, No Redeals"`.
#[must_use]
pub fn format_config_name(config_key: &str) -> String {
    let mut parts = Vec::new();

    for part in config_key.split('_') {
        if part == "Any" {
            parts.push("Any Card in Empty".to_string());
        } else if part == "King" {
            parts.push("King Only".to_string());
        } else if let Some(count) = part.strip_suffix("Draw") {
            parts.push(format!("{count} Card Draw"));
        } else if part == "FT" {
            parts.push("Foundation\u{2192}Tableau".to_string());
        } else if part == "NoFT" {
            parts.push("No Foundation\u{2192}Tableau".to_string());
        } else if let Some(count) = part.strip_suffix("Redeals") {
            match count {
                "-1" => parts.push("Unlimited Redeals".to_string()),
                "0" => parts.push("No Redeals".to_string()),
                n => parts.push(format!("{n} Redeal(s)")),
            }
        }
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::{DrawCount, GameOptions};
    use std::time::Duration;

    fn temp_store(name: &str) -> JsonFileStore {
        let path = std::env::temp_dir().join(format!(
            "klondike-stats-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        JsonFileStore::new(path)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.load(), GameStatistics::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store("round-trip");

        let mut stats = GameStatistics::default();
        stats.record_game(
            &GameOptions::new().with_draw_count(DrawCount::Three),
            true,
            180,
            Duration::from_secs(240),
        );

        store.save(&stats).unwrap();
        assert_eq!(store.load(), stats);

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "not json {").unwrap();

        assert_eq!(store.load(), GameStatistics::default());

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = std::env::temp_dir().join(format!("klondike-stats-dir-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let store = JsonFileStore::new(dir.join("nested").join("stats.json"));

        store.save(&GameStatistics::default()).unwrap();
        assert!(store.path().exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_format_config_name() {
        assert_eq!(
            format_config_name("King_1Draw_NoFT_-1Redeals"),
            "King Only, 1 Card Draw, No Foundation\u{2192}Tableau, Unlimited Redeals"
        );
        assert_eq!(
            format_config_name("Any_3Draw_FT_0Redeals"),
            "Any Card in Empty, 3 Card Draw, Foundation\u{2192}Tableau, No Redeals"
        );
        assert_eq!(
            format_config_name("King_1Draw_NoFT_2Redeals"),
            "King Only, 1 Card Draw, No Foundation\u{2192}Tableau, 2 Redeal(s)"
        );
    }
}
