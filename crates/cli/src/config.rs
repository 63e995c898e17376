//! Environment-backed configuration.

use std::env;
use std::path::PathBuf;

/// Defaults overridable from the environment; command-line flags win
/// over both.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the tab-separated openings file
    pub data_path: PathBuf,

    /// Rows printed by the best-opening tables
    pub top_n: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let data_path = env::var("OPENING_STATS_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("stats-all.txt"));

        let top_n = env::var("OPENING_STATS_TOP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        Config { data_path, top_n }
    }
}
