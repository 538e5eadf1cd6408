//! Run configuration (optional TOML file, every field defaulted).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BbrError, Result};

/// Seasons starting before this year are dropped by default.
pub const DEFAULT_MIN_YEAR: i32 = 1976;

/// Season read from the current contract table. Must be bumped every
/// year the pages are re-downloaded.
pub const DEFAULT_CONTRACT_SEASON: &str = "2018-19";

/// League label attached to contract records.
pub const DEFAULT_CONTRACT_LEAGUE: &str = "NBA";

/// Input and output locations, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Roster CSV with at least `link` and `name`
    pub roster: PathBuf,
    /// Ratings CSV with `Player`, `Season`, `Team`, `PIPM`, `Wins Added`
    pub ratings: PathBuf,
    /// Saved profile pages, one `<bbr_id>.html` per player
    pub pages_dir: PathBuf,
    /// Per-player season CSVs, one `<bbr_id>.csv` per player
    pub seasons_dir: PathBuf,
    /// Combined CSV of every player's seasons
    pub combined: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            roster: PathBuf::from("output/all-players--bbr.csv"),
            ratings: PathBuf::from("input/pipm.csv"),
            pages_dir: PathBuf::from("output/player-pages"),
            seasons_dir: PathBuf::from("output/player-seasons"),
            combined: PathBuf::from("output/player-seasons--all.csv"),
        }
    }
}

impl DataPaths {
    pub fn page_path(&self, bbr_id: &str) -> PathBuf {
        self.pages_dir.join(format!("{bbr_id}.html"))
    }

    pub fn seasons_path(&self, bbr_id: &str) -> PathBuf {
        self.seasons_dir.join(format!("{bbr_id}.csv"))
    }
}

/// Configuration for one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Minimum season start year kept in the output (default: 1976)
    pub min_year: i32,
    /// Season column read from the contract table (default: "2018-19")
    pub contract_season: String,
    /// League attached to the contract record (default: "NBA")
    pub contract_league: String,
    pub paths: DataPaths,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            contract_season: DEFAULT_CONTRACT_SEASON.to_string(),
            contract_league: DEFAULT_CONTRACT_LEAGUE.to_string(),
            paths: DataPaths::default(),
        }
    }
}

impl ExtractConfig {
    /// Load a TOML config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BbrError::io(path, e))?;
        Self::from_toml(&text).map_err(|source| BbrError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
