//! Error types for the season extractor
//!
//! Only mandatory inputs produce errors. Missing optional page fragments
//! are reported as `None` or an empty `Vec` by the parsers instead.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for extractor operations
#[derive(Error, Debug)]
pub enum BbrError {
    /// A required file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A CSV file could not be parsed or written
    #[error("CSV error on {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// The TOML configuration file is malformed
    #[error("failed to parse config file {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A roster profile link has no player segment
    #[error("Invalid player link: {0}")]
    InvalidLink(String),

    /// The requested BBR ID is not in the roster
    #[error("Player not found in roster: {0}")]
    PlayerNotFound(String),
}

impl BbrError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for extractor operations
pub type Result<T> = std::result::Result<T, BbrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_link() {
        let error = BbrError::InvalidLink("/players/".to_string());
        assert_eq!(error.to_string(), "Invalid player link: /players/");
    }

    #[test]
    fn test_error_display_player_not_found() {
        let error = BbrError::PlayerNotFound("jordami01".to_string());
        assert_eq!(error.to_string(), "Player not found in roster: jordami01");
    }

    #[test]
    fn test_error_display_io_includes_path() {
        let error = BbrError::io(
            "output/player-pages/jordami01.html",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let display = error.to_string();
        assert!(display.contains("output/player-pages/jordami01.html"));
        assert!(display.contains("missing"));
    }
}
