//! BBR Seasons Core Library
//!
//! This crate turns saved Basketball-Reference player pages into per-season
//! CSV rows.
//!
//! # Features
//! - Extract per-game, advanced, award, salary and contract tables,
//!   including the ones the site hides inside HTML comments
//! - Join them by season and team, with external impact ratings
//! - Collapse mid-season trades (`TOT` rows) into one row per season
//! - Write one CSV per player plus a combined CSV

pub mod config;
pub mod error;
pub mod io;
pub mod join;
pub mod parser;
pub mod pipeline;
pub mod types;

// Re-export main types for convenience
pub use config::{DataPaths, ExtractConfig};
pub use error::{BbrError, Result};
pub use join::{join_seasons, resolve_multi_team, retain_from_year, SeasonSources};
pub use pipeline::{RunSummary, SeasonExtractor};
pub use types::{
    AwardRecord, JoinedSeason, Player, RatingRecord, RatingsIndex, Record, SalaryRecord,
    SeasonRecord,
};
