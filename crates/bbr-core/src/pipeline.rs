//! Per-player extraction pipeline
//!
//! Ties the parsers, the joiner and the CSV files together: read a saved
//! profile page, extract every source table, join them, filter by season
//! and write the player's CSV. A final pass concatenates all player CSVs.

use scraper::Html;
use tracing::{debug, info};

use crate::config::ExtractConfig;
use crate::error::{BbrError, Result};
use crate::io::{load_ratings, read_records, write_records};
use crate::join::{join_seasons, retain_from_year, SeasonSources};
use crate::parser::{
    basic_table_html, extract_awards, extract_contract, extract_high_school, extract_salaries,
    extract_table, locate_commented_fragment, FragmentLocator, TableKind,
};
use crate::types::{JoinedSeason, Player, RatingsIndex};

/// Counts reported after a full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub players: usize,
    pub seasons: usize,
}

/// Main extraction API.
///
/// Holds the run configuration and the ratings index, both read-only for
/// the whole run.
///
/// # Example
/// ```no_run
/// use bbr_core::{ExtractConfig, SeasonExtractor};
/// use bbr_core::io::load_roster;
///
/// # fn example() -> bbr_core::Result<()> {
/// let config = ExtractConfig::default();
/// let roster = load_roster(&config.paths.roster)?;
/// let extractor = SeasonExtractor::from_config(config)?;
/// let summary = extractor.run(&roster)?;
/// println!("{} seasons for {} players", summary.seasons, summary.players);
/// # Ok(())
/// # }
/// ```
pub struct SeasonExtractor {
    config: ExtractConfig,
    ratings: RatingsIndex,
}

impl SeasonExtractor {
    pub fn new(config: ExtractConfig, ratings: RatingsIndex) -> Self {
        Self { config, ratings }
    }

    /// Create an extractor, loading the ratings file named in `config`.
    ///
    /// # Errors
    /// Returns an error if the ratings file is missing or malformed.
    pub fn from_config(config: ExtractConfig) -> Result<Self> {
        let ratings = load_ratings(&config.paths.ratings)?;
        info!(
            players = ratings.player_count(),
            path = %config.paths.ratings.display(),
            "loaded ratings"
        );
        Ok(Self::new(config, ratings))
    }

    /// Extract every source table from one saved profile page.
    pub fn extract_sources(&self, bbr_id: &str, page: &str) -> SeasonSources {
        let document = Html::parse_document(page);

        let basic = basic_table_html(&document);
        let advanced = locate_commented_fragment(&document, FragmentLocator::ADVANCED);
        let awards = locate_commented_fragment(&document, FragmentLocator::AWARDS);
        let salaries = locate_commented_fragment(&document, FragmentLocator::SALARIES);
        let contract = locate_commented_fragment(&document, FragmentLocator::CONTRACT);
        debug!(
            bbr_id,
            basic = basic.is_some(),
            advanced = advanced.is_some(),
            awards = awards.is_some(),
            salaries = salaries.is_some(),
            contract = contract.is_some(),
            "located page fragments"
        );

        let mut salary_rows = extract_salaries(salaries.as_deref());
        if let Some(current) = extract_contract(
            contract.as_deref(),
            &self.config.contract_season,
            &self.config.contract_league,
        ) {
            salary_rows.push(current);
        }

        SeasonSources {
            basic: extract_table(bbr_id, basic.as_deref(), TableKind::Basic),
            advanced: extract_table(bbr_id, advanced.as_deref(), TableKind::Advanced),
            awards: extract_awards(awards.as_deref()),
            salaries: salary_rows,
            high_school: extract_high_school(&document),
        }
    }

    /// Joined and year-filtered seasons for one player's page.
    pub fn player_seasons(&self, player: &Player, page: &str) -> Vec<JoinedSeason> {
        let sources = self.extract_sources(&player.bbr_id, page);
        let joined = join_seasons(player, &sources, &self.ratings);
        retain_from_year(joined, self.config.min_year)
    }

    /// Read a player's saved page and return the filtered seasons.
    ///
    /// # Errors
    /// Returns `BbrError::Io` if the page file is missing.
    pub fn load_player(&self, player: &Player) -> Result<Vec<JoinedSeason>> {
        let path = self.config.paths.page_path(&player.bbr_id);
        let page = std::fs::read_to_string(&path).map_err(|e| BbrError::io(&path, e))?;
        Ok(self.player_seasons(player, &page))
    }

    /// Process one player and write `<seasons_dir>/<bbr_id>.csv`.
    pub fn process_player(&self, player: &Player) -> Result<usize> {
        let seasons = self.load_player(player)?;
        write_records(&self.config.paths.seasons_path(&player.bbr_id), &seasons)?;
        Ok(seasons.len())
    }

    /// Process the whole roster in order, then write the combined file.
    ///
    /// Stops at the first player whose page cannot be read.
    pub fn run(&self, roster: &[Player]) -> Result<RunSummary> {
        let seasons_dir = &self.config.paths.seasons_dir;
        std::fs::create_dir_all(seasons_dir).map_err(|e| BbrError::io(seasons_dir, e))?;

        for (i, player) in roster.iter().enumerate() {
            let progress = format!("{:.1}%", i as f64 / roster.len() as f64 * 100.0);
            info!(
                progress = %progress,
                index = i,
                bbr_id = %player.bbr_id,
                "processing player"
            );
            let count = self.process_player(player)?;
            debug!(bbr_id = %player.bbr_id, seasons = count, "wrote player seasons");
        }

        let seasons = self.combine(roster)?;
        Ok(RunSummary {
            players: roster.len(),
            seasons,
        })
    }

    /// Concatenate every roster player's CSV into the combined file.
    ///
    /// Returns the number of season rows written.
    pub fn combine(&self, roster: &[Player]) -> Result<usize> {
        let mut all = Vec::new();
        for player in roster {
            all.extend(read_records(&self.config.paths.seasons_path(&player.bbr_id))?);
        }

        let combined = &self.config.paths.combined;
        if let Some(parent) = combined.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| BbrError::io(parent, e))?;
        }
        write_records(combined, &all)?;
        info!(rows = all.len(), path = %combined.display(), "wrote combined seasons");
        Ok(all.len())
    }
}
