//! Per-season stat tables (per-game and advanced).

use scraper::{Html, Selector};
use tracing::debug;

use crate::types::SeasonRecord;

use super::columns::{extract_rows, header_labels, map_columns, NamedColumns};

/// Columns kept from the per-game table.
pub const BASIC_COLUMNS: &[&str] = &[
    "Season", "Age", "Tm", "Lg", "G", "MP", "FG%", "FT%", "TRB", "AST", "STL", "BLK", "PTS",
];

/// Columns kept from the advanced table.
pub const ADVANCED_COLUMNS: &[&str] = &["Season", "Tm", "PER", "WS", "WS/48", "BPM", "VORP"];

/// Which stat table is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Basic,
    Advanced,
}

impl TableKind {
    /// Header labels retained for this table.
    pub fn allowed(self) -> &'static [&'static str] {
        match self {
            TableKind::Basic => BASIC_COLUMNS,
            TableKind::Advanced => ADVANCED_COLUMNS,
        }
    }
}

/// Read one record per body row of the first table in `html`.
///
/// Every record carries the player's BBR ID plus the allowed columns
/// found in the header. No HTML, or HTML without a table, yields no rows.
///
/// # Arguments
/// * `bbr_id` - Player ID stamped on every row
/// * `html` - Table markup, if the page has the section
/// * `kind` - Which column allow-list applies
///
/// # Returns
/// * One record per body row, in page order
pub fn extract_table(bbr_id: &str, html: Option<&str>, kind: TableKind) -> Vec<SeasonRecord> {
    let Some(html) = html else {
        return Vec::new();
    };

    let document = Html::parse_fragment(html);
    let Ok(table_selector) = Selector::parse("table") else {
        return Vec::new();
    };
    let Some(table) = document.select(&table_selector).next() else {
        debug!(bbr_id, ?kind, "fragment has no table");
        return Vec::new();
    };

    let header = header_labels(table);
    let strategy = NamedColumns::new(bbr_id, map_columns(&header, kind.allowed()));
    extract_rows(table, &strategy)
}
