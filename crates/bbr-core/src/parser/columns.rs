//! Column mapping and row extraction strategies.
//!
//! Basic and advanced tables are read by header text ([`NamedColumns`]);
//! salary tables are read by cell position (see `salary::SalaryColumns`).
//! Both plug into [`extract_rows`].

use scraper::{ElementRef, Selector};

use crate::types::{fields, Record};

/// A header position kept by [`map_columns`], named after its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub position: usize,
    pub field: String,
}

/// Keep the header positions whose label is in `allowed`.
///
/// Output order follows `header`. An empty intersection yields an empty
/// mapping, so every row extracts zero table fields.
///
/// # Examples
/// ```
/// use bbr_core::parser::map_columns;
///
/// let mapped = map_columns(&["Season", "Age", "Pos", "PTS"], &["Season", "PTS"]);
/// assert_eq!(mapped.len(), 2);
/// assert_eq!(mapped[1].position, 3);
/// assert_eq!(mapped[1].field, "PTS");
/// ```
pub fn map_columns<S: AsRef<str>>(header: &[S], allowed: &[&str]) -> Vec<ColumnMapping> {
    header
        .iter()
        .enumerate()
        .filter(|(_, label)| allowed.contains(&label.as_ref()))
        .map(|(position, label)| ColumnMapping {
            position,
            field: label.as_ref().to_string(),
        })
        .collect()
}

/// How one body row becomes one output value.
pub trait RowStrategy {
    type Output;

    fn extract_row(&self, row: ElementRef<'_>) -> Self::Output;
}

/// Header-indexed extraction: every mapped position becomes a field.
#[derive(Debug, Clone)]
pub struct NamedColumns {
    bbr_id: String,
    columns: Vec<ColumnMapping>,
}

impl NamedColumns {
    pub fn new(bbr_id: impl Into<String>, columns: Vec<ColumnMapping>) -> Self {
        Self {
            bbr_id: bbr_id.into(),
            columns,
        }
    }
}

impl RowStrategy for NamedColumns {
    type Output = Record;

    fn extract_row(&self, row: ElementRef<'_>) -> Record {
        let mut record = Record::new();
        record.set(fields::BBR_ID, self.bbr_id.as_str());

        let Ok(cell_selector) = Selector::parse("td, th") else {
            return record;
        };

        for (position, cell) in row.select(&cell_selector).enumerate() {
            if let Some(column) = self.columns.iter().find(|c| c.position == position) {
                record.set(column.field.as_str(), cell_text(&cell));
            }
        }

        record
    }
}

/// Apply `strategy` to every `tbody tr` of `table`, in document order.
pub fn extract_rows<S: RowStrategy>(table: ElementRef<'_>, strategy: &S) -> Vec<S::Output> {
    match Selector::parse("tbody tr") {
        Ok(row_selector) => table
            .select(&row_selector)
            .map(|row| strategy.extract_row(row))
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Trimmed text of every `thead th` in `table`.
pub fn header_labels(table: ElementRef<'_>) -> Vec<String> {
    match Selector::parse("thead th") {
        Ok(selector) => table
            .select(&selector)
            .map(|th| cell_text(&th).trim().to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Concatenated text content of an element.
pub(crate) fn cell_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
