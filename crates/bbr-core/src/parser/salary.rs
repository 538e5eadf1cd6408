//! Salary history and current contract tables.
//!
//! Both are read by cell position rather than by header label.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::types::SalaryRecord;

use super::columns::{cell_text, extract_rows, RowStrategy};

/// Positional layout of a salary history row: the row header is the
/// season, then team, league and salary cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryColumns;

impl RowStrategy for SalaryColumns {
    type Output = SalaryRecord;

    fn extract_row(&self, row: ElementRef<'_>) -> SalaryRecord {
        let header_cell = Selector::parse("th")
            .ok()
            .and_then(|th| row.select(&th).next().map(|c| cell_text(&c)))
            .unwrap_or_default();
        let cells: Vec<String> = match Selector::parse("td") {
            Ok(td) => row.select(&td).take(3).map(|c| cell_text(&c)).collect(),
            Err(_) => Vec::new(),
        };
        let cell = |i: usize| cells.get(i).map(|s| s.trim()).unwrap_or_default();

        SalaryRecord {
            season: header_cell.trim().to_string(),
            team: cell(0).to_string(),
            league: cell(1).to_string(),
            salary: digits_only(cell(2)),
        }
    }
}

/// Parse the salary history fragment, one record per body row.
///
/// # Arguments
/// * `html` - Salary history fragment, if the page has one
///
/// # Returns
/// * Salary records in page order, empty when there is no table
pub fn extract_salaries(html: Option<&str>) -> Vec<SalaryRecord> {
    let Some(html) = html else {
        return Vec::new();
    };

    let document = Html::parse_fragment(html);
    match first_table(&document) {
        Some(table) => extract_rows(table, &SalaryColumns),
        None => Vec::new(),
    }
}

/// Parse the current contract fragment for a single season.
///
/// The salary is taken from the first body row at the column whose header
/// `data-stat` equals `season`; the team is the first body cell. When no
/// header carries `season`, the last body cell is read instead.
///
/// # Arguments
/// * `html` - Contract fragment, if the page has one
/// * `season` - Season label to read, e.g. "2018-19"
/// * `league` - League attached to the record
///
/// # Returns
/// * `Some(SalaryRecord)` when the fragment contains a table
/// * `None` when the fragment is absent or has no table
pub fn extract_contract(html: Option<&str>, season: &str, league: &str) -> Option<SalaryRecord> {
    let document = Html::parse_fragment(html?);
    let table = first_table(&document)?;

    let header_selector = Selector::parse(".thead th").ok()?;
    let cell_selector = Selector::parse("tbody tr td").ok()?;

    let position = table
        .select(&header_selector)
        .find(|th| th.value().attr("data-stat") == Some(season))
        .map(|th| {
            th.prev_siblings()
                .filter(|node| node.value().is_element())
                .count()
        });

    let cells: Vec<String> = table.select(&cell_selector).map(|td| cell_text(&td)).collect();

    // Without a matching header the last body cell is read.
    let money = match position {
        Some(i) => cells.get(i),
        None => {
            warn!(season, "contract table has no column for season, reading last cell");
            cells.last()
        }
    };
    let salary = money.map(|m| digits_only(m)).unwrap_or_default();

    Some(SalaryRecord {
        season: season.to_string(),
        team: cells.first().map(|t| t.trim().to_string()).unwrap_or_default(),
        league: league.to_string(),
        salary,
    })
}

/// Strip every character that is not an ASCII digit.
///
/// # Examples
/// ```
/// use bbr_core::parser::digits_only;
///
/// assert_eq!(digits_only("$33,140,000"), "33140000");
/// assert_eq!(digits_only("< $Minimum"), "");
/// ```
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

fn first_table(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("table").ok()?;
    document.select(&selector).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SALARIES: &str = r#"
        <table id="all_salaries">
            <thead><tr><th>Season</th><th>Team</th><th>Lg</th><th>Salary</th></tr></thead>
            <tbody>
                <tr><th> 1996-97 </th><td>Chicago Bulls</td><td>NBA</td><td>$30,140,000</td></tr>
                <tr><th>1997-98</th><td>Chicago Bulls</td><td>NBA</td><td>$33,140,000</td></tr>
                <tr><th>2001-02</th><td>Washington Wizards</td><td>NBA</td><td>&lt; $Minimum</td></tr>
            </tbody>
        </table>
    "#;

    const CONTRACT: &str = r#"
        <table id="contracts_gsw">
            <thead><tr class="thead">
                <th>Team</th>
                <th data-stat="2018-19">2018-19</th>
                <th data-stat="2019-20">2019-20</th>
            </tr></thead>
            <tbody><tr>
                <td>Golden State Warriors</td>
                <td>$37,457,154</td>
                <td>$40,231,758</td>
            </tr></tbody>
        </table>
    "#;

    #[test]
    fn test_extract_salaries_absent_html() {
        assert!(extract_salaries(None).is_empty());
    }

    #[test]
    fn test_extract_salaries_positional() {
        let salaries = extract_salaries(Some(SALARIES));
        assert_eq!(salaries.len(), 3);
        assert_eq!(salaries[0].season, "1996-97");
        assert_eq!(salaries[0].team, "Chicago Bulls");
        assert_eq!(salaries[0].league, "NBA");
        assert_eq!(salaries[0].salary, "30140000");
        assert_eq!(salaries[2].salary, "");
    }

    #[test]
    fn test_extract_contract_for_season() {
        let contract = extract_contract(Some(CONTRACT), "2018-19", "NBA").unwrap();
        assert_eq!(contract.season, "2018-19");
        assert_eq!(contract.team, "Golden State Warriors");
        assert_eq!(contract.league, "NBA");
        assert_eq!(contract.salary, "37457154");

        let next = extract_contract(Some(CONTRACT), "2019-20", "NBA").unwrap();
        assert_eq!(next.salary, "40231758");
    }

    #[test]
    fn test_extract_contract_unknown_season_reads_last_cell() {
        let contract = extract_contract(Some(CONTRACT), "2030-31", "NBA").unwrap();
        assert_eq!(contract.season, "2030-31");
        assert_eq!(contract.salary, "40231758");
        assert_eq!(contract.team, "Golden State Warriors");

        let html = r#"
            <table id="contracts_chi">
                <thead><tr class="thead"><th>Team</th><th data-stat="2019-20">2019-20</th></tr></thead>
                <tbody><tr><td>Chicago Bulls</td><td>$40,000</td></tr></tbody>
            </table>
        "#;
        let contract = extract_contract(Some(html), "2018-19", "NBA").unwrap();
        assert_eq!(contract.salary, "40000");
    }

    #[test]
    fn test_extract_contract_without_body_cells() {
        let html = r#"<table><thead><tr class="thead"><th>Team</th></tr></thead><tbody></tbody></table>"#;
        let contract = extract_contract(Some(html), "2018-19", "NBA").unwrap();
        assert_eq!(contract.salary, "");
        assert_eq!(contract.team, "");
    }

    #[test]
    fn test_extract_contract_without_table() {
        assert!(extract_contract(None, "2018-19", "NBA").is_none());
        assert!(extract_contract(Some("<p>none</p>"), "2018-19", "NBA").is_none());
    }

    proptest! {
        #[test]
        fn prop_digits_only_output_is_numeric(text in ".*") {
            let stripped = digits_only(&text);
            prop_assert!(stripped.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
