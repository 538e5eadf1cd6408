//! All-League leaderboard awards.

use scraper::{ElementRef, Html, Node, Selector};

use crate::types::AwardRecord;

use super::columns::cell_text;

/// Award labels containing any of these are dropped.
pub const EXCLUDED_AWARDS: &[&str] = &["Defensive", "Rookie"];

/// Parse the All-League leaderboard fragment.
///
/// Each cell's link text is the season; the rest of the cell is the award
/// label. Defensive and rookie selections are filtered out (case-sensitive).
///
/// # Arguments
/// * `html` - Leaderboard fragment, if the page has one
///
/// # Returns
/// * Retained awards in page order, empty when `html` is `None`
pub fn extract_awards(html: Option<&str>) -> Vec<AwardRecord> {
    let Some(html) = html else {
        return Vec::new();
    };

    let document = Html::parse_fragment(html);
    let (Ok(cell_selector), Ok(link_selector)) = (
        Selector::parse("#leaderboard_all_league tbody td"),
        Selector::parse("a"),
    ) else {
        return Vec::new();
    };

    document
        .select(&cell_selector)
        .map(|cell| {
            let season = cell
                .select(&link_selector)
                .map(|a| cell_text(&a))
                .collect::<String>()
                .trim()
                .to_string();
            let award = text_without_links(cell).trim().to_string();
            AwardRecord { season, award }
        })
        .filter(|record| is_retained_award(&record.award))
        .collect()
}

/// Whether an award label survives the headline-award filter.
pub fn is_retained_award(label: &str) -> bool {
    !EXCLUDED_AWARDS.iter().any(|excluded| label.contains(excluded))
}

/// Text of `element` with every `<a>` subtree skipped.
fn text_without_links(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for child in element.children() {
        match child.value() {
            Node::Text(t) => text.push_str(&t.text),
            Node::Element(e) if e.name() != "a" => {
                if let Some(child) = ElementRef::wrap(child) {
                    text.push_str(&text_without_links(child));
                }
            }
            _ => {}
        }
    }
    text
}
