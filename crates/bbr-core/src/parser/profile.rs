//! Player profile page sections that are not comment-hidden.

use scraper::{Html, Selector};

use super::columns::cell_text;

const HIGH_SCHOOL_LABEL: &str = "High School:";

/// Two or more whitespace characters, including the non-ASCII spaces
/// (`&nbsp;` and friends) that profile pages mix into the meta block.
const WHITESPACE_RUN: &str =
    r"[\s\x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}]{2,}";

/// Outer HTML of the per-game stats container, if the page has one.
pub fn basic_table_html(document: &Html) -> Option<String> {
    let selector = Selector::parse("#all_per_game").ok()?;
    document.select(&selector).next().map(|el| el.html())
}

/// High school line from the profile `#meta` block.
///
/// Newlines are dropped, whitespace runs collapsed and the label removed.
/// When several paragraphs mention a high school the last one wins.
pub fn extract_high_school(document: &Html) -> Option<String> {
    let selector = Selector::parse("#meta p").ok()?;
    let whitespace = regex_lite::Regex::new(WHITESPACE_RUN).ok()?;

    document
        .select(&selector)
        .map(|p| cell_text(&p))
        .filter(|text| text.contains(HIGH_SCHOOL_LABEL))
        .last()
        .map(|text| {
            let single_line = text.replace('\n', "");
            whitespace
                .replace_all(&single_line, " ")
                .replacen(HIGH_SCHOOL_LABEL, "", 1)
                .trim()
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const META: &str = r#"
        <html><body>
        <div id="meta">
            <p><strong>Position:</strong> Shooting Guard</p>
            <p>
                <strong>High School:</strong>
                <a href="/friv/high_schools.fcgi?hs=x">Emsley A. Laney</a>
                in
                <a href="/friv/high_schools.fcgi?state=NC">Wilmington, North Carolina</a>
            </p>
        </div>
        <div id="all_per_game"><table></table></div>
        </body></html>
    "#;

    #[test]
    fn test_extract_high_school() {
        let document = Html::parse_document(META);
        assert_eq!(
            extract_high_school(&document).as_deref(),
            Some("Emsley A. Laney in Wilmington, North Carolina")
        );
    }

    #[test]
    fn test_extract_high_school_collapses_nbsp_runs() {
        let document = Html::parse_document(
            r#"<div id="meta"><p><strong>High School:</strong> Laney in&nbsp; Wilmington</p></div>"#,
        );
        assert_eq!(
            extract_high_school(&document).as_deref(),
            Some("Laney in Wilmington")
        );

        let document = Html::parse_document(
            "<div id=\"meta\"><p>High School:\u{a0}\u{a0}Laney</p></div>",
        );
        assert_eq!(extract_high_school(&document).as_deref(), Some("Laney"));
    }

    #[test]
    fn test_extract_high_school_missing() {
        let document = Html::parse_document(r#"<div id="meta"><p>College: UNC</p></div>"#);
        assert!(extract_high_school(&document).is_none());
    }

    #[test]
    fn test_basic_table_html() {
        let document = Html::parse_document(META);
        let html = basic_table_html(&document).unwrap();
        assert!(html.starts_with(r#"<div id="all_per_game">"#));
        assert!(html.contains("<table>"));

        let empty = Html::parse_document("<html><body></body></html>");
        assert!(basic_table_html(&empty).is_none());
    }
}
