//! Comment-embedded fragment lookup.
//!
//! Profile pages ship most secondary tables inside an HTML comment next to
//! an (empty) placeholder container. The comment text is itself an HTML
//! fragment and is returned raw for re-parsing.

use scraper::{ElementRef, Html, Node, Selector};

/// Where a commented fragment lives on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentLocator {
    /// `id` of the container element
    pub container_id: &'static str,
    /// Look in the container's next element sibling instead of the container
    pub next_sibling: bool,
}

impl FragmentLocator {
    pub const ADVANCED: Self = Self::inside("all_advanced");
    pub const SALARIES: Self = Self::inside("all_all_salaries");
    pub const CONTRACT: Self = Self::after("all_all_salaries");
    pub const AWARDS: Self = Self::inside("all_leaderboard");

    pub const fn inside(container_id: &'static str) -> Self {
        Self {
            container_id,
            next_sibling: false,
        }
    }

    pub const fn after(container_id: &'static str) -> Self {
        Self {
            container_id,
            next_sibling: true,
        }
    }
}

/// Text of the first comment among the target element's direct children.
///
/// # Arguments
/// * `document` - Parsed profile page
/// * `locator` - Container ID and whether its next sibling is the target
///
/// # Returns
/// * `Some(String)` with the comment text, ready for `Html::parse_fragment`
/// * `None` when the container, its sibling or a comment child is missing
pub fn locate_commented_fragment(document: &Html, locator: FragmentLocator) -> Option<String> {
    let selector = Selector::parse(&format!("#{}", locator.container_id)).ok()?;
    let container = document.select(&selector).next()?;

    let target = if locator.next_sibling {
        container.next_siblings().find_map(ElementRef::wrap)?
    } else {
        container
    };

    target.children().find_map(|child| match child.value() {
        Node::Comment(comment) => Some(comment.comment.to_string()),
        _ => None,
    })
}
