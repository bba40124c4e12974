//! Field-level extraction primitives shared by the site strategies.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Collects an element's visible text with interior whitespace collapsed.
pub(crate) fn element_text(element: ElementRef) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates to `max_len` characters, appending an ellipsis when cut.
pub(crate) fn truncate_chars(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let cut: String = text.chars().take(max_len).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Returns the cleaned text of the first element matched by the first
/// usable selector in the list.
///
/// Selectors are tried in catalog order; an entry the parser rejects is
/// skipped (catalogs may carry syntax a backend does not support), and a
/// matched element with empty text does not stop the search. `max_len`
/// bounds the returned text with an ellipsis marker.
pub fn first_selector_text(
    document: &Html,
    selectors: &[&str],
    max_len: Option<usize>,
) -> Option<String> {
    for raw in selectors {
        let selector = match Selector::parse(raw) {
            Ok(selector) => selector,
            Err(e) => {
                debug!("Skipping invalid selector {:?}: {:?}", raw, e);
                continue;
            }
        };

        for element in document.select(&selector) {
            let text = element_text(element);
            if text.is_empty() {
                continue;
            }
            return Some(match max_len {
                Some(limit) => truncate_chars(&text, limit),
                None => text,
            });
        }
    }
    None
}

/// Scans a price selector catalog, accepting only elements whose text
/// carries one of the given currency markers.
///
/// All elements matched by a selector are considered, not just the first:
/// price selectors routinely hit decorative or struck-through elements
/// whose text lacks a currency symbol.
pub(crate) fn first_currency_text(
    document: &Html,
    selectors: &[&str],
    markers: &[char],
) -> Option<String> {
    for raw in selectors {
        let selector = match Selector::parse(raw) {
            Ok(selector) => selector,
            Err(e) => {
                debug!("Skipping invalid selector {:?}: {:?}", raw, e);
                continue;
            }
        };

        for element in document.select(&selector) {
            let text = element_text(element);
            if !text.is_empty() && markers.iter().any(|m| text.contains(*m)) {
                return Some(text);
            }
        }
    }
    None
}

/// Last-resort price hunt: walk the document's text nodes for a short
/// fragment holding a currency marker and a digit.
///
/// Inherently ambiguous (a currency glyph next to unrelated numeric text
/// qualifies); kept as a best-effort fallback only. Considers the first 5
/// candidate nodes and requires the trimmed text to stay under 50 chars.
pub(crate) fn broad_price_search(document: &Html, markers: &[char]) -> Option<String> {
    let candidates = document
        .root_element()
        .text()
        .filter(|t| {
            markers.iter().any(|m| t.contains(*m)) && t.chars().any(|c| c.is_ascii_digit())
        })
        .take(5);

    for text in candidates {
        let trimmed = text.trim();
        if trimmed.chars().count() < 50 {
            return Some(trimmed.to_string());
        }
    }
    None
}
