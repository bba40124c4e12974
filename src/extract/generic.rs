//! Generic strategy for unrecognized sites.

use scraper::Html;
use tracing::debug;

use super::fields::{element_text, first_selector_text, truncate_chars};
use super::selectors::{self, generic};
use crate::models::RawFeatureRecord;

const PRICE_TEXT_LIMIT: usize = 200;
const DESCRIPTION_LIMIT: usize = 300;

/// How many lists we inspect, and how many items we take per list.
const MAX_LISTS_SCANNED: usize = 5;
const MAX_ITEMS_PER_LIST: usize = 8;

/// Items shorter than this are menu entries or single words; longer ones
/// are paragraphs that ended up inside a list.
const MIN_ITEM_CHARS: usize = 10;
const MAX_ITEM_CHARS: usize = 200;

pub(super) fn extract(document: &Html) -> RawFeatureRecord {
    let mut record = RawFeatureRecord::default();

    record.product = document
        .select(&selectors::HEADING)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty());

    record.price = first_selector_text(document, generic::PRICE, Some(PRICE_TEXT_LIMIT));

    record.description = first_selector_text(document, generic::DESCRIPTION, Some(DESCRIPTION_LIMIT))
        .or_else(|| meta_description(document));

    if let Some(features) = harvest_feature_list(document) {
        record.features = Some(features.into());
    }

    debug!("Generic fields extracted: {:?}", record.present_fields());
    record
}

fn meta_description(document: &Html) -> Option<String> {
    document
        .select(&selectors::META_DESCRIPTION)
        .next()
        .and_then(|element| element.value().attr("content"))
        .filter(|content| !content.trim().is_empty())
        .map(|content| truncate_chars(content.trim(), DESCRIPTION_LIMIT))
}

/// Scans the first few lists in document order and accepts the first one
/// that yields at least two plausibly feature-like items. The length
/// bounds reject navigation menus and degenerate single-word entries.
fn harvest_feature_list(document: &Html) -> Option<Vec<String>> {
    for list in document.select(&selectors::FEATURE_LISTS).take(MAX_LISTS_SCANNED) {
        let items: Vec<String> = list
            .select(&selectors::LIST_ITEM)
            .take(MAX_ITEMS_PER_LIST)
            .map(element_text)
            .filter(|item| {
                let chars = item.chars().count();
                chars > MIN_ITEM_CHARS && chars < MAX_ITEM_CHARS
            })
            .collect();

        if items.len() >= 2 {
            return Some(items);
        }
    }
    None
}
