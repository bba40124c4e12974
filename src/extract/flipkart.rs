//! Flipkart page strategy.

use scraper::{Html, Selector};
use tracing::debug;

use super::fields::{
    broad_price_search, element_text, first_currency_text, first_selector_text, truncate_chars,
};
use super::selectors::{self, flipkart};
use super::{MAX_FEATURES, SITE_DESCRIPTION_LIMIT};
use crate::models::RawFeatureRecord;

/// Flipkart only lists in rupees.
const PRICE_MARKERS: [char; 1] = ['₹'];

pub(super) fn extract(document: &Html) -> RawFeatureRecord {
    let mut record = RawFeatureRecord::default();

    record.product = first_selector_text(document, flipkart::TITLE, None);

    record.price = first_currency_text(document, flipkart::PRICE, &PRICE_MARKERS)
        .or_else(|| broad_price_search(document, &PRICE_MARKERS));

    extract_highlights(document, &mut record);

    debug!("Flipkart fields extracted: {:?}", record.present_fields());
    record
}

/// The first description selector that matches anything decides the shape:
/// a container that is (or holds) a list yields Features, anything else
/// becomes a bounded Description.
fn extract_highlights(document: &Html, record: &mut RawFeatureRecord) {
    for raw in flipkart::DESCRIPTION {
        let Ok(selector) = Selector::parse(raw) else {
            debug!("Skipping invalid selector {:?}", raw);
            continue;
        };

        let Some(container) = document.select(&selector).next() else {
            continue;
        };

        let list = if container.value().name() == "ul" {
            Some(container)
        } else {
            container.select(&selectors::UNORDERED_LIST).next()
        };

        match list {
            Some(list) => {
                let items: Vec<String> = list
                    .select(&selectors::LIST_ITEM)
                    .map(element_text)
                    .filter(|item| !item.is_empty())
                    .take(MAX_FEATURES)
                    .collect();

                if !items.is_empty() {
                    record.features = Some(items.into());
                }
            }
            None => {
                let text = element_text(container);
                if !text.is_empty() {
                    record.description = Some(truncate_chars(&text, SITE_DESCRIPTION_LIMIT));
                }
            }
        }
        break;
    }
}
