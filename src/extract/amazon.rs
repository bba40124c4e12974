//! Amazon page strategy.

use scraper::Html;
use tracing::debug;

use super::fields::{
    broad_price_search, element_text, first_currency_text, first_selector_text, truncate_chars,
};
use super::selectors::{self, amazon};
use super::{MAX_FEATURES, SITE_DESCRIPTION_LIMIT};
use crate::models::RawFeatureRecord;

/// Currency markers accepted from a price selector match.
const PRICE_MARKERS: [char; 3] = ['₹', '$', '£'];

/// Markers used by the document-wide fallback scan.
const TEXT_SEARCH_MARKERS: [char; 2] = ['₹', '$'];

pub(super) fn extract(document: &Html) -> RawFeatureRecord {
    let mut record = RawFeatureRecord::default();

    record.product = first_selector_text(document, amazon::TITLE, None);

    record.price = first_currency_text(document, amazon::PRICE, &PRICE_MARKERS)
        .or_else(|| broad_price_search(document, &TEXT_SEARCH_MARKERS));

    if let Some(features) = extract_feature_bullets(document) {
        record.features = Some(features.into());
    } else if let Some(description) = product_description(document) {
        record.description = Some(description);
    }

    debug!("Amazon fields extracted: {:?}", record.present_fields());
    record
}

/// Harvests bullet texts from the first description container that
/// actually holds list items; a container without items falls through to
/// the next selector.
fn extract_feature_bullets(document: &Html) -> Option<Vec<String>> {
    for raw in amazon::DESCRIPTION {
        let Ok(selector) = scraper::Selector::parse(raw) else {
            debug!("Skipping invalid selector {:?}", raw);
            continue;
        };

        if let Some(container) = document.select(&selector).next() {
            let items: Vec<String> = container
                .select(&selectors::LIST_ITEM)
                .map(element_text)
                .filter(|item| !item.is_empty())
                .take(MAX_FEATURES)
                .collect();

            if !items.is_empty() {
                return Some(items);
            }
        }
    }
    None
}

/// Bounded plain-text description, used only when no bullets were found.
fn product_description(document: &Html) -> Option<String> {
    document
        .select(&selectors::AMAZON_PRODUCT_DESCRIPTION)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .map(|text| truncate_chars(&text, SITE_DESCRIPTION_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_product_title_id() {
        let html = Html::parse_document(
            r#"<span id="productTitle"> Echo Dot (5th Gen) </span>"#,
        );
        let record = extract(&html);
        assert_eq!(record.product, Some("Echo Dot (5th Gen)".to_string()));
    }

    #[test]
    fn test_price_currency_guard_skips_shipping_text() {
        // An earlier-ordered selector matches a currency-free element; the
        // later selector carrying ₹999 must win.
        let html = Html::parse_document(
            r#"<span class="a-price"><span class="a-offscreen">Free shipping</span></span>
               <span id="priceblock_ourprice">₹999</span>"#,
        );
        let record = extract(&html);
        assert_eq!(record.price, Some("₹999".to_string()));
    }

    #[test]
    fn test_price_scans_all_elements_of_one_selector() {
        let html = Html::parse_document(
            r#"<span class="a-price"><span class="a-offscreen">was</span></span>
               <span class="a-price"><span class="a-offscreen">$24.99</span></span>"#,
        );
        let record = extract(&html);
        assert_eq!(record.price, Some("$24.99".to_string()));
    }

    #[test]
    fn test_price_broad_search_fallback() {
        let html = Html::parse_document(
            r#"<div id="dp">Deal of the day: $13.49 with coupon</div>"#,
        );
        let record = extract(&html);
        assert_eq!(record.price, Some("Deal of the day: $13.49 with coupon".to_string()));
    }

    #[test]
    fn test_features_capped_at_ten() {
        let items: String =
            (1..=12).map(|i| format!("<li>Feature number {i}</li>")).collect();
        let html = Html::parse_document(&format!(
            r#"<div id="feature-bullets"><ul>{items}</ul></div>"#
        ));

        let record = extract(&html);
        let features = record.features.unwrap().into_list();
        assert_eq!(features.len(), 10);
        assert_eq!(features[0], "Feature number 1");
        assert_eq!(features[9], "Feature number 10");
    }

    #[test]
    fn test_empty_bullet_container_falls_through() {
        // #feature-bullets matches but has no items; the list under the
        // later catalog entry must still be harvested.
        let html = Html::parse_document(
            r#"<div id="feature-bullets"><p>no bullets here</p></div>
               <div id="featurebullets_feature_div"><ul><li>Real feature</li></ul></div>"#,
        );
        let record = extract(&html);
        assert_eq!(record.features.unwrap().into_list(), vec!["Real feature"]);
    }

    #[test]
    fn test_description_fallback_when_no_bullets() {
        let html = Html::parse_document(
            r#"<div id="productDescription">A long-form description of the product.</div>"#,
        );
        let record = extract(&html);
        assert!(record.features.is_none());
        assert_eq!(
            record.description,
            Some("A long-form description of the product.".to_string())
        );
    }

    #[test]
    fn test_description_fallback_truncated() {
        let body = "word ".repeat(200);
        let html =
            Html::parse_document(&format!(r#"<div id="productDescription">{body}</div>"#));
        let record = extract(&html);
        let description = record.description.unwrap();
        assert!(description.ends_with("..."));
        assert_eq!(description.chars().count(), 503);
    }

    #[test]
    fn test_empty_document_yields_empty_record() {
        let html = Html::parse_document("<html><body></body></html>");
        assert!(extract(&html).is_empty());
    }
}
