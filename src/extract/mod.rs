//! Best-effort extraction of product fields from fetched HTML.
//!
//! One strategy per recognized retailer plus a generic fallback; all three
//! share the selector catalogs and field primitives in this module.

pub mod fields;
pub mod selectors;

mod amazon;
mod flipkart;
mod generic;

use scraper::Html;

use crate::models::RawFeatureRecord;
use fields::element_text;

/// Feature lists are capped regardless of how many items a page carries.
pub(crate) const MAX_FEATURES: usize = 10;

/// Bound on the plain-text description fallback of the site strategies.
pub(crate) const SITE_DESCRIPTION_LIMIT: usize = 500;

/// Extraction algorithm variant, selected by URL pattern.
///
/// A closed set: recognizing a new retailer means adding a variant and its
/// catalog, not registering a handler at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteStrategy {
    Amazon,
    Flipkart,
    Generic,
}

impl SiteStrategy {
    /// Picks the strategy for a URL by case-insensitive substring match.
    pub fn for_url(url: &str) -> Self {
        let url = url.to_lowercase();
        if url.contains("amazon.") {
            SiteStrategy::Amazon
        } else if url.contains("flipkart.") {
            SiteStrategy::Flipkart
        } else {
            SiteStrategy::Generic
        }
    }

    /// Runs this strategy over a parsed document.
    pub fn extract(&self, document: &Html) -> RawFeatureRecord {
        match self {
            SiteStrategy::Amazon => amazon::extract(document),
            SiteStrategy::Flipkart => flipkart::extract(document),
            SiteStrategy::Generic => generic::extract(document),
        }
    }

    /// Product name to substitute when a recognized site yields no title.
    /// Assigned by the caller after extraction, not by the strategy.
    pub fn placeholder_product(&self) -> Option<&'static str> {
        match self {
            SiteStrategy::Amazon => Some("Amazon Product"),
            SiteStrategy::Flipkart => Some("Flipkart Product"),
            SiteStrategy::Generic => None,
        }
    }
}

/// Minimal record for documents where every heuristic came up empty,
/// usually JavaScript-rendered or bot-walled pages.
pub fn fallback_record(document: &Html) -> RawFeatureRecord {
    let title = document
        .select(&selectors::PAGE_TITLE)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty());

    RawFeatureRecord {
        product: Some(title.unwrap_or_else(|| "Unknown Product".to_string())),
        description: Some(
            "Could not extract detailed information. The website may be using JavaScript \
             to load content or has anti-scraping protection."
                .to_string(),
        ),
        ..Default::default()
    }
}
