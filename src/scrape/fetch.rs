//! Per-URL fetch orchestration: fetch, parse, dispatch, degrade.

use scraper::Html;
use tracing::{debug, info};

use super::client::FetchPage;
use crate::error::FetchError;
use crate::extract::{fallback_record, SiteStrategy};
use crate::models::RawFeatureRecord;

/// Fetches one product page and extracts a raw feature record.
///
/// The URL scheme is assumed to be validated by the caller. A network or
/// HTTP failure surfaces as a `FetchError`; once a document was fetched,
/// extraction always produces a record, degrading to a title-only
/// fallback when every heuristic misses.
pub async fn fetch_features(
    fetcher: &dyn FetchPage,
    url: &str,
) -> Result<RawFeatureRecord, FetchError> {
    info!("Scraping: {}", url);

    let body = fetcher.fetch_page(url).await?;
    let document = Html::parse_document(&body);

    let strategy = SiteStrategy::for_url(url);
    let mut record = strategy.extract(&document);

    if record.product.is_none() {
        if let Some(placeholder) = strategy.placeholder_product() {
            record.product = Some(placeholder.to_string());
        }
    }

    if record.is_empty() {
        debug!("No fields extracted from {}, degrading to page title", url);
        record = fallback_record(&document);
    }

    info!("Extracted {:?} from {}", record.present_fields(), url);
    Ok(record)
}
