//! The comparison endpoint: validate, fetch both URLs, shape the response.

use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::error::FetchError;
use crate::models::NormalizedFeatureRecord;
use crate::scrape::{fetch_features, FetchPage};

/// Incoming comparison request. Both fields are optional so that their
/// absence can be answered with the dedicated validation message instead
/// of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub url1: Option<String>,
    #[serde(default)]
    pub url2: Option<String>,
}

/// Successful comparison body.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub data1: NormalizedFeatureRecord,
    pub data2: NormalizedFeatureRecord,
}

/// Per-URL failure messages; only failed URLs appear as keys.
#[derive(Debug, Default, Serialize)]
pub struct CompareErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url2: Option<String>,
}

/// Outcome of one fetched-and-normalized URL.
pub type FetchOutcome = Result<NormalizedFeatureRecord, FetchError>;

/// Both outcomes of a comparison, keyed by input position.
pub struct ComparisonResult {
    pub first: FetchOutcome,
    pub second: FetchOutcome,
}

impl ComparisonResult {
    /// True when both fetches produced a record.
    pub fn is_complete(&self) -> bool {
        self.first.is_ok() && self.second.is_ok()
    }
}

/// Fetches and normalizes both URLs.
///
/// The fetches share no state, so they run concurrently; each carries its
/// own politeness delay and header choice. A failure on one URL never
/// aborts the other.
pub async fn compare_urls(fetcher: &dyn FetchPage, url1: &str, url2: &str) -> ComparisonResult {
    info!("Comparing: {} vs {}", url1, url2);

    let (first, second) =
        tokio::join!(fetch_features(fetcher, url1), fetch_features(fetcher, url2));

    ComparisonResult {
        first: first.map(|record| record.normalize()),
        second: second.map(|record| record.normalize()),
    }
}

fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[post("/compare")]
pub async fn compare(fetcher: web::Data<dyn FetchPage>, body: web::Bytes) -> impl Responder {
    let Ok(request) = serde_json::from_slice::<CompareRequest>(&body) else {
        return HttpResponse::BadRequest().json(json!({ "error": "Missing JSON payload" }));
    };

    let (url1, url2) = match (non_empty(request.url1), non_empty(request.url2)) {
        (Some(url1), Some(url2)) => (url1, url2),
        _ => {
            return HttpResponse::BadRequest().json(json!({ "error": "Both URLs are required" }))
        }
    };

    if !is_valid_url(&url1) || !is_valid_url(&url2) {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "URLs must start with http:// or https://" }));
    }

    let result = compare_urls(fetcher.get_ref(), &url1, &url2).await;

    match (result.first, result.second) {
        (Ok(data1), Ok(data2)) => HttpResponse::Ok().json(CompareResponse { data1, data2 }),
        (first, second) => {
            let errors = CompareErrors {
                url1: first.err().map(|e| e.to_string()),
                url2: second.err().map(|e| e.to_string()),
            };
            HttpResponse::BadRequest().json(json!({ "error": errors }))
        }
    }
}
