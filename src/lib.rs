//! product-compare - Side-by-side product feature comparison API
//!
//! Fetches two e-commerce product pages, extracts a normalized set of
//! attributes from each with best-effort selector heuristics, and serves
//! the results side by side over a small JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod scrape;

pub use config::Config;
pub use error::FetchError;
pub use extract::SiteStrategy;
pub use models::{NormalizedFeatureRecord, RawFeatureRecord};
pub use scrape::{FetchPage, PageClient};
