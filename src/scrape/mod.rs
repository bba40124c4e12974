//! Page fetching: HTTP client, error classification, and per-URL
//! orchestration.

pub mod client;
pub mod fetch;

pub use client::{FetchPage, PageClient};
pub use fetch::fetch_features;
