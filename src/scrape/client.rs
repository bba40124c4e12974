//! HTTP client for product page fetches using wreq for TLS fingerprint
//! emulation.

use crate::config::Config;
use crate::error::FetchError;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::debug;
use wreq::Client;
use wreq_util::Emulation;

/// Rotating user-agent pool; one entry is picked per fetch.
static USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
];

/// Trait for page fetching - enables mocking for tests.
///
/// Implementations take a URL whose scheme the caller has already
/// validated and return the response body, or a classified error.
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Fetches a page and returns its HTML body.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// Page fetcher with browser impersonation and anti-bot measures.
///
/// A fresh client session is built per fetch: no cookies, connections or
/// caches survive between requests.
pub struct PageClient {
    proxy: Option<String>,
    delay_ms: u64,
    delay_jitter_ms: u64,
    timeout_secs: u64,
}

impl PageClient {
    /// Creates a page fetcher from the service configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            proxy: config.proxy.clone(),
            delay_ms: config.delay_ms,
            delay_jitter_ms: config.delay_jitter_ms,
            timeout_secs: config.timeout_secs,
        }
    }

    /// Builds the throwaway client session for one fetch.
    fn build_client(&self) -> Result<Client, FetchError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &self.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url)
                .map_err(|e| FetchError::network(format!("invalid proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }

        builder.build().map_err(|e| FetchError::network(e.to_string()))
    }

    /// Adds a random politeness delay to mimic human pacing.
    async fn delay(&self) {
        if self.delay_ms == 0 {
            return;
        }

        let jitter = if self.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.delay_jitter_ms)
        } else {
            0
        };

        let total_delay = self.delay_ms + jitter;
        debug!("Delaying {}ms", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }
}

fn random_user_agent() -> &'static str {
    USER_AGENTS[rand::rng().random_range(0..USER_AGENTS.len())]
}

#[async_trait]
impl FetchPage for PageClient {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.delay().await;

        let client = self.build_client()?;

        debug!("GET {}", url);

        let response = client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("User-Agent", random_user_agent())
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("DNT", "1")
            .header("Connection", "keep-alive")
            .header("Upgrade-Insecure-Requests", "1")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Sec-Fetch-Site", "none")
            .header("Cache-Control", "max-age=0")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::network(e.to_string())
                }
            })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status { code: status.as_u16() });
        }

        response.text().await.map_err(|e| FetchError::parse(e.to_string()))
    }
}
