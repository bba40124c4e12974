//! Error taxonomy for page fetching and extraction.

use thiserror::Error;

/// Longest underlying transport message we surface to callers.
const NETWORK_DETAIL_LIMIT: usize = 100;

/// A failure while fetching or processing a single product page.
///
/// Every variant renders as a human-readable message suitable for returning
/// directly in an API error body. Request validation (missing/malformed
/// input) is handled at the HTTP layer before any fetch starts and is not
/// part of this enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request exceeded the fetch timeout.
    #[error("Request timeout. The website took too long to respond.")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("{}", status_message(.code))]
    Status { code: u16 },

    /// Transport-level failure (DNS, connection reset, TLS, ...).
    #[error("Failed to fetch the page. Error: {0}")]
    Network(String),

    /// The response body could not be processed.
    #[error("Error processing the page. This website may require special handling.")]
    Parse(String),
}

impl FetchError {
    /// Builds a `Network` error, truncating the underlying message so a
    /// verbose transport error does not flood the API response.
    pub fn network(detail: impl Into<String>) -> Self {
        let detail: String = detail.into();
        let detail = if detail.chars().count() > NETWORK_DETAIL_LIMIT {
            detail.chars().take(NETWORK_DETAIL_LIMIT).collect()
        } else {
            detail
        };
        FetchError::Network(detail)
    }

    /// Builds a `Parse` error. The detail is kept for logging; the display
    /// message stays generic.
    pub fn parse(detail: impl Into<String>) -> Self {
        FetchError::Parse(detail.into())
    }
}

/// 403 and 503 get distinguished messages; both are common anti-bot answers.
fn status_message(code: &u16) -> String {
    match code {
        403 => "Access denied by website (403). The site is blocking automated requests."
            .to_string(),
        503 => "Service unavailable (503). The website is temporarily down or blocking requests."
            .to_string(),
        code => format!("HTTP error {code}: the website rejected the request."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let err = FetchError::Timeout;
        assert_eq!(err.to_string(), "Request timeout. The website took too long to respond.");
    }

    #[test]
    fn test_status_403_message() {
        let err = FetchError::Status { code: 403 };
        assert!(err.to_string().contains("Access denied"));
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn test_status_503_message() {
        let err = FetchError::Status { code: 503 };
        assert!(err.to_string().contains("Service unavailable"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_status_generic_message() {
        let err = FetchError::Status { code: 404 };
        assert_eq!(err.to_string(), "HTTP error 404: the website rejected the request.");
    }

    #[test]
    fn test_network_message_truncation() {
        let long_detail = "x".repeat(500);
        let err = FetchError::network(long_detail);
        match &err {
            FetchError::Network(detail) => assert_eq!(detail.chars().count(), 100),
            other => panic!("unexpected variant: {:?}", other),
        }
        assert!(err.to_string().starts_with("Failed to fetch the page. Error: "));
    }

    #[test]
    fn test_network_message_short_detail_kept() {
        let err = FetchError::network("connection refused");
        assert_eq!(
            err.to_string(),
            "Failed to fetch the page. Error: connection refused"
        );
    }

    #[test]
    fn test_network_truncation_is_char_safe() {
        // Multi-byte characters must not be split mid-codepoint.
        let detail = "₹".repeat(200);
        let err = FetchError::network(detail);
        match err {
            FetchError::Network(d) => assert_eq!(d.chars().count(), 100),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_parse_message_is_generic() {
        let err = FetchError::parse("unexpected tag soup");
        assert_eq!(
            err.to_string(),
            "Error processing the page. This website may require special handling."
        );
    }
}
