use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

// =============================================================================
// ClientConfig
// =============================================================================

/// Where the `listy` binary finds the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,

    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Blank URLs fall back to [`DEFAULT_API_URL`]; trailing slashes are dropped.
    #[must_use]
    pub fn new(api_url: &str) -> Self {
        let trimmed = api_url.trim().trim_end_matches('/');
        let api_url = if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        };
        Self {
            api_url: api_url.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
