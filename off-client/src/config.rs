//! Client configuration

/// Public Open Food Facts instance
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Client configuration for the remote product database
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://world.openfoodfacts.org")
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// User-Agent sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: 10_000,
            user_agent: concat!("price-checker/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create a client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<super::OffClient> {
        super::OffClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
