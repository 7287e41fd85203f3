use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Every outbound call is bounded by this timeout. No retries.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared Open Food Facts HTTP client configuration.
pub struct OpenFoodFactsClient {
    pub client: Client,
    pub base_url: String,
}

impl OpenFoodFactsClient {
    /// Builds a client that identifies itself with `user_agent` on every request.
    pub fn new(user_agent: &str, base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the per-barcode product endpoint URL.
    pub fn product_url(&self, barcode: &str) -> String {
        format!("{}/api/v2/product/{}", self.base_url, barcode)
    }

    /// Returns the legacy search endpoint URL.
    pub fn search_url(&self) -> String {
        format!("{}/cgi/search.pl", self.base_url)
    }
}
