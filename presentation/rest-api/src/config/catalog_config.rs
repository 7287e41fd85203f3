use std::env;

use openfoodfacts::client::DEFAULT_BASE_URL;

pub const DEFAULT_USER_AGENT: &str = "EcoScanApp/1.0 (contact@ecoscan.app)";

/// Configuration for the Open Food Facts product catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub user_agent: String,
    pub base_url: String,
}

impl CatalogConfig {
    /// Environment variables:
    /// - USER_AGENT: Identifier sent on every outbound request
    ///   (default: "EcoScanApp/1.0 (contact@ecoscan.app)")
    /// - OPENFOODFACTS_URL: Catalog base URL (default: "https://world.openfoodfacts.org")
    pub fn from_env() -> Self {
        Self::from_values(env::var("USER_AGENT").ok(), env::var("OPENFOODFACTS_URL").ok())
    }

    fn from_values(user_agent: Option<String>, base_url: Option<String>) -> Self {
        Self {
            user_agent: user_agent
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            base_url: base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}
