use crate::prelude::*;

/// Catalog API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl CatalogConfig {
    /// Default products API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://dummyjson.com";

    /// Load configuration from environment variables
    /// Uses CATALOG_BASE_URL with default fallback
    pub fn from_env() -> Self {
        Self::from_base_url(std::env::var("CATALOG_BASE_URL").ok())
    }

    fn from_base_url(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// Base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Create the HTTP client used for every catalog request
pub fn create_client() -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&f!("catalog/{}", env!("CARGO_PKG_VERSION")))
            .map_err(|e| eyre!("Invalid header value: {}", e))?,
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}
