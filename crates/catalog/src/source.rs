use crate::prelude::*;
use async_trait::async_trait;
use catalog_core::product::{ProductQuery, ProductsResponse};
use catalog_core::CatalogError;

use crate::config::{create_client, CatalogConfig};

/// Fetch collaborator: executes a products query
#[async_trait]
pub trait ProductSource {
    async fn fetch(&self, query: &ProductQuery) -> Result<ProductsResponse, CatalogError>;
}

/// Products API over HTTP
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductSource {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self::with_client(create_client()?, config))
    }

    pub fn with_client(client: reqwest::Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            base_url: config.api_base().to_string(),
        }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch(&self, query: &ProductQuery) -> Result<ProductsResponse, CatalogError> {
        let url = query.url(&self.base_url);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Fetch(Error::Network(e.to_string()).to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Fetch(f!("HTTP {} from {url}", response.status())));
        }

        response
            .json::<ProductsResponse>()
            .await
            .map_err(|e| CatalogError::Fetch(f!("Failed to parse products: {e}")))
    }
}
