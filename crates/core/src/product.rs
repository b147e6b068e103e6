use serde::{Deserialize, Serialize};

use crate::category::CategoryFilter;

/// Product record as returned by the products API
///
/// The API sends many more fields per product; only the ones shown on a
/// card are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: u64,
    pub title: String,
    pub thumbnail: String,
    pub price: f64,
}

/// Paginated products API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductSummary>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Parameters of a single products request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductQuery {
    pub category: CategoryFilter,
    pub limit: u32,
    pub skip: u32,
}

impl ProductQuery {
    /// Request path, relative to the API base
    ///
    /// `/products` when unfiltered, `/products/category/{slug}` otherwise.
    pub fn path(&self) -> String {
        match self.category.query_value() {
            Some(slug) => format!("/products/category/{}", urlencoding::encode(slug)),
            None => "/products".to_string(),
        }
    }

    /// Query string parameters, in the order the API documents them
    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("limit", self.limit.to_string()),
            ("skip", self.skip.to_string()),
        ]
    }

    /// Full request URL for the given API base
    pub fn url(&self, base_url: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        format!(
            "{base_url}{}?limit={}&skip={}",
            self.path(),
            self.limit,
            self.skip
        )
    }
}
