use async_trait::async_trait;
use catalog_core::product::{ProductQuery, ProductSummary, ProductsResponse};
use catalog_core::CatalogError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::prelude::*;
use crate::source::ProductSource;

/// In-memory catalog that slices a fixed product list
pub struct FakeSource {
    products: Vec<ProductSummary>,
    fail: AtomicBool,
    pub queries: Mutex<Vec<ProductQuery>>,
}

impl FakeSource {
    pub fn with_products(count: u64) -> Self {
        Self {
            products: (1..=count)
                .map(|id| ProductSummary {
                    id,
                    title: f!("Product {id}"),
                    thumbnail: f!("https://cdn.example.com/{id}.png"),
                    price: id as f64,
                })
                .collect(),
            fail: AtomicBool::new(false),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn failing() -> Self {
        Self {
            fail: AtomicBool::new(true),
            ..Self::with_products(0)
        }
    }
}

#[async_trait]
impl ProductSource for FakeSource {
    async fn fetch(&self, query: &ProductQuery) -> Result<ProductsResponse, CatalogError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(CatalogError::Fetch("connection refused".to_string()));
        }
        let products: Vec<ProductSummary> = self
            .products
            .iter()
            .skip(query.skip as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();
        Ok(ProductsResponse {
            products,
            total: self.products.len() as u32,
            skip: query.skip,
            limit: query.limit,
        })
    }
}

