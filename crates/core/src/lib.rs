//! Core library for catalog
//!
//! This crate implements the **Functional Core** of the catalog application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`catalog_core`** (this crate): Pure state and transformation functions with zero I/O
//! - **`catalog`**: HTTP, terminal output and the interactive session (the Imperative Shell)
//!
//! Nothing in here performs a request. The [`controller::Controller`] decides
//! *what* to fetch and hands back a [`controller::FetchRequest`]; the shell
//! executes it and feeds the outcome back.
//!
//! # Module Organization
//!
//! - [`category`]: Category tabs and the filter they map to
//! - [`page`]: `skip`/`limit`/`total` arithmetic
//! - [`product`]: API payloads and request derivation
//! - [`controller`]: Pagination/filter state machine
//! - [`render`]: View projections (product cards, tabs, pagination bar)
//!
//! # Example Usage
//!
//! ```rust
//! use catalog_core::controller::{Applied, Controller};
//! use catalog_core::product::ProductsResponse;
//!
//! let mut controller = Controller::default();
//! let request = controller.start();
//! assert_eq!(request.query.path(), "/products");
//!
//! let response = ProductsResponse { products: vec![], total: 95, skip: 0, limit: 20 };
//! assert_eq!(controller.apply(request.id, Ok(response)), Applied::Updated);
//! assert_eq!(controller.page().total_pages(), 5);
//! ```

pub mod category;
pub mod controller;
pub mod error;
pub mod page;
pub mod product;
pub mod render;

pub use error::CatalogError;
