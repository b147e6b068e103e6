//! Pagination and filter controller
//!
//! Owns the selected category, the page window and the last successful
//! result set. Every state change that affects the query hands back a
//! [`FetchRequest`] for the caller to execute; the caller feeds the outcome
//! back through [`Controller::apply`].
//!
//! Requests carry a monotonic [`RequestId`]. Only the response to the most
//! recently issued request may update state, so a slow response to a
//! superseded query can never overwrite newer results.

use serde::Serialize;

use crate::category::CategoryFilter;
use crate::error::CatalogError;
use crate::page::{validate_page_size, PageState};
use crate::product::{ProductQuery, ProductSummary, ProductsResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A request the caller must execute against the products API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub query: ProductQuery,
}

/// What happened to a resolved request
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// Results and page window replaced
    Updated,
    /// Request failed; previous results are still in place
    Failed(CatalogError),
    /// A newer request was issued; the response was dropped
    Stale,
}

#[derive(Debug, Clone)]
pub struct Controller {
    selected: CategoryFilter,
    page: PageState,
    results: Vec<ProductSummary>,
    is_loading: bool,
    latest: RequestId,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(CategoryFilter::All, PageState::default())
    }
}

impl Controller {
    /// A controller in the loading state, before its first request
    pub fn new(selected: CategoryFilter, page: PageState) -> Self {
        Self {
            selected,
            page,
            results: Vec::new(),
            is_loading: true,
            latest: RequestId(0),
        }
    }

    /// Issue the initial request
    pub fn start(&mut self) -> FetchRequest {
        self.refetch()
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn results(&self) -> &[ProductSummary] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest
    }

    /// Current query derived from filter and page window
    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            category: self.selected.clone(),
            limit: self.page.limit,
            skip: self.page.skip,
        }
    }

    /// Select a category tab. `all` clears the filter. Resets to the first page.
    pub fn select_category(&mut self, item: &str) -> Option<FetchRequest> {
        let selected = CategoryFilter::from_slug(item);
        if selected == self.selected && self.page.skip == 0 {
            return None;
        }
        self.selected = selected;
        self.page.skip = 0;
        Some(self.refetch())
    }

    /// Change the page size. Resets to the first page.
    pub fn set_page_size(&mut self, size: u32) -> Result<Option<FetchRequest>, CatalogError> {
        let limit = validate_page_size(size)?;
        if limit == self.page.limit && self.page.skip == 0 {
            return Ok(None);
        }
        self.page.limit = limit;
        self.page.skip = 0;
        Ok(Some(self.refetch()))
    }

    pub fn prev(&mut self) -> Option<FetchRequest> {
        let skip = self.page.prev_skip()?;
        self.page.skip = skip;
        Some(self.refetch())
    }

    pub fn next(&mut self) -> Option<FetchRequest> {
        let skip = self.page.next_skip()?;
        self.page.skip = skip;
        Some(self.refetch())
    }

    /// Re-issue the current query without changing state
    pub fn refresh(&mut self) -> FetchRequest {
        self.refetch()
    }

    /// Feed back the outcome of a request
    pub fn apply(
        &mut self,
        id: RequestId,
        result: Result<ProductsResponse, CatalogError>,
    ) -> Applied {
        if id != self.latest {
            return Applied::Stale;
        }

        self.is_loading = false;

        match result {
            Ok(response) => {
                self.results = response.products;
                self.page = PageState {
                    total: response.total,
                    skip: response.skip,
                    // Empty categories echo a limit of 0
                    limit: if response.limit == 0 {
                        self.page.limit
                    } else {
                        response.limit
                    },
                };
                Applied::Updated
            }
            Err(err) => Applied::Failed(err),
        }
    }

    fn refetch(&mut self) -> FetchRequest {
        self.is_loading = true;
        self.latest = RequestId(self.latest.0 + 1);
        FetchRequest {
            id: self.latest,
            query: self.query(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> ProductSummary {
        ProductSummary {
            id,
            title: format!("Product {id}"),
            thumbnail: format!("https://cdn.example.com/{id}.png"),
            price: 10.0 + id as f64,
        }
    }

    fn response(total: u32, skip: u32, limit: u32) -> ProductsResponse {
        let count = limit.min(total.saturating_sub(skip)) as u64;
        ProductsResponse {
            products: (skip as u64..skip as u64 + count).map(product).collect(),
            total,
            skip,
            limit,
        }
    }

    /// Controller that has loaded the first page of `total` items
    fn loaded(total: u32) -> Controller {
        let mut controller = Controller::default();
        let request = controller.start();
        controller.apply(request.id, Ok(response(total, 0, 20)));
        controller
    }

    // ============================================================================
    // lifecycle
    // ============================================================================

    #[test]
    fn test_starts_loading_with_defaults() {
        let mut controller = Controller::default();
        assert!(controller.is_loading());
        assert!(controller.results().is_empty());

        let request = controller.start();
        assert_eq!(request.query.category, CategoryFilter::All);
        assert_eq!(request.query.limit, 20);
        assert_eq!(request.query.skip, 0);
    }

    #[test]
    fn test_success_replaces_results_and_echoed_page() {
        let controller = loaded(194);

        assert!(!controller.is_loading());
        assert_eq!(controller.results().len(), 20);
        assert_eq!(controller.page().total, 194);
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut controller = loaded(194);
        let before = controller.results().to_vec();

        let request = controller.next().unwrap();
        assert!(controller.is_loading());

        let outcome = controller.apply(
            request.id,
            Err(CatalogError::Fetch("connection refused".to_string())),
        );

        assert!(matches!(outcome, Applied::Failed(_)));
        assert!(!controller.is_loading());
        assert_eq!(controller.results(), before.as_slice());
    }

    #[test]
    fn test_zero_echoed_limit_keeps_requested_limit() {
        let mut controller = Controller::default();
        let request = controller.select_category("unknown").unwrap();
        controller.apply(
            request.id,
            Ok(ProductsResponse {
                products: vec![],
                total: 0,
                skip: 0,
                limit: 0,
            }),
        );

        assert_eq!(controller.page().limit, 20);
        assert_eq!(controller.page().total_pages(), 0);
    }

    // ============================================================================
    // category selection
    // ============================================================================

    #[test]
    fn test_select_category_resets_skip() {
        let mut controller = loaded(194);
        let next = controller.next().unwrap();
        controller.apply(next.id, Ok(response(194, 20, 20)));

        let request = controller.select_category("furniture").unwrap();

        assert_eq!(request.query.skip, 0);
        assert_eq!(request.query.category, CategoryFilter::Furniture);
        assert!(request.query.path().contains("/category/furniture"));
    }

    #[test]
    fn test_selecting_all_clears_the_filter() {
        let mut controller = loaded(194);
        controller.select_category("fragrances");

        let request = controller.select_category("all").unwrap();

        assert_eq!(request.query, Controller::default().query());
        assert_eq!(request.query.path(), "/products");
    }

    #[test]
    fn test_reselecting_same_category_on_first_page_is_noop() {
        let mut controller = loaded(194);
        assert!(controller.select_category("all").is_none());
    }

    #[test]
    fn test_unknown_category_is_accepted() {
        let mut controller = loaded(194);
        let request = controller.select_category("laptops").unwrap();
        assert_eq!(request.query.path(), "/products/category/laptops");
    }

    // ============================================================================
    // page size
    // ============================================================================

    #[test]
    fn test_set_page_size_resets_skip() {
        let mut controller = loaded(194);
        let next = controller.next().unwrap();
        controller.apply(next.id, Ok(response(194, 20, 20)));

        let request = controller.set_page_size(60).unwrap().unwrap();

        assert_eq!(request.query.limit, 60);
        assert_eq!(request.query.skip, 0);
        assert_eq!(controller.page().skip, 0);
    }

    #[test]
    fn test_set_page_size_zero_is_rejected() {
        let mut controller = loaded(194);
        let latest = controller.latest_request();

        assert_eq!(
            controller.set_page_size(0),
            Err(CatalogError::InvalidPageSize)
        );
        assert_eq!(controller.latest_request(), latest);
        assert_eq!(controller.page().limit, 20);
    }

    #[test]
    fn test_set_same_page_size_on_first_page_is_noop() {
        let mut controller = loaded(194);
        assert_eq!(controller.set_page_size(20), Ok(None));
    }

    // ============================================================================
    // navigation
    // ============================================================================

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut controller = loaded(194);
        assert!(controller.prev().is_none());
        assert_eq!(controller.page().skip, 0);
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_next_then_prev() {
        let mut controller = loaded(194);

        let next = controller.next().unwrap();
        assert_eq!(next.query.skip, 20);
        controller.apply(next.id, Ok(response(194, 20, 20)));

        let prev = controller.prev().unwrap();
        assert_eq!(prev.query.skip, 0);
    }

    #[test]
    fn test_next_clamps_on_last_page() {
        let mut controller = loaded(194);
        let mut last = 0;
        while let Some(request) = controller.next() {
            last = request.query.skip;
            controller.apply(request.id, Ok(response(194, last, 20)));
        }

        assert_eq!(last, 174);
        assert!(controller.next().is_none());
    }

    #[test]
    fn test_empty_result_disables_navigation() {
        let mut controller = loaded(0);
        let latest = controller.latest_request();

        assert!(controller.next().is_none());
        assert!(controller.prev().is_none());
        assert_eq!(controller.latest_request(), latest);
    }

    // ============================================================================
    // superseded requests
    // ============================================================================

    #[test]
    fn test_stale_response_is_dropped() {
        let mut controller = loaded(194);

        let furniture = controller.select_category("furniture").unwrap();
        let fragrances = controller.select_category("fragrances").unwrap();
        assert!(fragrances.id > furniture.id);

        let fragrance_page = ProductsResponse {
            products: vec![product(900)],
            total: 5,
            skip: 0,
            limit: 20,
        };
        assert_eq!(
            controller.apply(fragrances.id, Ok(fragrance_page)),
            Applied::Updated
        );

        // Older response resolves last
        let outcome = controller.apply(furniture.id, Ok(response(15, 0, 20)));

        assert_eq!(outcome, Applied::Stale);
        assert_eq!(controller.results().len(), 1);
        assert_eq!(controller.results()[0].id, 900);
        assert_eq!(controller.page().total, 5);
        assert_eq!(controller.selected(), &CategoryFilter::Fragrances);
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading() {
        let mut controller = loaded(194);
        let first = controller.next().unwrap();
        let _second = controller.select_category("furniture").unwrap();

        let outcome = controller.apply(first.id, Err(CatalogError::Fetch("timeout".into())));

        assert_eq!(outcome, Applied::Stale);
        assert!(controller.is_loading());
    }

    #[test]
    fn test_refresh_issues_new_request_for_same_query() {
        let mut controller = loaded(194);
        let before = controller.latest_request();

        let request = controller.refresh();

        assert!(request.id > before);
        assert_eq!(request.query, controller.query());
    }
}
