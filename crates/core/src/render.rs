//! View projections for the catalog screen
//!
//! Turns controller state into plain, serializable view data. The shell
//! decides how to paint it (colored text, JSON).

use serde::Serialize;

use crate::category::CATEGORY_TABS;
use crate::controller::Controller;
use crate::page::PAGE_SIZE_OPTIONS;
use crate::product::ProductSummary;

/// Fixed offset added to the price to show a struck-through reference price
pub const REFERENCE_PRICE_MARKUP: f64 = 45.0;

/// One product card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: u64,
    pub title: String,
    pub thumbnail: String,
    pub price: f64,
    pub reference_price: f64,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub slug: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSizeOption {
    pub size: u32,
    pub selected: bool,
}

/// Pagination bar state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationBar {
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Everything needed to paint the catalog screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub category: String,
    pub tabs: Vec<CategoryTab>,
    pub page_sizes: Vec<PageSizeOption>,
    pub cards: Vec<ProductCard>,
    pub loading: bool,
    pub pagination: PaginationBar,
}

/// Link target of a product's detail view
pub fn detail_link(id: u64) -> String {
    format!("/shop/{id}")
}

pub fn render_card(product: &ProductSummary) -> ProductCard {
    ProductCard {
        id: product.id,
        title: product.title.clone(),
        thumbnail: product.thumbnail.clone(),
        price: product.price,
        reference_price: product.price + REFERENCE_PRICE_MARKUP,
        link: detail_link(product.id),
    }
}

/// Render one card per product, in order
pub fn render_cards(products: &[ProductSummary]) -> Vec<ProductCard> {
    products.iter().map(render_card).collect()
}

pub fn render_view(controller: &Controller) -> CatalogView {
    let selected = controller.selected();
    let page = controller.page();

    // A custom page size still shows up as the active option
    let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
    if !sizes.contains(&page.limit) {
        sizes.push(page.limit);
        sizes.sort_unstable();
    }

    CatalogView {
        category: selected.slug().to_string(),
        tabs: CATEGORY_TABS
            .iter()
            .map(|tab| CategoryTab {
                slug: tab.to_string(),
                selected: selected.is_selected(tab),
            })
            .collect(),
        page_sizes: sizes
            .into_iter()
            .map(|size| PageSizeOption {
                size,
                selected: size == page.limit,
            })
            .collect(),
        cards: render_cards(controller.results()),
        loading: controller.is_loading(),
        pagination: PaginationBar {
            current_page: page.current_page(),
            total_pages: page.total_pages(),
            total: page.total,
            skip: page.skip,
            limit: page.limit,
            prev_enabled: page.has_prev(),
            next_enabled: page.has_next(),
        },
    }
}
