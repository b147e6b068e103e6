//! Category filters
//!
//! The catalog is narrowed by a single category slug. The tab bar offers a
//! fixed set of slugs, with `all` standing in for "no filter". Unknown slugs
//! are accepted as-is; the API decides whether they match anything.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slug of the sentinel tab that clears the filter
pub const ALL: &str = "all";

/// Category tabs, in display order
pub const CATEGORY_TABS: [&str; 5] = [
    ALL,
    "furniture",
    "fragrances",
    "womens-bags",
    "sports-accessories",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Furniture,
    Fragrances,
    WomensBags,
    SportsAccessories,
    /// Slug outside the known tab set
    Other(String),
}

impl CategoryFilter {
    /// Map a tab slug to a filter. `all` and the empty string clear the filter.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "" | ALL => CategoryFilter::All,
            "furniture" => CategoryFilter::Furniture,
            "fragrances" => CategoryFilter::Fragrances,
            "womens-bags" => CategoryFilter::WomensBags,
            "sports-accessories" => CategoryFilter::SportsAccessories,
            other => CategoryFilter::Other(other.to_string()),
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Furniture => "furniture",
            CategoryFilter::Fragrances => "fragrances",
            CategoryFilter::WomensBags => "womens-bags",
            CategoryFilter::SportsAccessories => "sports-accessories",
            CategoryFilter::Other(slug) => slug,
        }
    }

    /// Slug to send to the API, `None` when unfiltered
    pub fn query_value(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            other => Some(other.slug()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Whether the tab with the given slug should be highlighted
    pub fn is_selected(&self, tab: &str) -> bool {
        self.slug() == tab
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl From<String> for CategoryFilter {
    fn from(slug: String) -> Self {
        CategoryFilter::from_slug(&slug)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.slug().to_string()
    }
}
