/// Error type for catalog operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Page size must be a positive number")]
    InvalidPageSize,

    #[error("Error fetching products: {0}")]
    Fetch(String),
}
