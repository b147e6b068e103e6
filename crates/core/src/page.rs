//! Offset pagination arithmetic
//!
//! Pure functions over `skip`/`limit`/`total` as reported by the products
//! API. `skip` is clamped to `[0, max(0, total - limit)]` by navigation.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Page size used before the user picks one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page sizes offered by the selector
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [20, 60, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            total: 0,
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    /// Largest offset that still shows a full page
    pub fn max_skip(&self) -> u32 {
        self.total.saturating_sub(self.limit)
    }

    pub fn has_prev(&self) -> bool {
        self.skip > 0
    }

    pub fn has_next(&self) -> bool {
        self.skip.saturating_add(self.limit) < self.total
    }

    /// Offset of the previous page, `None` at the lower boundary
    pub fn prev_skip(&self) -> Option<u32> {
        if !self.has_prev() {
            return None;
        }
        Some(self.skip.saturating_sub(self.limit))
    }

    /// Offset of the next page, `None` at the upper boundary
    pub fn next_skip(&self) -> Option<u32> {
        if !self.has_next() {
            return None;
        }
        Some(self.max_skip().min(self.skip.saturating_add(self.limit)))
    }

    /// 1-indexed page number for display
    pub fn current_page(&self) -> u32 {
        self.skip / self.limit.max(1) + 1
    }

    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.limit.max(1))
    }
}

/// Reject a zero page size
pub fn validate_page_size(size: u32) -> Result<u32, CatalogError> {
    if size == 0 {
        return Err(CatalogError::InvalidPageSize);
    }
    Ok(size)
}

/// Offset of a 1-indexed page
pub fn skip_for_page(page: u32, limit: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(limit)
}
