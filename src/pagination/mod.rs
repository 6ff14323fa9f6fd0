//! Page arithmetic for song listings and verse selection for the verse view.

mod verse;

pub use verse::{select_verse, split_verses};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// A 1-based page of `limit` items. Zero values are replaced by the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    pub fn offset(&self) -> u64 {
        offset_for(self.page, self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        page_count(total, self.limit)
    }
}

pub fn offset_for(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

/// Number of pages needed to hold `total` items, `limit` at a time.
pub fn page_count(total: u64, limit: u32) -> u64 {
    total.div_ceil(u64::from(limit.max(1)))
}
