//! Page and offset pagination types

use serde::{Deserialize, Serialize};

/// Normalized page-based parameters
///
/// `offset == (page - 1) * limit` unless the caller supplied an explicit
/// offset, in which case `page` was derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// 1-indexed page number
    pub page: u64,
    /// Page size
    pub limit: u64,
    /// Zero-indexed offset of the first row
    pub offset: u64,
}

/// Store-query window (`skip` rows, then `take` rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkipTake {
    /// Rows to skip
    pub skip: u64,
    /// Rows to fetch
    pub take: u64,
}

/// Pagination metadata for a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResult {
    /// Current 1-indexed page, clamped to at least 1
    pub page: u64,
    /// Page size, clamped to at least 1
    pub limit: u64,
    /// Total row count
    pub total: u64,
    /// `ceil(total / limit)`, or 0 when there are no rows
    pub total_pages: u64,
    /// Rows before this page, `(page - 1) * limit`
    pub offset: u64,
    /// Same as `offset`, for ORM-style `skip`/`take` queries
    pub skip: u64,
    /// Same as `limit`
    pub take: u64,
    /// Whether a later page exists
    pub has_next: bool,
    /// Whether this is past page 1
    pub has_previous: bool,
    /// Always 1
    pub first_page: u64,
    /// Last addressable page, at least 1
    pub last_page: u64,
    /// 1-indexed first item on this page, 0 when there are no rows
    pub start_item: u64,
    /// 1-indexed last item on this page, 0 when there are no rows
    pub end_item: u64,
}

impl PaginationResult {
    /// The `skip`/`take` window this result was computed for
    pub fn skip_take(&self) -> SkipTake {
        SkipTake {
            skip: self.skip,
            take: self.take,
        }
    }

    /// Whether the requested page lies past the last page of data
    pub fn is_out_of_range(&self) -> bool {
        self.page > self.last_page
    }
}

/// Inclusive 1-indexed item range covered by a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemRange {
    pub start: u64,
    pub end: u64,
}

/// A page of data with its pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationResult,
}
