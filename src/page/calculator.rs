//! Page and offset calculations
//!
//! Inputs are signed so that zero or negative values coming from untrusted
//! callers can be handled. Every input is clamped to its minimum *before* any
//! arithmetic; clamping afterwards would give different answers for zero and
//! negative pages.

use super::bounds::get_last_page;
use super::types::{Paginated, PaginationParams, PaginationResult, SkipTake};
use crate::query::to_signed;

/// Clamp a raw page number to at least 1
fn clamp_min_page(page: i64) -> u64 {
    page.max(1) as u64
}

/// Clamp a raw page size to at least 1
fn clamp_min_limit(limit: i64) -> u64 {
    limit.max(1) as u64
}

/// Clamp a raw offset or total to at least 0
fn clamp_non_negative(value: i64) -> u64 {
    value.max(0) as u64
}

/// `skip`/`take` for a 1-indexed page
pub fn calculate_skip_take(page: i64, limit: i64) -> SkipTake {
    let page = clamp_min_page(page);
    let take = clamp_min_limit(limit);
    SkipTake {
        skip: (page - 1).saturating_mul(take),
        take,
    }
}

/// `skip`/`take` for a zero-indexed offset
pub fn calculate_skip_take_from_offset(offset: i64, limit: i64) -> SkipTake {
    SkipTake {
        skip: clamp_non_negative(offset),
        take: clamp_min_limit(limit),
    }
}

/// Full response metadata for a page of `total` rows
pub fn calculate_pagination(page: i64, limit: i64, total: i64) -> PaginationResult {
    let page = clamp_min_page(page);
    let limit = clamp_min_limit(limit);
    let total = clamp_non_negative(total);

    let total_pages = if total > 0 { total.div_ceil(limit) } else { 0 };
    let skip = (page - 1).saturating_mul(limit);

    let (start_item, end_item) = if total == 0 {
        (0, 0)
    } else {
        (
            skip.saturating_add(1),
            skip.saturating_add(limit).min(total),
        )
    };

    PaginationResult {
        page,
        limit,
        total,
        total_pages,
        offset: skip,
        skip,
        take: limit,
        has_next: page < total_pages,
        has_previous: page > 1,
        first_page: 1,
        last_page: get_last_page(to_signed(limit), to_signed(total)),
        start_item,
        end_item,
    }
}

/// Full response metadata for an offset; the page is `offset / limit + 1`
pub fn calculate_pagination_from_offset(offset: i64, limit: i64, total: i64) -> PaginationResult {
    let offset = clamp_non_negative(offset);
    let limit = clamp_min_limit(limit);
    let page = offset / limit + 1;
    calculate_pagination(to_signed(page), to_signed(limit), total)
}

impl PaginationParams {
    /// Store-query window for these parameters
    ///
    /// Uses the stored offset, so an explicit unaligned offset is honoured.
    pub fn skip_take(&self) -> SkipTake {
        calculate_skip_take_from_offset(to_signed(self.offset), to_signed(self.limit))
    }

    /// Response metadata for these parameters and a row count
    pub fn paginate(&self, total: u64) -> PaginationResult {
        calculate_pagination(to_signed(self.page), to_signed(self.limit), to_signed(total))
    }
}

impl<T> Paginated<T> {
    /// Wrap a fetched page together with its metadata
    pub fn new(data: Vec<T>, params: &PaginationParams, total: u64) -> Self {
        Self {
            data,
            pagination: params.paginate(total),
        }
    }

    /// Convert every row, keeping the metadata
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
