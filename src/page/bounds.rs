//! Page validity and clamping helpers

use super::types::ItemRange;

/// Whether `page` addresses existing data
///
/// With no rows only page 1 is valid.
pub fn is_valid_page(page: i64, limit: i64, total: i64) -> bool {
    if page < 1 || limit < 1 {
        return false;
    }
    if total <= 0 {
        return page == 1;
    }
    page as u64 <= (total as u64).div_ceil(limit as u64)
}

/// Last addressable page, never less than 1
pub fn get_last_page(limit: i64, total: i64) -> u64 {
    if total <= 0 || limit < 1 {
        return 1;
    }
    (total as u64).div_ceil(limit as u64)
}

/// Clamp `page` into `[1, get_last_page(limit, total)]`
pub fn clamp_page(page: i64, limit: i64, total: i64) -> u64 {
    let last = get_last_page(limit, total);
    (page.max(1) as u64).min(last)
}

/// Inclusive 1-indexed item range of a page
///
/// `page` and `limit` are clamped to at least 1. The range is `0..=0` when
/// there are no rows.
pub fn get_item_range(page: i64, limit: i64, total: i64) -> ItemRange {
    if total <= 0 {
        return ItemRange::default();
    }
    let page = page.max(1) as u64;
    let limit = limit.max(1) as u64;
    let total = total as u64;
    let skip = (page - 1).saturating_mul(limit);
    ItemRange {
        start: skip.saturating_add(1),
        end: skip.saturating_add(limit).min(total),
    }
}
