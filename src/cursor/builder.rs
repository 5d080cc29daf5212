//! Cursor parameter parsing and result building

use super::codec::encode_cursor;
use super::types::{
    CursorOptions, CursorPaginationParams, CursorPaginationResult, CursorValue, Direction,
};
use crate::query::{parse_query_number, to_signed, PaginationQuery, QueryValue, MIN_LIMIT};

/// Parse cursor parameters with the standard limits (default 20, max 100)
pub fn parse_cursor_pagination_params(query: &PaginationQuery) -> CursorPaginationParams {
    parse_cursor_pagination_params_with(query, &CursorOptions::default())
}

/// Parse cursor parameters with custom limits
///
/// The cursor is passed through untouched; it is only decoded by the caller
/// (see [`CursorPaginationParams::decoded_cursor`]).
pub fn parse_cursor_pagination_params_with(
    query: &PaginationQuery,
    options: &CursorOptions,
) -> CursorPaginationParams {
    let max_limit = options.max_limit.max(MIN_LIMIT);
    let limit = parse_query_number(query.limit.as_ref(), to_signed(options.default_limit))
        .clamp(to_signed(MIN_LIMIT), to_signed(max_limit)) as u64;

    let direction = Direction::from_raw(raw_text(query.direction.as_ref()).as_deref());
    let cursor = raw_text(query.cursor.as_ref());

    CursorPaginationParams {
        cursor,
        limit,
        direction,
    }
}

fn raw_text(value: Option<&QueryValue>) -> Option<String> {
    value.and_then(QueryValue::as_text)
}

/// Trim a fetched page to `limit` rows and derive its cursors
///
/// The caller fetches `limit + 1` rows when more may exist; the extra row is
/// only used to set `has_more`. `next_cursor` comes from the last kept row and
/// `previous_cursor` from the first. Both cursors are taken from this one
/// forward page: navigating backward means re-querying with
/// `previous_cursor` as a "before" anchor.
pub fn build_cursor_pagination_result<T, F, C>(
    items: Vec<T>,
    limit: u64,
    get_cursor: F,
) -> CursorPaginationResult<T>
where
    F: Fn(&T) -> C,
    C: Into<CursorValue>,
{
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let has_more = items.len() > limit;

    let mut items = items;
    if has_more {
        items.truncate(limit);
    }

    let next_cursor = items.last().map(|item| encode_cursor(get_cursor(item)));
    let previous_cursor = items.first().map(|item| encode_cursor(get_cursor(item)));

    CursorPaginationResult {
        items,
        next_cursor,
        previous_cursor,
        has_more,
    }
}
