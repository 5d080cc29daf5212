//! Cursor pagination
//!
//! Cursors address rows relative to the last-seen sort key instead of a row
//! offset, so pages do not drift when rows are inserted concurrently.
//!
//! # Overview
//!
//! 1. [`parse_cursor_pagination_params`] normalizes the raw query.
//! 2. The caller queries `fetch_limit()` rows ordered by a stable key, starting
//!    after the decoded cursor.
//! 3. [`build_cursor_pagination_result`] trims the extra row and encodes the
//!    next/previous cursors.

mod builder;
mod codec;
mod types;

pub use builder::{
    build_cursor_pagination_result, parse_cursor_pagination_params,
    parse_cursor_pagination_params_with,
};
pub use codec::{decode_cursor, decode_cursor_timestamp, encode_cursor};
pub use types::{
    CursorOptions, CursorPaginationParams, CursorPaginationResult, CursorValue, Direction,
};
