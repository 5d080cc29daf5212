//! # pagewise
//!
//! A stateless pagination engine for list endpoints. Request handlers hand it
//! raw, untrusted query parameters and get back validated parameters, the
//! `skip`/`take` window for their store query, and the metadata object to
//! return with the page.
//!
//! ## Features
//!
//! - **Page and offset pagination**: `?page=3&per_page=20` or `?offset=40&limit=20`
//! - **Cursor pagination**: opaque base64url cursors over a stable sort key
//! - **Fail-soft parsing**: malformed input degrades to defaults, never errors
//! - **Page-number windows**: `1 … 49 50 51 … 100` for pagination controls
//! - **Navigation links**: first/prev/next/last URLs and `Link` headers
//!
//! ## Quick Start
//!
//! ```
//! use pagewise::query::{parse_pagination_params, PaginationOptions, PaginationQuery};
//!
//! let query = PaginationQuery::from_query_string("page=3&per_page=20");
//! let params = parse_pagination_params(&query, &PaginationOptions::default());
//!
//! let window = params.skip_take();
//! assert_eq!((window.skip, window.take), (40, 20));
//!
//! // ... run the store query with skip/take and count the rows ...
//! let meta = params.paginate(95);
//! assert_eq!(meta.total_pages, 5);
//! assert!(meta.has_next);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌────────────┐
//! │    query     │──▶│     page     │──▶│    links     │   │   window   │
//! │ raw → params │   │ skip/take,   │   │ Link header  │   │ 1 … 5 … 9  │
//! │              │   │ metadata     │   │              │   │            │
//! └──────┬───────┘   └──────────────┘   └──────────────┘   └────────────┘
//!        │           ┌──────────────┐
//!        └──────────▶│    cursor    │
//!                    │ encode/trim  │
//!                    └──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Engine configuration
pub mod config;

/// Raw query parsing
pub mod query;

/// Page and offset pagination
pub mod page;

/// Cursor pagination
pub mod cursor;

/// Page-number windows
pub mod window;

/// Navigation links
pub mod links;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::EngineConfig;
pub use error::{Error, Result};

pub use cursor::{
    build_cursor_pagination_result, decode_cursor, encode_cursor, parse_cursor_pagination_params,
    CursorPaginationParams, CursorPaginationResult, CursorValue, Direction,
};
pub use page::{
    calculate_pagination, calculate_pagination_from_offset, calculate_skip_take,
    calculate_skip_take_from_offset, clamp_page, get_item_range, get_last_page, is_valid_page,
    ItemRange, Paginated, PaginationParams, PaginationResult, SkipTake,
};
pub use query::{
    parse_pagination_params, parse_query_number, PaginationOptions, PaginationQuery, QueryValue,
};
pub use window::{get_page_numbers, page_numbers, PageLink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
