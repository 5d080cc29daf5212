//! Page and offset pagination
//!
//! Converts page/limit or offset/limit pairs into store-query `skip`/`take`
//! windows and builds the metadata object returned alongside list responses.
//!
//! # Example
//!
//! ```
//! use pagewise::page::calculate_pagination;
//!
//! let meta = calculate_pagination(3, 20, 95);
//! assert_eq!(meta.total_pages, 5);
//! assert_eq!((meta.start_item, meta.end_item), (41, 60));
//! assert!(meta.has_next && meta.has_previous);
//! ```

mod bounds;
mod calculator;
mod types;

pub use bounds::{clamp_page, get_item_range, get_last_page, is_valid_page};
pub use calculator::{
    calculate_pagination, calculate_pagination_from_offset, calculate_skip_take,
    calculate_skip_take_from_offset,
};
pub use types::{ItemRange, Paginated, PaginationParams, PaginationResult, SkipTake};
