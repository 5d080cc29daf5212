//! Query parameter normalization
//!
//! Turns raw, possibly malformed query input into validated
//! [`PaginationParams`]. Nothing here fails: bad input degrades to the
//! configured defaults or is clamped into range.

use super::types::{PaginationQuery, QueryValue};
use crate::page::PaginationParams;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Smallest accepted page number
pub const MIN_PAGE: u64 = 1;

/// Smallest accepted page size
pub const MIN_LIMIT: u64 = 1;

/// Page size used when the query does not specify one
pub const DEFAULT_LIMIT: u64 = 20;

/// Upper bound for the page size
pub const MAX_LIMIT: u64 = 100;

/// Page used when the query does not specify one
pub const DEFAULT_PAGE: u64 = 1;

/// Overridable defaults for [`parse_pagination_params`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    /// Page size when none is given
    pub default_limit: u64,
    /// Largest page size a client may request
    pub max_limit: u64,
    /// Page when none is given
    pub default_page: u64,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            default_page: DEFAULT_PAGE,
        }
    }
}

impl PaginationOptions {
    /// Create options with the standard defaults (20 / 100 / 1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default page size
    #[must_use]
    pub fn with_default_limit(mut self, limit: u64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the maximum page size
    #[must_use]
    pub fn with_max_limit(mut self, limit: u64) -> Self {
        self.max_limit = limit;
        self
    }

    /// Set the default page
    #[must_use]
    pub fn with_default_page(mut self, page: u64) -> Self {
        self.default_page = page;
        self
    }
}

/// Parse a single raw query value as an integer
///
/// Absent, malformed, unparseable and non-finite values yield `default`. For
/// a list the first element is used; an empty list yields `default`.
/// Fractions are floored.
pub fn parse_query_number(value: Option<&QueryValue>, default: i64) -> i64 {
    match value {
        None => default,
        Some(QueryValue::Number(n)) => floor_finite(*n).unwrap_or(default),
        Some(QueryValue::Text(text)) => parse_text_number(text, default),
        Some(QueryValue::List(items)) => match items.first() {
            Some(text) => parse_text_number(text, default),
            None => default,
        },
        Some(QueryValue::Malformed) => {
            debug!("Ignoring malformed query value, using {}", default);
            default
        }
    }
}

fn parse_text_number(text: &str, default: i64) -> i64 {
    let parsed = text.trim().parse::<f64>().ok().and_then(floor_finite);
    if parsed.is_none() {
        debug!("Ignoring unparseable query number '{}', using {}", text, default);
    }
    parsed.unwrap_or(default)
}

fn floor_finite(n: f64) -> Option<i64> {
    if n.is_finite() {
        // float-to-int `as` saturates at the i64 bounds
        Some(n.floor() as i64)
    } else {
        None
    }
}

/// Saturating conversion for configured bounds
pub(crate) fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Normalize a raw query into page, limit and offset
///
/// - `page` is clamped to at least 1.
/// - `limit` comes from the first present of `limit`, `per_page`, `perPage`,
///   `pageSize`, `page_size` and is clamped to `[1, max_limit]`.
/// - A present `offset` wins over `page`: the page is recomputed as
///   `offset / limit + 1` and the offset is kept verbatim (clamped to 0).
pub fn parse_pagination_params(
    query: &PaginationQuery,
    options: &PaginationOptions,
) -> PaginationParams {
    let max_limit = options.max_limit.max(MIN_LIMIT);

    let page = parse_query_number(query.page.as_ref(), to_signed(options.default_page))
        .max(to_signed(MIN_PAGE)) as u64;

    let limit = parse_query_number(query.page_size_field(), to_signed(options.default_limit))
        .clamp(to_signed(MIN_LIMIT), to_signed(max_limit)) as u64;

    if let Some(raw) = &query.offset {
        let offset = parse_query_number(Some(raw), 0).max(0) as u64;
        if query.page.is_some() {
            debug!("Both page and offset supplied, offset {} wins", offset);
        }
        return PaginationParams {
            page: offset / limit + 1,
            limit,
            offset,
        };
    }

    PaginationParams {
        page,
        limit,
        offset: (page - 1).saturating_mul(limit),
    }
}
