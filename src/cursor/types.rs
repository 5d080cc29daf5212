//! Cursor pagination types

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sort-stable row key that can be turned into a cursor
#[derive(Debug, Clone, PartialEq)]
pub enum CursorValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Rendered as ISO-8601 UTC with millisecond precision
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for CursorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            // `-0.0` and `0.0` name the same key
            Self::Float(n) if *n == 0.0 => f.write_str("0"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Timestamp(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

impl From<&str> for CursorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CursorValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for CursorValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for CursorValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for CursorValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for CursorValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for CursorValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Self::Integer(n),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<f64> for CursorValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<Utc>> for CursorValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// Direction of travel relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// `Backward` only for the exact text `backward`; anything else is `Forward`
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("backward") => Self::Backward,
            _ => Self::Forward,
        }
    }
}

/// Normalized cursor pagination parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPaginationParams {
    /// Raw (still encoded) cursor, absent on the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size
    pub limit: u64,
    #[serde(default)]
    pub direction: Direction,
}

impl CursorPaginationParams {
    /// Rows the caller should fetch: one more than `limit` to detect a next page
    pub fn fetch_limit(&self) -> u64 {
        self.limit.saturating_add(1)
    }

    /// The decoded cursor key, `None` on the first page or for a bad cursor
    pub fn decoded_cursor(&self) -> Option<String> {
        self.cursor.as_deref().and_then(super::decode_cursor)
    }
}

/// Limits for [`super::parse_cursor_pagination_params_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorOptions {
    /// Page size when none is given
    pub default_limit: u64,
    /// Largest page size a client may request
    pub max_limit: u64,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// A trimmed page of rows with cursors for the neighbouring pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorPaginationResult<T> {
    pub items: Vec<T>,
    /// Cursor of the last item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// Cursor of the first item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_cursor: Option<String>,
    /// True when an extra row past `limit` was fetched and trimmed
    pub has_more: bool,
}

impl<T> CursorPaginationResult<T> {
    /// Convert every item, keeping the cursors
    pub fn map<U, F>(self, f: F) -> CursorPaginationResult<U>
    where
        F: FnMut(T) -> U,
    {
        CursorPaginationResult {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            previous_cursor: self.previous_cursor,
            has_more: self.has_more,
        }
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
