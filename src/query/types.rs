//! Raw query types
//!
//! Query parameters arrive from untrusted clients in several shapes: a single
//! string, a repeated key (list of strings) or, from JSON bodies, a number.
//! `QueryValue` keeps that shape explicit instead of flattening everything to
//! strings up front.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One raw query field
///
/// An absent field is modelled as `Option::None` by the containing struct.
/// Deserialization never fails on shape: booleans, objects and lists holding
/// anything but strings and numbers become [`QueryValue::Malformed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Numeric value (JSON bodies)
    Number(f64),
    /// Single string value (`?page=2`)
    Text(String),
    /// Repeated key (`?page=2&page=3`); only the first element is used
    List(Vec<String>),
    /// Present but of an unusable shape; parses as the default
    Malformed,
}

impl QueryValue {
    /// The textual form of the value, unwrapping the first element of a list
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::List(items) => items.first().cloned(),
            Self::Malformed => None,
        }
    }

    /// Classify an arbitrary JSON value
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(Self::Malformed, Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map_or(Self::Malformed, Self::List),
            Value::Null | Value::Bool(_) | Value::Object(_) => Self::Malformed,
        }
    }
}

impl<'de> Deserialize<'de> for QueryValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

// ============================================================================
// Pagination Query
// ============================================================================

/// Raw pagination query as received by a list endpoint
///
/// Every page-size alias seen in the wild is accepted. Unknown keys are
/// ignored when building from pairs or query strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationQuery {
    /// 1-indexed page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<QueryValue>,

    /// Page size (highest priority alias)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<QueryValue>,

    /// Page size alias `per_page`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<QueryValue>,

    /// Page size alias `perPage`
    #[serde(
        rename = "perPage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub per_page_camel: Option<QueryValue>,

    /// Page size alias `pageSize`
    #[serde(
        rename = "pageSize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub page_size_camel: Option<QueryValue>,

    /// Page size alias `page_size`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<QueryValue>,

    /// Zero-indexed offset; takes precedence over `page`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<QueryValue>,

    /// Opaque cursor for cursor pagination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<QueryValue>,

    /// Cursor direction (`forward` or `backward`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<QueryValue>,
}

impl PaginationQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URL query string such as `page=2&limit=10`
    ///
    /// A leading `?` is ignored. Repeated keys become [`QueryValue::List`].
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Build a query from decoded key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            if let Some(&pos) = index.get(key) {
                grouped[pos].1.push(value.into());
            } else {
                index.insert(key.to_string(), grouped.len());
                grouped.push((key.to_string(), vec![value.into()]));
            }
        }

        let mut query = Self::new();
        for (key, mut values) in grouped {
            let value = if values.len() == 1 {
                QueryValue::Text(values.remove(0))
            } else {
                QueryValue::List(values)
            };
            query.set(&key, value);
        }
        query
    }

    /// Set a field by its wire name
    ///
    /// Returns `false` when the key is not a pagination field.
    pub fn set(&mut self, key: &str, value: impl Into<QueryValue>) -> bool {
        let slot = match key {
            "page" => &mut self.page,
            "limit" => &mut self.limit,
            "per_page" => &mut self.per_page,
            "perPage" => &mut self.per_page_camel,
            "pageSize" => &mut self.page_size_camel,
            "page_size" => &mut self.page_size,
            "offset" => &mut self.offset,
            "cursor" => &mut self.cursor,
            "direction" => &mut self.direction,
            _ => return false,
        };
        *slot = Some(value.into());
        true
    }

    /// Builder-style variant of [`PaginationQuery::set`]
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.set(key, value);
        self
    }

    /// The first present page-size field, in priority order
    ///
    /// `limit`, then `per_page`, `perPage`, `pageSize`, `page_size`. A present
    /// but malformed field still wins over later aliases.
    pub fn page_size_field(&self) -> Option<&QueryValue> {
        self.limit
            .as_ref()
            .or(self.per_page.as_ref())
            .or(self.per_page_camel.as_ref())
            .or(self.page_size_camel.as_ref())
            .or(self.page_size.as_ref())
    }
}
