//! Navigation links for paginated responses
//!
//! Builds first/prev/next/last URLs for a [`PaginationResult`] and renders
//! them as an RFC 5988 `Link` header value:
//! `<https://api.example.com/books?page=2&limit=20>; rel="next", ...`

use crate::error::Result;
use crate::page::PaginationResult;
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

/// Navigation URLs for one page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    pub first: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub last: String,
}

impl PageLinks {
    /// Build links relative to `base`
    ///
    /// Existing query pairs on `base` are preserved except `page`, `limit`
    /// and `offset`, which are replaced.
    pub fn build(base: &Url, result: &PaginationResult) -> Self {
        let link = |page: u64| page_url(base, page, result.limit);
        Self {
            first: link(result.first_page),
            prev: result
                .has_previous
                .then(|| link(result.page.min(result.last_page + 1) - 1)),
            next: result.has_next.then(|| link(result.page + 1)),
            last: link(result.last_page),
        }
    }

    /// Parse `base` and build links relative to it
    pub fn from_base_url(base: &str, result: &PaginationResult) -> Result<Self> {
        let base = Url::parse(base)?;
        Ok(Self::build(&base, result))
    }

    /// Render as a `Link` header value
    pub fn to_link_header(&self) -> String {
        let mut parts = vec![format!("<{}>; rel=\"first\"", self.first)];
        if let Some(prev) = &self.prev {
            parts.push(format!("<{prev}>; rel=\"prev\""));
        }
        if let Some(next) = &self.next {
            parts.push(format!("<{next}>; rel=\"next\""));
        }
        parts.push(format!("<{}>; rel=\"last\"", self.last));
        parts.join(", ")
    }
}

fn page_url(base: &Url, page: u64, limit: u64) -> String {
    let mut url = base.clone();
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| !matches!(&**key, PAGE_PARAM | LIMIT_PARAM | "offset"))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PAGE_PARAM, &page.to_string())
        .append_pair(LIMIT_PARAM, &limit.to_string());
    url.into()
}

/// Extract the URL for `target_rel` from a `Link` header value
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    for part in header.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in part.trim().split(';') {
            let segment = segment.trim();
            if let Some(inner) = segment
                .strip_prefix('<')
                .and_then(|s| s.strip_suffix('>'))
            {
                url = Some(inner);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                rel = Some(stripped.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r.split_whitespace().any(|r| r == target_rel) {
                return Some(u.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests;
