//! Page-number windows for pagination controls
//!
//! Produces the list of page buttons to render, e.g. `1 … 49 50 51 … 100`.
//! The first and last pages are always shown; the window around the current
//! page snaps to either end so the number of entries stays stable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of entries shown when the caller has no preference
pub const DEFAULT_MAX_VISIBLE: usize = 7;

/// Largest `max_visible` a configuration may set
pub const MAX_VISIBLE_LIMIT: usize = 1000;

/// Wire value of [`PageLink::Ellipsis`]
pub const ELLIPSIS: i64 = -1;

/// One entry of a page-number control
///
/// Serializes as a bare integer, with `-1` standing for the ellipsis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLink {
    Page(u64),
    Ellipsis,
}

impl PageLink {
    /// Integer wire form (`-1` for the ellipsis)
    pub fn to_wire(self) -> i64 {
        match self {
            Self::Page(n) => i64::try_from(n).unwrap_or(i64::MAX),
            Self::Ellipsis => ELLIPSIS,
        }
    }

    /// Parse the integer wire form; `None` for values that are neither a page nor `-1`
    pub fn from_wire(value: i64) -> Option<Self> {
        match value {
            ELLIPSIS => Some(Self::Ellipsis),
            n if n >= 1 => Some(Self::Page(n as u64)),
            _ => None,
        }
    }

    /// The page number, `None` for the ellipsis
    pub fn page(self) -> Option<u64> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_wire())
    }
}

impl<'de> Deserialize<'de> for PageLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::from_wire(value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid page link {value}, expected a page or -1"))
        })
    }
}

/// Compute the entries of a page-number control
///
/// When `total_pages <= max_visible` every page is listed. Otherwise pages 1
/// and `total_pages` are always present, a window of `max_visible - 4` pages
/// is centered on `current_page`, and ellipses fill the gaps. Near either end
/// the window grows to use the space the missing ellipsis frees up, so the
/// output has exactly `max_visible` entries whenever `max_visible >= 5`.
///
/// Any `current_page` is accepted; out-of-range values snap to the nearest end.
/// The output has at most `max(max_visible, 5)` entries whatever
/// `total_pages` is, so memory is bounded by `max_visible`. Passing it
/// unchecked from clients is the caller's problem;
/// [`crate::EngineConfig::validate`] rejects values above
/// [`MAX_VISIBLE_LIMIT`].
pub fn page_numbers(current_page: i64, total_pages: u64, max_visible: usize) -> Vec<PageLink> {
    let max = i64::try_from(max_visible).unwrap_or(i64::MAX);
    let total = i64::try_from(total_pages).unwrap_or(i64::MAX);

    if total <= max {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let inner = (max - 4).max(1);
    let start = current_page.saturating_sub(inner / 2);
    let end = start.saturating_add(inner - 1);

    let (start, end, leading_gap, trailing_gap) = if start <= 3 {
        (2, max - 2, false, true)
    } else if end >= total - 2 {
        (total.saturating_sub(max - 3), total - 1, true, false)
    } else {
        (start, end, true, true)
    };

    let mut links = Vec::with_capacity(max_visible.min(total_pages as usize));
    links.push(PageLink::Page(1));
    if leading_gap {
        links.push(PageLink::Ellipsis);
    }
    links.extend((start..=end).map(|n| PageLink::Page(n as u64)));
    if trailing_gap {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Page(total_pages));
    links
}

/// [`page_numbers`] in wire form, with `-1` marking each ellipsis
pub fn get_page_numbers(current_page: i64, total_pages: u64, max_visible: usize) -> Vec<i64> {
    page_numbers(current_page, total_pages, max_visible)
        .into_iter()
        .map(PageLink::to_wire)
        .collect()
}
