//! Pagination, sorting and substring-filter helpers for item listings.
//!
//! Pagination is page based: `skip = (page - 1) * limit`. The listing total is
//! always computed under the same filter as the page itself.

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Resolved page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Apply defaults and clamp the raw query values.
    ///
    /// Missing or non-positive `page` becomes 1; `limit` falls back to 10 and
    /// is clamped to `1..=100`.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p,
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(l) if l >= 1 => l.min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        };
        Self { page, limit }
    }

    /// Number of rows to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// `meta` block returned next to paged data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

impl PageMeta {
    pub fn new(total: i64, pagination: Pagination) -> Self {
        Self {
            total,
            page: pagination.page,
            limit: pagination.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `asc` (case-insensitive) sorts descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Whitelisted sort keys for found/lost item listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSortField {
    #[default]
    CreatedAt,
    Name,
    Location,
    /// `dateFound` for found items, `dateLost` for lost items.
    EventDate,
}

impl ItemSortField {
    /// Map a client-supplied `sortBy` key. Unknown keys fall back to
    /// `createdAt` rather than erroring.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name" | "foundItemName" | "lostItemName") => Self::Name,
            Some("location") => Self::Location,
            Some("dateFound" | "dateLost") => Self::EventDate,
            _ => Self::CreatedAt,
        }
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `ILIKE`.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build a `%term%` pattern for substring matching, or `None` when the term
/// is blank.
pub fn contains_pattern(term: Option<&str>) -> Option<String> {
    let term = term?.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!("%{}%", escape_like(term)))
}
