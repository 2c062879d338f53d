//! Page arithmetic for the entry listing.

use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 5;

// Offsets and limits are bound as signed 64-bit integers by SQLite.
const MAX_BOUND: u64 = i64::MAX.unsigned_abs();

/// A 1-based page number and page size, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Builds a request, replacing zero values with the defaults.
    #[must_use]
    pub const fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Reads raw query-string values the lenient way browsers' `parseInt` does.
    ///
    /// Missing, non-numeric and non-positive values fall back to the defaults.
    #[must_use]
    pub fn from_query(page: Option<&str>, limit: Option<&str>, default_limit: u64) -> Self {
        let page = page
            .and_then(parse_leading_int)
            .and_then(positive)
            .unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .and_then(parse_leading_int)
            .and_then(positive)
            .unwrap_or(default_limit.max(1));

        Self { page, limit }
    }

    /// Rows to skip: `(page - 1) * limit`.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.limit);
        if offset > MAX_BOUND { MAX_BOUND } else { offset }
    }

    #[must_use]
    pub const fn bounded_limit(&self) -> u64 {
        if self.limit > MAX_BOUND {
            MAX_BOUND
        } else {
            self.limit
        }
    }
}

/// `ceil(total / limit)`; zero when there is nothing to page through.
#[must_use]
pub const fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// One page of results plus the numbers a client needs to render page controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            total_pages: total_pages(total, request.limit),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}

/// Leading-integer parse: skips leading whitespace, takes an optional sign and
/// the digits that follow, ignores the rest. Overflow saturates.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

fn positive(value: i64) -> Option<u64> {
    u64::try_from(value).ok().filter(|v| *v >= 1)
}
