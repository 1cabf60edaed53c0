//! Pagination parameters echoed in the response

use super::extract::RequestParts;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 50;

/// Pagination parameters of an invoice listing request
///
/// They are echoed back to the client and never applied to fixture contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Read `page` and `limit` from the query, defaulting absent or non-numeric values
    pub fn from_query(request: &RequestParts) -> Self {
        Self {
            page: parse_or(request.query_param("page"), DEFAULT_PAGE),
            limit: parse_or(request.query_param("limit"), DEFAULT_LIMIT),
        }
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
