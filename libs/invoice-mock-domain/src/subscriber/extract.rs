//! MSISDN extraction from the query string or the `x-querystring` header

use super::msisdn::Msisdn;

/// Query parameter carrying the MSISDN directly
pub const MSISDN_PARAM: &str = "msisdn";

/// Header carrying a query-string-like text such as `foo=bar&msisdn=5511999990000`
pub const QUERYSTRING_HEADER: &str = "x-querystring";

/// Transport-neutral view of an incoming request
///
/// Holds only what extraction needs: the decoded query pairs, in order of
/// appearance, and the `x-querystring` header value decoded lossily as UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParts {
    pub query: Vec<(String, String)>,
    pub querystring_header: Option<String>,
}

impl RequestParts {
    pub fn new(query: Vec<(String, String)>, querystring_header: Option<String>) -> Self {
        Self {
            query,
            querystring_header,
        }
    }

    /// First value of a query parameter
    ///
    /// Repeated keys are not merged: `?msisdn=55&msisdn=11` yields `55`, where an
    /// array-coercing parser would have produced `5511`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Derive the subscriber MSISDN from a request
///
/// The `msisdn` query parameter wins over the `x-querystring` header. Returns
/// `None` when neither yields any digit.
pub fn extract_msisdn(request: &RequestParts) -> Option<Msisdn> {
    if let Some(msisdn) = request
        .query_param(MSISDN_PARAM)
        .and_then(Msisdn::parse)
    {
        return Some(msisdn);
    }

    let header = request.querystring_header.as_deref()?;
    find_msisdn_pair(header).and_then(Msisdn::parse)
}

/// Locate the digits of the first `msisdn = <digits>` pair inside a header value
///
/// The key match is ASCII case-insensitive and whitespace is allowed around `=`.
fn find_msisdn_pair(header: &str) -> Option<&str> {
    let key = MSISDN_PARAM.as_bytes();
    let bytes = header.as_bytes();

    (0..bytes.len().saturating_sub(key.len() - 1))
        .filter(|&start| bytes[start..start + key.len()].eq_ignore_ascii_case(key))
        .find_map(|start| {
            // The key is ASCII, so both ends are char boundaries.
            let rest = header[start + key.len()..].trim_start();
            let rest = rest.strip_prefix('=')?.trim_start();
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            (end > 0).then(|| &rest[..end])
        })
}
