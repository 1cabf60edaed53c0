//! Subscriber domain module
//!
//! Turns an incoming request into the subscriber MSISDN used as the fixture key,
//! plus the pagination parameters echoed back to the client.

mod extract;
mod msisdn;
mod pagination;

pub use extract::{extract_msisdn, RequestParts, MSISDN_PARAM, QUERYSTRING_HEADER};
pub use msisdn::{normalize_msisdn, Msisdn};
pub use pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
