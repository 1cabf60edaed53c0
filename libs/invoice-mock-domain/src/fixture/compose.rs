//! Response composition
//!
//! Builds the client-visible response from a fixture. The fixture itself is
//! only read: the body is a fresh map copied from it with the request echo set.

use serde_json::{json, Map, Value};

use super::entity::FixtureDocument;
use crate::subscriber::{Msisdn, Pagination};

/// Field injected into every successful body, for client-side debugging
pub const REQUEST_ECHO_FIELD: &str = "request";

/// Status used when a fixture does not declare `__status`
const DEFAULT_STATUS: u16 = 200;

/// A fully resolved mock response
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Map<String, Value>,
}

/// Compose the response for `msisdn` from a fixture
///
/// - status: the fixture override, else 200
/// - headers: the fixture overrides, else none
/// - body: the fixture body with `request = {msisdn, page, limit}`; an existing
///   `request` field keeps its position but gets the new value
pub fn compose(msisdn: &Msisdn, pagination: Pagination, fixture: &FixtureDocument) -> MockResponse {
    let metadata = fixture.metadata();

    let mut body = fixture.body().clone();
    body.insert(
        REQUEST_ECHO_FIELD.to_string(),
        json!({
            "msisdn": msisdn,
            "page": pagination.page,
            "limit": pagination.limit,
        }),
    );

    MockResponse {
        status: metadata.status.unwrap_or(DEFAULT_STATUS),
        headers: metadata.headers.clone().unwrap_or_default(),
        body,
    }
}
