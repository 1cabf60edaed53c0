//! Invoice listing handler

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use invoice_mock_domain::{
    subscriber::QUERYSTRING_HEADER, MockError, MockResponse, RequestParts,
};
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    dto::invoices::{ErrorResponse, INVALID_REQUEST_MESSAGE, MOCK_ERROR_MESSAGE},
    AppState,
};

/// Serve the mocked invoice listing for a subscriber
#[utoipa::path(
    get,
    path = "/mobile/v1/invoices",
    params(
        ("msisdn" = Option<String>, Query, description = "Subscriber MSISDN; non-digits are ignored", example = "11959597475"),
        ("page" = Option<i64>, Query, description = "Page number, echoed back (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size, echoed back (default 50)"),
        ("x-querystring" = Option<String>, Header, description = "Query-string-like text holding msisdn=<digits>, used when the query has no msisdn", example = "foo=bar&msisdn=5511999990000")
    ),
    responses(
        (status = 200, description = "Fixture body with the `request` echo injected; status and extra headers may be overridden by the fixture"),
        (status = 400, description = "No msisdn in the query nor in x-querystring", body = ErrorResponse),
        (status = 500, description = "Fixture missing or broken", body = ErrorResponse)
    ),
    tag = "invoices"
)]
pub async fn list_invoices_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    // Decoded pairs in order; duplicated keys are kept and the first one wins.
    let query = Query::<Vec<(String, String)>>::try_from_uri(&uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default();
    let querystring_header = headers
        .get(QUERYSTRING_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
    let request = RequestParts::new(query, querystring_header);

    let result = state
        .invoice_service
        .list_invoices(&request)
        .await
        .and_then(into_http_response);

    match result {
        Ok(response) => response,
        Err(err) => {
            if err.is_client_error() {
                warn!(error = %err, "Rejected invoice request");
            } else {
                error!(error = ?err, "Failed to serve mocked invoices");
            }
            error_response(&err)
        }
    }
}

/// Turn a composed mock into an HTTP response
///
/// Fixture headers are applied last so they win over the JSON content type.
fn into_http_response(mock: MockResponse) -> Result<Response, MockError> {
    let status = StatusCode::from_u16(mock.status).map_err(|err| {
        MockError::invalid_metadata(format!("unusable status {}: {}", mock.status, err))
    })?;

    let mut response = (status, Json(Value::Object(mock.body))).into_response();

    for (name, value) in mock.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            MockError::invalid_metadata(format!("unusable header name {name:?}: {err}"))
        })?;
        let header_value = HeaderValue::from_str(&value).map_err(|err| {
            MockError::invalid_metadata(format!("unusable value for header {name:?}: {err}"))
        })?;
        response.headers_mut().insert(header_name, header_value);
    }

    Ok(response)
}

/// Client-facing error: only the coarse code, never the internal detail
fn error_response(err: &MockError) -> Response {
    let (status, message) = if err.is_client_error() {
        (StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE)
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, MOCK_ERROR_MESSAGE)
    };

    (status, Json(ErrorResponse::new(err.code(), message))).into_response()
}
