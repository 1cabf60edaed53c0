//! Invoice routes

use axum::{routing::get, Router};

use crate::{handlers::invoices::list_invoices_handler, AppState};

/// Create invoice routes
///
/// `/mobile/v1/invoices` mirrors the real API; `/invoices` is a short alias.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/mobile/v1/invoices", get(list_invoices_handler))
        .route("/invoices", get(list_invoices_handler))
}
