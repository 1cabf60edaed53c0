//! API routes

pub mod invoices;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{dto::invoices::ErrorResponse, handlers, AppState};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::invoices::list_invoices_handler,
        health_handler
    ),
    components(
        schemas(ErrorResponse)
    ),
    tags(
        (name = "invoices", description = "Mocked invoice listing"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Invoice Mock API",
        version = "0.1.0",
        description = "Fixture-backed mock of the invoice listing API"
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(invoices::routes())
        .route("/health", axum::routing::get(health_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "ok"
}
