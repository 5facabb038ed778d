//! Router configuration for the document store.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::StoreState;

/// Create the document store router.
pub fn create_router(state: StoreState) -> Router {
    Router::new()
        .route("/documents", get(handlers::list_documents))
        .route(
            "/documents/:name",
            get(handlers::document_info).delete(handlers::delete_document),
        )
        .route("/documents/:name/download", get(handlers::download_document))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
