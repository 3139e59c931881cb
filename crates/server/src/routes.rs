use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::product::{repository::SeaOrmProductRepository, service::ProductService};

pub mod products;

/// Shared handler state: the injected product service over the store.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService<SeaOrmProductRepository>>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, product CRUD, and API docs.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let api = Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(
            SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
