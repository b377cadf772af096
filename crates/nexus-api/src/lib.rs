//! Nexus API - HTTP server
//!
//! Provides the query endpoint, health/readiness probes, a JSON metrics
//! endpoint, and a self-describing OpenAPI surface.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use nexus_core::ServerConfig;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

/// OpenAPI document for the service
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::query::query_handler,
        handlers::health::health_check,
        handlers::health::readiness_check,
    ),
    components(schemas(
        handlers::query::QueryRequest,
        handlers::query::QueryResponse,
        handlers::health::HealthResponse,
        handlers::health::ReadinessResponse,
        error::ApiError,
    )),
    tags(
        (name = "query", description = "Query answering endpoint"),
        (name = "health", description = "Service health and metrics")
    )
)]
pub struct ApiDoc;

/// Build the application router with all layers applied
pub fn create_router(state: Arc<AppState>) -> Router {
    let server = state.config.server.clone();

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(routes::api_routes().with_state(state.clone()))
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state,
            middleware::request_counter,
        ))
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(DefaultBodyLimit::max(server.max_body_size));

    if server.cors_enabled {
        router = router.layer(cors_layer(&server));
    }

    router
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Router over default state, for integration tests
#[cfg(feature = "test-utils")]
pub fn create_router_for_testing() -> Router {
    create_router(Arc::new(AppState::default()))
}
