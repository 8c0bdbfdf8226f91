//! API route definitions

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, ErrorResponse, HealthResponse, MessageResponse};
use crate::config::{Config, CorsConfig};
use crate::store::Catalog;
use crate::types::Cat;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cattery API",
        version = "0.1.0",
        description = "List, feed and delete cats from an in-memory catalog"
    ),
    tags(
        (name = "cats", description = "Cat catalog"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::list_cats,
        handlers::adopt_cat,
        handlers::delete_cat,
    ),
    components(schemas(
        Cat,
        MessageResponse,
        HealthResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}

/// Build the CORS layer. Unless the allowlist is enforced, any origin is
/// mirrored back with credentials allowed.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if !cors.enforce_allowlist {
        if !cors.allowed_origins.is_empty() {
            tracing::warn!(
                "CORS allowlist {:?} is configured but not enforced; all origins are accepted",
                cors.allowed_origins
            );
        }
        return CorsLayer::very_permissive();
    }

    // `AllowOrigin::list` rejects "*"; a wildcard entry means any origin.
    if cors.allowed_origins.iter().any(|origin| origin.trim() == "*") {
        tracing::info!("CORS allowlist contains \"*\"; all origins are accepted");
        return CorsLayer::very_permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let static_files = ServeDir::new(&state.config.static_dir);

    let openapi = ApiDoc::openapi();

    Router::new()
        // Cats
        .route("/cats", get(handlers::list_cats))
        .route("/adopt/{cat_id}", post(handlers::adopt_cat))
        .route("/cats/{cat_id}", delete(handlers::delete_cat))

        // Health
        .route("/health", get(handlers::health))

        // OpenAPI document and Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))

        // Cat pictures and other assets
        .nest_service("/static", static_files)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
