//! API request handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::routes::AppState;
use crate::error::Error;
use crate::types::Cat;

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error detail
    pub detail: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: Error) -> ApiError {
    match err {
        Error::CatNotFound(id) => {
            tracing::debug!("Cat {} not found", id);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: "Cat not found".into(),
                }),
            )
        }
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: other.to_string(),
            }),
        ),
    }
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// List every cat in the catalog
#[utoipa::path(
    get,
    path = "/cats",
    responses(
        (status = 200, description = "All cats", body = [Cat])
    ),
    tag = "cats"
)]
pub async fn list_cats(State(state): State<AppState>) -> Json<Vec<Cat>> {
    Json(state.catalog.list().await)
}

/// Feed (adopt) a cat
#[utoipa::path(
    post,
    path = "/adopt/{cat_id}",
    params(
        ("cat_id" = i64, Path, description = "Cat id")
    ),
    responses(
        (status = 200, description = "Cat fed", body = MessageResponse),
        (status = 404, description = "Cat not found", body = ErrorResponse)
    ),
    tag = "cats"
)]
pub async fn adopt_cat(
    State(state): State<AppState>,
    Path(cat_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cat = state.catalog.feed(cat_id).await.map_err(api_error)?;

    Ok(Json(MessageResponse {
        message: format!("你喂了 {} {}次", cat.name, cat.feed_count),
    }))
}

/// Delete a cat
#[utoipa::path(
    delete,
    path = "/cats/{cat_id}",
    params(
        ("cat_id" = i64, Path, description = "Cat id")
    ),
    responses(
        (status = 200, description = "Cat removed", body = MessageResponse),
        (status = 404, description = "Cat not found", body = ErrorResponse)
    ),
    tag = "cats"
)]
pub async fn delete_cat(
    State(state): State<AppState>,
    Path(cat_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let cat = state.catalog.delete(cat_id).await.map_err(api_error)?;

    Ok(Json(MessageResponse {
        message: format!(" 你居然弃养{}！How dare you！", cat.name),
    }))
}
