use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use remark_core::AppError;

use crate::dto::{CommentResponse, DeleteResponse, ErrorResponse, HealthResponse};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/comments", get(list_comments))
        .route("/api/comments/{id}", delete(delete_comment))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/comments",
    responses(
        (status = 200, description = "All comments in the collection", body = [CommentResponse]),
        (status = 500, description = "Fetch failed", body = ErrorResponse),
    ),
    tag = "comments"
)]
pub async fn list_comments(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.db.comment_repo().list().await {
        Ok(comments) => {
            let body: Vec<CommentResponse> = comments.into_iter().map(Into::into).collect();
            axum::Json(body).into_response()
        }
        Err(err) => {
            tracing::error!("Failed to fetch comments: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(ErrorResponse {
                    error: "Failed to fetch comments",
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = DeleteResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse),
    ),
    tag = "comments"
)]
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // The id is parsed here rather than by the extractor: a malformed id is
    // reported the same way as any other failed delete.
    let outcome = match id.parse::<Uuid>() {
        Ok(comment_id) => state.db.comment_repo().delete(comment_id).await,
        Err(e) => Err(AppError::Generic(format!("Invalid comment id '{id}': {e}"))),
    };

    match outcome {
        Ok(()) => axum::Json(DeleteResponse {
            message: "Comment deleted successfully",
        })
        .into_response(),
        Err(err) => {
            tracing::error!("Failed to delete comment: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(ErrorResponse {
                    error: "Failed to delete comment",
                }),
            )
                .into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.comment_repo().health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}
