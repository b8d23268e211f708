use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use quotery_core::models::NewQuote;

use crate::dto::{ErrorResponse, HealthResponse, MessageResponse, QuotePayload, QuoteResponse};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and the Swagger UI.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes/{id}", put(update_quote).delete(delete_quote))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

fn not_found(id: i64) -> Response {
    let body = ErrorResponse {
        error: "not_found".to_string(),
        message: format!("Quote not found: {id}"),
    };
    (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
}

// ---------------------------------------------------------------------------
// Quotes
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/quotes",
    responses(
        (status = 200, description = "All quotes in the catalog", body = [QuoteResponse]),
    ),
    tag = "quotes"
)]
pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let quotes = state.db.quote_repo().list().await?;

    let response: Vec<QuoteResponse> = quotes.into_iter().map(QuoteResponse::from).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    post,
    path = "/quotes",
    request_body = QuotePayload,
    responses(
        (status = 201, description = "Quote created", body = QuoteResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
    ),
    tag = "quotes"
)]
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<QuotePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let quote = NewQuote::from(body);
    quote.validate()?;

    let id = state.db.quote_repo().insert(&quote).await?;

    let response = QuoteResponse::from(quote.into_quote(id));
    Ok((StatusCode::CREATED, axum::Json(response)))
}

#[utoipa::path(
    put,
    path = "/quotes/{id}",
    params(
        ("id" = i64, Path, description = "Quote ID")
    ),
    request_body = QuotePayload,
    responses(
        (status = 200, description = "Quote replaced", body = QuoteResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "quotes"
)]
pub async fn update_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<QuotePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let quote = NewQuote::from(body);
    quote.validate()?;

    let affected = state.db.quote_repo().update(id, &quote).await?;
    if affected == 0 {
        return Ok(not_found(id));
    }

    let response = QuoteResponse::from(quote.into_quote(id));
    Ok(axum::Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/quotes/{id}",
    params(
        ("id" = i64, Path, description = "Quote ID")
    ),
    responses(
        (status = 200, description = "Quote deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "quotes"
)]
pub async fn delete_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = state.db.quote_repo().delete(id).await?;
    if affected == 0 {
        return Ok(not_found(id));
    }

    Ok(axum::Json(MessageResponse {
        message: "Quote deleted successfully",
    })
    .into_response())
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse),
    ),
    tag = "system"
)]
pub async fn root() -> impl IntoResponse {
    axum::Json(MessageResponse {
        message: "Quote catalog API",
    })
}

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
    let db_status = match state.db.quote_repo().health_check().await {
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
