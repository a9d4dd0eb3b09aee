//! HTTP API routes.
//!
//! Status code contract:
//!
//! - missing or malformed caller parameters answer `400`
//! - a missing API key answers `500`
//! - a failed upstream call answers `500` with `details`
//! - every DART status, success or not, answers `200` with the status embedded
//!   in a [`StatementReport`]

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use opendart_core::{DartError, StatementParams};

use crate::{report::StatementReport, service::StatementService};

/// Route serving statement reports.
pub const STATEMENT_ROUTE: &str = "/api/dart";

/// Build the application router, with CORS and request tracing applied.
pub fn build_router(service: StatementService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route(STATEMENT_ROUTE, get(statement))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "opendart",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn statement(
    State(service): State<StatementService>,
    query: Result<Query<StatementParams>, QueryRejection>,
) -> Result<Json<StatementReport>, ApiError> {
    let Query(params) = query.map_err(|e| DartError::InvalidRequest(e.body_text()))?;
    let report = service.fetch_report(&params).await?;
    Ok(Json(report))
}

/// [`DartError`] rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DartError);

impl From<DartError> for ApiError {
    fn from(err: DartError) -> Self {
        Self(err)
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: bool,
    code: &'static str,
    message: &'static str,
    details: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self.0 {
            DartError::InvalidRequest(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
                "필수 파라미터가 누락되었거나 올바르지 않습니다.",
            ),
            DartError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "API 키가 설정되지 않았습니다.",
            ),
            DartError::UpstreamTransport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                "서버 오류가 발생했습니다.",
            ),
            // StatementService turns every DART status into a report, so this
            // arm only fires if that pipeline is bypassed.
            DartError::UpstreamStatus { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_STATUS",
                "서버 오류가 발생했습니다.",
            ),
        };

        let body = ErrorBody {
            error: true,
            code,
            message,
            details: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
