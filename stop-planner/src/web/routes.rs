//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::export::{ExportError, export_filename, stops_to_csv};
use crate::planner::{PlanError, PlanRequest, PlanResult, Planner};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/plan-route", get(plan_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Pick the response format: explicit query value first, then HTML for
/// browsers, otherwise the spreadsheet download.
fn negotiate_format(requested: Option<OutputFormat>, headers: &HeaderMap) -> OutputFormat {
    requested.unwrap_or(if accepts_html(headers) {
        OutputFormat::Html
    } else {
        OutputFormat::Csv
    })
}

/// Plan stops along a route.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<PlanRouteRequest>,
) -> Result<Response, AppError> {
    let coordinates = req
        .coordinates
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "Please provide coordinates.".to_string(),
        })?;

    let request = PlanRequest::parse(coordinates, req.waypoints.as_deref())?;

    let planner = Planner::new(state.routes.as_ref(), state.speeds.as_ref(), &state.config);
    let result = planner.plan(&request).await?;

    match negotiate_format(req.format, &headers) {
        OutputFormat::Csv => csv_response(&result),
        OutputFormat::Json => Ok(Json(PlanRouteResponse::from_result(&result)).into_response()),
        OutputFormat::Html => {
            let html = StopTableTemplate::from_result(&result)
                .render()
                .map_err(|e| AppError::Internal {
                    message: format!("Template error: {}", e),
                })?;
            Ok(Html(html).into_response())
        }
    }
}

/// Render the plan as a CSV attachment.
fn csv_response(result: &PlanResult) -> Result<Response, AppError> {
    let body = stops_to_csv(&result.stops)?;
    let filename = export_filename(Utc::now());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidInput(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::RouteUnavailable(_) => AppError::BadGateway {
                message: "Could not get route data.".to_string(),
            },
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
