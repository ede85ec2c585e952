//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::results::{Facets, FilterError, FilterSpec, Snapshot};
use crate::skyscrapper::{ConversionError, FlightSearchResponse, convert_search_response};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/searches", post(create_search))
        .route("/searches/:id/facets", get(get_facets))
        .route("/searches/:id/results", post(get_results))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Register an upstream search payload.
async fn create_search(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateSearchResponse>, AppError> {
    let payload: FlightSearchResponse = parse_json(&body)?;
    let itineraries = convert_search_response(&payload)?;

    let (search_id, snapshot) = state.snapshots.insert(itineraries).await;
    info!(%search_id, itineraries = snapshot.len(), "registered search");

    Ok(Json(CreateSearchResponse {
        search_id,
        itinerary_count: snapshot.len(),
        facets: snapshot.facets().clone(),
    }))
}

/// Facets of a registered search.
async fn get_facets(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Facets>, AppError> {
    let snapshot = find_snapshot(&state, &id).await?;
    Ok(Json(snapshot.facets().clone()))
}

/// Filter and rank a registered search.
async fn get_results(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ResultsResponse>, AppError> {
    let snapshot = find_snapshot(&state, &id).await?;

    let req: ResultsRequest = if body.is_empty() {
        ResultsRequest::default()
    } else {
        parse_json(&body)?
    };

    let spec = match req.filters {
        Some(filters) => FilterSpec::try_from(filters)?,
        None => FilterSpec::default(),
    };
    let sort = req.sort.unwrap_or_default();

    let view = snapshot.view(&spec, sort);
    Ok(Json(ResultsResponse::from_view(&view, snapshot.facets())))
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "JSON parse error");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Look up a snapshot by its id in string form.
async fn find_snapshot(state: &AppState, id: &str) -> Result<Arc<Snapshot>, AppError> {
    let not_found = || AppError::NotFound {
        message: format!("Search {id} not found or expired"),
    };
    let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;
    state.snapshots.get(&uuid).await.ok_or_else(not_found)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<ConversionError> for AppError {
    fn from(e: ConversionError) -> Self {
        let message = match e {
            ConversionError::Upstream(_) => e.to_string(),
            _ => format!("Invalid search payload: {e}"),
        };
        AppError::BadRequest { message }
    }
}

impl From<FilterError> for AppError {
    fn from(e: FilterError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
