//! HTTP route handlers.

use std::any::Any;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDateTime};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::{BoardConfig, DEFAULT_START_STATION};
use crate::domain::{BoardQuery, Crs};
use crate::stations::StationEntry;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/departures", get(departures))
        .route("/api/stations", get(stations))
        .route("/health", get(health))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(AnyOrigin),
        )
        .with_state(state)
}

/// Departures for a station, live when possible.
async fn departures(
    State(state): State<AppState>,
    Query(req): Query<DeparturesQuery>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let options_path = state.options_path().to_path_buf();
    let config = tokio::task::spawn_blocking(move || BoardConfig::current(options_path))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("failed to load options: {e}"),
        })?;
    let query = board_query(&config, &req)?;

    info!(
        station = %query.station,
        destination = ?query.destination,
        max_rows = query.max_rows,
        "departures requested"
    );

    let now = Local::now().naive_local();
    let resolution = state
        .resolver
        .resolve_at(Some(config.api_key.as_str()), &query, now)
        .await;

    info!(
        count = resolution.departures.len(),
        is_mock_data = resolution.is_synthetic,
        "returning departures"
    );

    Ok(Json(DeparturesResponse {
        departures: resolution.departures,
        station: query.station.to_string(),
        station_name: state.stations.name(&query.station).map(str::to_string),
        timestamp: iso_timestamp(now),
        is_mock_data: resolution.is_synthetic,
    }))
}

/// Station directory.
async fn stations(State(state): State<AppState>) -> Json<Vec<StationEntry>> {
    Json(state.stations.entries().to_vec())
}

/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: iso_timestamp(Local::now().naive_local()),
        config_loaded: tokio::fs::try_exists(state.options_path())
            .await
            .unwrap_or(false),
        stations_loaded: state.stations.len(),
    })
}

/// Combine request parameters with the board options.
///
/// Bad codes in the request are the caller's fault and rejected. Bad codes
/// in the options fall back to defaults so the board is still served.
/// A blank station falls back to the configured one. An explicitly empty
/// destination clears the configured filter.
fn board_query(config: &BoardConfig, req: &DeparturesQuery) -> Result<BoardQuery, AppError> {
    let station = match req.station.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(code) => Crs::parse_normalized(code).map_err(|_| AppError::BadRequest {
            message: format!("Invalid station CRS: {code}"),
        })?,
        None => configured_station(config)?,
    };

    let destination = match req.destination.as_deref().map(str::trim) {
        Some("") => None,
        Some(code) => Some(Crs::parse_normalized(code).map_err(|_| {
            AppError::BadRequest {
                message: format!("Invalid destination CRS: {code}"),
            }
        })?),
        None => configured_destination(config),
    };

    Ok(BoardQuery::new(station)
        .with_destination(destination)
        .with_max_rows(req.max_rows.unwrap_or(config.max_departures))
        .with_time_window(config.time_window))
}

fn configured_station(config: &BoardConfig) -> Result<Crs, AppError> {
    Crs::parse_normalized(&config.start_station)
        .or_else(|e| {
            warn!(
                start_station = %config.start_station,
                error = %e,
                "configured station is not a CRS code, using {DEFAULT_START_STATION}"
            );
            Crs::parse(DEFAULT_START_STATION)
        })
        .map_err(|e| AppError::Internal {
            message: e.to_string(),
        })
}

fn configured_destination(config: &BoardConfig) -> Option<Crs> {
    let code = config.destination_station.trim();
    if code.is_empty() {
        return None;
    }
    match Crs::parse_normalized(code) {
        Ok(crs) => Some(crs),
        Err(e) => {
            warn!(
                destination_station = %code,
                error = %e,
                "configured destination is not a CRS code, showing all departures"
            );
            None
        }
    }
}

fn iso_timestamp(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    error!("request handler panicked");
    AppError::Internal {
        message: "internal server error".to_string(),
    }
    .into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
