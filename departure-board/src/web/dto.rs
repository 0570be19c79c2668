//! Data transfer objects for the JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::DepartureRecord;

/// Query parameters for `GET /api/departures`.
///
/// Absent parameters fall back to the board options.
#[derive(Debug, Default, Deserialize)]
pub struct DeparturesQuery {
    /// Station CRS code
    pub station: Option<String>,
    /// Destination CRS filter; empty means no filter
    pub destination: Option<String>,
    /// Number of departures to return
    pub max_rows: Option<u32>,
}

/// Response for `GET /api/departures`.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub departures: Vec<DepartureRecord>,
    /// Station the board is for
    pub station: String,
    /// Display name of the station, when the directory knows it
    pub station_name: Option<String>,
    /// Local time the board was resolved, ISO 8601 without offset
    pub timestamp: String,
    /// True when the departures are synthetic
    pub is_mock_data: bool,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Whether the options file exists
    pub config_loaded: bool,
    /// Number of stations in the directory
    pub stations_loaded: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
