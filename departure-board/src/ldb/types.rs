//! Departure board API response DTOs.
//!
//! These types map onto the JSON rendering of the Live Departure Boards
//! SOAP schema. The rendering is loose: optional elements are simply
//! omitted, and a repeated element that happens to occur once is sent as a
//! bare object rather than a one-element array. `OneOrMany` absorbs that.

use serde::Deserialize;

/// Top-level response from `GetDepartureBoard`.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureBoardResponse {
    #[serde(rename = "GetStationBoardResult")]
    pub station_board: StationBoard,
}

/// The departure board for one station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationBoard {
    /// Human-readable name of the station.
    pub location_name: Option<String>,

    /// CRS code of the station.
    pub crs: Option<String>,

    /// Train services at this station.
    pub train_services: TrainServices,
}

/// Wrapper element around the list of services.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainServices {
    pub service: OneOrMany<ServiceItem>,
}

/// A service on the departure board.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    /// Scheduled time of departure from this station.
    pub std: Option<String>,

    /// Estimated time of departure from this station.
    /// May be "On time", "Delayed", "Cancelled", or a time like "10:15".
    pub etd: Option<String>,

    /// Platform number/letter.
    pub platform: Option<String>,

    /// Train operating company name.
    pub operator: Option<String>,

    /// Train operating company ATOC code.
    pub operator_code: Option<String>,

    /// Whether this service is cancelled.
    pub is_cancelled: Option<bool>,

    /// Destination station(s).
    pub destination: Option<ServiceDestination>,
}

/// Wrapper element around destination locations.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceDestination {
    pub location: Option<OneOrMany<ServiceLocation>>,
}

/// Origin or destination location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    /// Human-readable station name.
    pub location_name: Option<String>,

    /// CRS code.
    pub crs: Option<String>,
}

/// A repeated element that may arrive as a bare object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}
