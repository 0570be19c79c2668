//! Conversion from departure board DTOs to canonical departure records.
//!
//! The whole payload either converts or is rejected as malformed; there is
//! no partially converted board. Individual fields, on the other hand, are
//! forgiving: anything missing takes the board default, and times that do
//! not parse give a delay of zero.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    DepartureRecord, DepartureStatus, PLATFORM_TBC, UNKNOWN_DESTINATION, UNKNOWN_OPERATOR,
    delay_minutes,
};

use super::error::LdbError;
use super::types::{DepartureBoardResponse, ServiceItem};

/// Convert a raw `GetDepartureBoard` payload into departure records.
///
/// Services keep the order the upstream sent them in.
pub fn normalize_board(payload: &Value) -> Result<Vec<DepartureRecord>, LdbError> {
    let response =
        DepartureBoardResponse::deserialize(payload).map_err(|e| LdbError::MalformedPayload {
            message: e.to_string(),
        })?;

    let board = response.station_board;
    let records: Vec<DepartureRecord> = board
        .train_services
        .service
        .into_vec()
        .iter()
        .map(convert_service_item)
        .collect();

    debug!(
        station = board.crs.as_deref().unwrap_or("?"),
        location = board.location_name.as_deref().unwrap_or("?"),
        services = records.len(),
        "normalized departure board"
    );

    Ok(records)
}

/// Convert a single service item to a departure record.
pub fn convert_service_item(item: &ServiceItem) -> DepartureRecord {
    let (destination_name, destination_code) = parse_destination(item);

    let operator = item
        .operator
        .as_deref()
        .or(item.operator_code.as_deref())
        .unwrap_or(UNKNOWN_OPERATOR)
        .to_string();

    let scheduled_time = item.std.clone().unwrap_or_default();
    let estimated_time = item.etd.clone().unwrap_or_default();

    let platform = item
        .platform
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(PLATFORM_TBC)
        .to_string();

    // An absent estimate means the service is running to time.
    let status = item
        .etd
        .as_deref()
        .map(DepartureStatus::from_board_text)
        .unwrap_or(DepartureStatus::OnTime);

    let is_cancelled = status.is_cancelled() || item.is_cancelled == Some(true);

    DepartureRecord {
        destination_name,
        destination_code,
        operator,
        delay_minutes: delay_minutes(&scheduled_time, &estimated_time),
        scheduled_time,
        estimated_time,
        platform,
        status,
        is_cancelled,
    }
}

/// Extract destination name and CRS from a service item.
///
/// Split services list several destinations; their names are joined and
/// the first CRS is used.
fn parse_destination(item: &ServiceItem) -> (String, String) {
    let locations = item
        .destination
        .as_ref()
        .and_then(|d| d.location.clone())
        .map(|l| l.into_vec())
        .unwrap_or_default();

    let names: Vec<&str> = locations
        .iter()
        .filter_map(|l| l.location_name.as_deref())
        .collect();

    let name = if names.is_empty() {
        UNKNOWN_DESTINATION.to_string()
    } else {
        names.join(" & ")
    };

    let crs = locations
        .first()
        .and_then(|l| l.crs.clone())
        .unwrap_or_default();

    (name, crs)
}
