//! The canonical departure record served to board clients.

use std::fmt;

use serde::{Serialize, Serializer};

/// Destination shown when the upstream omits one.
pub const UNKNOWN_DESTINATION: &str = "Unknown";

/// Operator shown when the upstream omits one.
pub const UNKNOWN_OPERATOR: &str = "Unknown";

/// Platform shown when none has been allocated yet.
pub const PLATFORM_TBC: &str = "TBC";

/// State of a departure as shown in the board's status column.
///
/// The upstream's estimated-departure field doubles as a status field: it
/// holds either a word ("On time", "Cancelled", ...) or a clock time. Known
/// words are classified; anything else is kept verbatim in `Raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartureStatus {
    OnTime,
    /// Running late by the given number of minutes (0 when unknown).
    Delayed(i32),
    Cancelled,
    PlatformChange,
    Raw(String),
}

impl DepartureStatus {
    /// Classify a status word from the upstream feed.
    ///
    /// Matching is case-insensitive, so the feed's "On time" and the
    /// board's "On Time" are the same state.
    ///
    /// ```
    /// use departure_board::domain::DepartureStatus;
    ///
    /// assert_eq!(DepartureStatus::from_board_text("On time"), DepartureStatus::OnTime);
    /// assert_eq!(DepartureStatus::from_board_text("Cancelled"), DepartureStatus::Cancelled);
    /// assert_eq!(
    ///     DepartureStatus::from_board_text("10:07"),
    ///     DepartureStatus::Raw("10:07".into())
    /// );
    /// ```
    pub fn from_board_text(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "on time" => Self::OnTime,
            "delayed" => Self::Delayed(0),
            "cancelled" => Self::Cancelled,
            "platform change" => Self::PlatformChange,
            _ => Self::Raw(text.to_string()),
        }
    }

    /// The text shown on the board.
    pub fn as_board_text(&self) -> &str {
        match self {
            Self::OnTime => "On Time",
            Self::Delayed(_) => "Delayed",
            Self::Cancelled => "Cancelled",
            Self::PlatformChange => "Platform Change",
            Self::Raw(text) => text,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for DepartureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_board_text())
    }
}

impl Serialize for DepartureStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_board_text())
    }
}

/// One row on the departure board.
///
/// Serialized with the field names board front ends already consume
/// (`destination`, `scheduled_departure`, `delay`, `cancelled`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartureRecord {
    /// Human-readable destination name
    #[serde(rename = "destination")]
    pub destination_name: String,

    /// Destination CRS code, empty when unknown
    #[serde(rename = "destination_crs")]
    pub destination_code: String,

    /// Train operating company name
    pub operator: String,

    /// Scheduled departure, "HH:MM" or empty
    #[serde(rename = "scheduled_departure")]
    pub scheduled_time: String,

    /// Estimated departure, "HH:MM", a status word, or empty
    #[serde(rename = "estimated_departure")]
    pub estimated_time: String,

    pub platform: String,

    pub status: DepartureStatus,

    /// Minutes late (negative when early), 0 when not computable
    #[serde(rename = "delay")]
    pub delay_minutes: i32,

    #[serde(rename = "cancelled")]
    pub is_cancelled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_words() {
        assert_eq!(DepartureStatus::from_board_text("On Time"), DepartureStatus::OnTime);
        assert_eq!(DepartureStatus::from_board_text("on time"), DepartureStatus::OnTime);
        assert_eq!(
            DepartureStatus::from_board_text("Delayed"),
            DepartureStatus::Delayed(0)
        );
        assert_eq!(
            DepartureStatus::from_board_text("CANCELLED"),
            DepartureStatus::Cancelled
        );
        assert_eq!(
            DepartureStatus::from_board_text("Platform Change"),
            DepartureStatus::PlatformChange
        );
    }

    #[test]
    fn raw_text_is_kept_verbatim() {
        let status = DepartureStatus::from_board_text("Starts here");
        assert_eq!(status, DepartureStatus::Raw("Starts here".into()));
        assert_eq!(status.as_board_text(), "Starts here");
        assert!(!status.is_cancelled());
    }

    #[test]
    fn serializes_as_board_text() {
        assert_eq!(
            serde_json::to_string(&DepartureStatus::Delayed(10)).unwrap(),
            r#""Delayed""#
        );
        assert_eq!(
            serde_json::to_string(&DepartureStatus::OnTime).unwrap(),
            r#""On Time""#
        );
        assert_eq!(
            serde_json::to_string(&DepartureStatus::Raw("10:07".into())).unwrap(),
            r#""10:07""#
        );
    }

    #[test]
    fn record_uses_board_field_names() {
        let record = DepartureRecord {
            destination_name: "Reading".into(),
            destination_code: "RDG".into(),
            operator: "GWR".into(),
            scheduled_time: "10:00".into(),
            estimated_time: "10:07".into(),
            platform: "4".into(),
            status: DepartureStatus::Raw("10:07".into()),
            delay_minutes: 7,
            is_cancelled: false,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "destination": "Reading",
                "destination_crs": "RDG",
                "operator": "GWR",
                "scheduled_departure": "10:00",
                "estimated_departure": "10:07",
                "platform": "4",
                "status": "10:07",
                "delay": 7,
                "cancelled": false,
            })
        );
    }
}
