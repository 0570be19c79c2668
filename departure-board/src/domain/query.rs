//! Parameters of a departure board request.

use super::Crs;

/// Rows requested when the caller does not say.
pub const DEFAULT_MAX_ROWS: u8 = 10;

/// Largest board the upstream will return.
pub const MAX_ROWS_LIMIT: u8 = 150;

/// Minutes ahead of now covered when the caller does not say.
pub const DEFAULT_TIME_WINDOW: u16 = 120;

/// Largest time window the upstream accepts.
pub const MAX_TIME_WINDOW: u16 = 120;

/// Which board to fetch and how much of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardQuery {
    /// Station whose departures are shown
    pub station: Crs,
    /// Only show services calling at this station
    pub destination: Option<Crs>,
    /// Number of services to return (1 to 150)
    pub max_rows: u8,
    /// Minutes ahead of now to include (0 to 120)
    pub time_window: u16,
}

impl BoardQuery {
    /// All departures from `station`, default row count.
    pub fn new(station: Crs) -> Self {
        Self {
            station,
            destination: None,
            max_rows: DEFAULT_MAX_ROWS,
            time_window: DEFAULT_TIME_WINDOW,
        }
    }

    /// Filter to services calling at `destination`.
    pub fn with_destination(mut self, destination: Option<Crs>) -> Self {
        self.destination = destination;
        self
    }

    /// Set the row count, clamped to what the upstream accepts.
    pub fn with_max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = max_rows.clamp(1, MAX_ROWS_LIMIT as u32) as u8;
        self
    }

    /// Set the time window, clamped to what the upstream accepts.
    pub fn with_time_window(mut self, minutes: u32) -> Self {
        self.time_window = minutes.min(MAX_TIME_WINDOW as u32) as u16;
        self
    }
}
