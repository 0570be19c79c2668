//! Domain types for the departure board.
//!
//! Station codes and clock times enforce their invariants at construction
//! time. Departure records are the canonical shape every data source is
//! normalized into.

mod departure;
mod query;
mod station;
mod time;

pub use departure::{
    DepartureRecord, DepartureStatus, PLATFORM_TBC, UNKNOWN_DESTINATION, UNKNOWN_OPERATOR,
};
pub use query::{
    BoardQuery, DEFAULT_MAX_ROWS, DEFAULT_TIME_WINDOW, MAX_ROWS_LIMIT, MAX_TIME_WINDOW,
};
pub use station::{Crs, InvalidCrs};
pub use time::{ClockTime, TimeError, delay_minutes};
