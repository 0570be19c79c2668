//! Station directory.
//!
//! Provides the list of stations the front end offers for selection, and
//! CRS code → station name lookup, loaded from a JSON file at startup.

mod directory;
mod error;

pub use directory::{StationDirectory, StationEntry};
pub use error::StationError;
