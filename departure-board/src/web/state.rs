//! Application state for the web layer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::board::DepartureResolver;
use crate::ldb::LdbClient;
use crate::stations::StationDirectory;

/// Shared application state.
///
/// Board options are not held here: they are re-read from `options_path`
/// on every departures request.
#[derive(Clone)]
pub struct AppState {
    /// Live departures with synthetic fallback
    pub resolver: Arc<DepartureResolver<LdbClient>>,

    /// Stations offered to the front end
    pub stations: Arc<StationDirectory>,

    options_path: Arc<PathBuf>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        resolver: DepartureResolver<LdbClient>,
        stations: StationDirectory,
        options_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            stations: Arc::new(stations),
            options_path: Arc::new(options_path.into()),
        }
    }

    /// Path of the board options file.
    pub fn options_path(&self) -> &Path {
        &self.options_path
    }
}
