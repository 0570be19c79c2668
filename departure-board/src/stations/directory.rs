//! Station list loaded from disk.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::Crs;

use super::error::StationError;

/// One station as stored in the station file and served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEntry {
    pub crs: String,
    pub name: String,
}

/// Stations available for selection, in file order.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    entries: Vec<StationEntry>,
    names: HashMap<Crs, usize>,
}

impl StationDirectory {
    /// Load the directory from a JSON array of `{ crs, name }` objects.
    ///
    /// Entries whose code is not a valid CRS are skipped. Codes are
    /// normalized to uppercase.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StationError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let entries: Vec<StationEntry> =
            serde_json::from_str(&content).map_err(|e| StationError::Json {
                message: e.to_string(),
            })?;
        Ok(Self::from_entries(entries))
    }

    /// Load the directory, or an empty one if the file is unusable.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(directory) => {
                info!(path = %path.display(), stations = directory.len(), "loaded station directory");
                directory
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "station directory unavailable");
                Self::default()
            }
        }
    }

    /// Build a directory from entries, dropping invalid or repeated codes.
    pub fn from_entries(entries: impl IntoIterator<Item = StationEntry>) -> Self {
        let mut directory = Self::default();
        for entry in entries {
            let Ok(crs) = Crs::parse_normalized(&entry.crs) else {
                continue;
            };
            if directory.names.contains_key(&crs) {
                continue;
            }
            directory.names.insert(crs, directory.entries.len());
            directory.entries.push(StationEntry {
                crs: crs.to_string(),
                name: entry.name,
            });
        }
        directory
    }

    /// Look up a station name by CRS code.
    pub fn name(&self, crs: &Crs) -> Option<&str> {
        self.names
            .get(crs)
            .map(|&i| self.entries[i].name.as_str())
    }

    pub fn entries(&self) -> &[StationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
