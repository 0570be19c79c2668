//! Station directory error types.

/// Errors that can occur when loading the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Station file could not be read
    #[error("failed to read station file: {0}")]
    Io(#[from] std::io::Error),

    /// Station file is not a JSON list of stations
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
