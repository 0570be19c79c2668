//! Live departure board client error types.

/// Errors from fetching or normalizing a departure board.
///
/// None of these reach board clients: the resolver logs them and serves
/// synthetic departures instead.
#[derive(Debug, thiserror::Error)]
pub enum LdbError {
    /// No API key configured, so no request was made
    #[error("no API key configured")]
    NoCredentials,

    /// The API key cannot be sent as an HTTP header
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// HTTP request failed (network error, timeout, undecodable body)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}")]
    Status { status: u16 },

    /// Response body did not have the departure board shape
    #[error("malformed departure board: {message}")]
    MalformedPayload { message: String },
}

impl LdbError {
    /// HTTP status returned by the upstream, if it got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            LdbError::Status { status } => Some(*status),
            LdbError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
