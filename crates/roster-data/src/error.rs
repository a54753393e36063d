//! Fetch error types.

/// Error type for fetch operations.
///
/// Both fetch strategies produce exactly these values for the same input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx response status.
    #[error("Network response was not ok: {status}")]
    Network { status: u16 },

    /// Body was not valid JSON for the requested shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The transport could not reach the resource.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request could not be built or sent.
    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// Status code carried by a network error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
