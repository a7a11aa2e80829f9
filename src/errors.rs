/// Failures of the transport capability.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// The original failure of a profile request, before it is mapped.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Invalid profiles body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The error surface seen downstream of the mapping step.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to fetch profiles.")]
    FetchFailed,
}
