use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the host binary.
///
/// Library errors are flattened into a message so the binary can report
/// them uniformly, while keeping where they were raised.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum MojsError {
    /// Error from this binary
    #[error("Mojs Error: {message} {location}")]
    Mojs {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (config loading, API calls)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Command-line usage error
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },
}

impl From<client_core::error::CoreError> for MojsError {
    #[track_caller]
    fn from(error: client_core::error::CoreError) -> Self {
        MojsError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}
