use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Config Environment Error: {reason} {location}")]
    EnvError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}

impl From<models::ModelError> for ConfigError {
    #[track_caller]
    fn from(error: models::ModelError) -> Self {
        let reason = match error {
            models::ModelError::Validation { message, .. } => message,
        };
        ConfigError::ValidationError {
            location: ErrorLocation::from(std::panic::Location::caller()),
            reason,
        }
    }
}
