use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiClientError {
    /// The request never produced a response (connection refused, DNS, TLS).
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    /// The backend answered with a non-2xx status.
    #[error("Status Error: HTTP {status} - {message} {location}")]
    Status {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// A 2xx body that is not the expected JSON.
    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Header Error: {message} {location}")]
    Header {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiClientError {
    /// The bare message, without the variant prefix or location suffix.
    ///
    /// For status failures this is the server-supplied `message` field or
    /// `API request failed with status {code}`.
    pub fn message(&self) -> &str {
        match self {
            ApiClientError::Http { message, .. }
            | ApiClientError::Status { message, .. }
            | ApiClientError::Json { message, .. }
            | ApiClientError::UrlParse { message, .. }
            | ApiClientError::Header { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ApiClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            ApiClientError::Http { location, .. }
            | ApiClientError::Status { location, .. }
            | ApiClientError::Json { location, .. }
            | ApiClientError::UrlParse { location, .. }
            | ApiClientError::Header { location, .. } => *location,
        }
    }
}

impl From<url::ParseError> for ApiClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ApiClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<InvalidHeaderName> for ApiClientError {
    #[track_caller]
    fn from(error: InvalidHeaderName) -> Self {
        ApiClientError::Header {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<InvalidHeaderValue> for ApiClientError {
    #[track_caller]
    fn from(error: InvalidHeaderValue) -> Self {
        ApiClientError::Header {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
