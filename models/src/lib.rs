//! Data shapes mirroring the PHP backend.
//!
//! This crate contains pure data structures: the entities the backend
//! returns, the JSON envelope it wraps them in, and the registry the host
//! page hands to the client. Models have no I/O - they are deserialized,
//! passed around, and dropped.
//!
//! ## Architecture
//!
//! - **common**: Error location and secret primitives
//! - **models** (this crate): Pure data structures
//! - **client-core**: Behavior operating on models (API calls, locale lookup)
//! - **mojs**: Host binary wiring everything together

pub mod api_response;
pub mod backend;
pub mod error;
pub mod id;
pub mod localized_text;
pub mod registry;

#[cfg(test)]
mod tests;

pub use api_response::{ApiError, ApiResponse};
pub use backend::{Author, Context, Publication, Submission, SubmissionStatus, User, UserRole};
pub use error::model_error::ModelError;
pub use id::Id;
pub use localized_text::LocalizedText;
pub use registry::builder::RegistryBuilder;
pub use registry::{Registry, SessionContext, SessionUser};

pub use common::ErrorLocation;

/// Locale code such as `en` or `fr_CA`.
pub type LocaleKey = String;

/// ISO 8601 timestamp as sent by the backend; kept verbatim.
pub type Iso8601DateString = String;
