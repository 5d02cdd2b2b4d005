//! Shared primitives for the MOJS client crates.
//!
//! Nothing in here talks to the network. These are the small value types
//! every other crate leans on for error reporting and secret handling.

pub mod error;
pub mod http_status;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
