//! Entities returned by the backend REST API.

pub mod context;
pub mod submission;
pub mod user;

pub use context::Context;
pub use submission::{Author, Publication, Submission, SubmissionStatus};
pub use user::{User, UserRole};
