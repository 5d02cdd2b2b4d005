use client_core::error::ConfigError;
use common::ErrorLocation;
use models::Registry;

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};
use std::panic::Location;
use std::path::PathBuf;

/// **VALUE**: Verifies that read errors keep their IO source for debugging.
///
/// **BUG THIS CATCHES**: Would catch removal of the `#[source]` attribute,
/// which hides "permission denied" behind a generic read failure.
#[test]
#[track_caller]
fn given_read_error_when_inspected_then_source_chain_preserved() {
    let err = ConfigError::ReadError {
        location: ErrorLocation::from(Location::caller()),
        path: PathBuf::from("/etc/mojs/registry.json"),
        source: IoError::new(ErrorKind::PermissionDenied, "permission denied"),
    };

    assert!(err.to_string().contains("/etc/mojs/registry.json"));
    let source = err.source().expect("Should have a source");
    assert!(source.to_string().contains("permission denied"));
}

#[test]
fn given_model_validation_error_when_converted_then_reason_is_kept() {
    let model_err = Registry::builder()
        .with_api_base_url("relative/path")
        .build()
        .unwrap_err();

    let err: ConfigError = model_err.into();

    match err {
        ConfigError::ValidationError { reason, .. } => {
            assert_eq!(reason, "Invalid API base URL: relative/path");
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}
