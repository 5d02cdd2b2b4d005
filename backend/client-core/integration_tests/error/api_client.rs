use client_core::error::ApiClientError;
use client_core::error::CoreError;
use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies that status errors carry code, message, and location.
///
/// **WHY THIS MATTERS**: A failed API call is logged once with this Display
/// output. Without the status code and location, the log line cannot be
/// traced back to the endpoint or the call site.
#[test]
#[track_caller]
fn given_status_error_when_formatted_then_includes_status_message_and_location() {
    let err = ApiClientError::Status {
        status: HttpStatusCode(404),
        message: "Not Found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let error_string = format!("{}", err);

    assert!(error_string.contains("Status Error"));
    assert!(error_string.contains("HTTP 404"));
    assert!(error_string.contains("Not Found"));
    assert!(error_string.contains("api_client.rs"));
    assert_eq!(err.message(), "Not Found");
}

#[test]
fn given_serde_error_when_converted_then_becomes_json_variant_with_call_site() {
    let parse_failure = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let err: ApiClientError = parse_failure.into();

    assert!(matches!(err, ApiClientError::Json { .. }));
    assert!(err.status().is_none());
    assert!(err.location().file.contains("api_client.rs"));
}

#[test]
fn given_url_parse_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let err: ApiClientError = url::Url::parse("http://[::1").unwrap_err().into();
    let inner = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), inner);
    assert!(inner.starts_with("URL Parse Error"));
}
