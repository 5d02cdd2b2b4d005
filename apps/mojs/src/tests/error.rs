use crate::error::MojsError;

use client_core::error::{ApiClientError, CoreError};
use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

#[test]
#[track_caller]
fn given_core_error_when_converted_then_message_is_preserved() {
    let core: CoreError = ApiClientError::Status {
        status: HttpStatusCode(500),
        message: "API request failed with status 500".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let err: MojsError = core.into();

    match &err {
        MojsError::Core { message, .. } => {
            assert!(message.contains("API request failed with status 500"));
        }
        other => panic!("Expected Core variant, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Core Error"));
}

#[test]
#[track_caller]
fn given_error_when_serialized_then_tagged_with_variant_name() {
    let err = MojsError::Usage {
        message: "bad".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json["type"], "Usage");
    assert_eq!(json["data"]["message"], "bad");
}
