use crate::{Id, ModelError, Registry, SessionUser};

use serde_json::json;

#[test]
fn given_host_page_registry_json_when_deserialized_then_fields_are_read() {
    let registry: Registry = serde_json::from_value(json!({
        "apiBaseUrl": "https://journal.example.org/index.php/j/api/v1",
        "csrfToken": "token-123",
        "currentLocale": "fr_CA",
        "user": {"id": 5, "username": "reader", "roles": ["reader"], "email": "r@example.org"},
        "context": null
    }))
    .unwrap();

    assert_eq!(
        registry.api_base_url(),
        Some("https://journal.example.org/index.php/j/api/v1")
    );
    assert_eq!(registry.csrf_token(), Some("token-123"));
    assert_eq!(registry.current_locale(), Some("fr_CA"));
    assert_eq!(registry.user().map(|u| u.username.as_str()), Some("reader"));
    assert!(registry.context().is_none());
}

/// **VALUE**: Verifies an empty registry is accepted and reads as all-absent.
///
/// **WHY THIS MATTERS**: Anonymous pages ship `{}` or empty strings; every
/// consumer must fall back to defaults instead of failing.
#[test]
fn given_empty_registry_json_when_deserialized_then_accessors_return_none() {
    let registry: Registry =
        serde_json::from_value(json!({"apiBaseUrl": "", "csrfToken": null})).unwrap();

    assert!(registry.api_base_url().is_none());
    assert!(registry.csrf_token().is_none());
    assert!(registry.current_locale().is_none());
    assert!(registry.user().is_none());
}

#[test]
fn given_registry_when_serialized_then_csrf_token_is_omitted() {
    let registry = Registry::builder()
        .with_api_base_url("/api")
        .with_csrf_token("secret")
        .build()
        .unwrap();

    let json = serde_json::to_string(&registry).unwrap();

    assert!(!json.contains("secret"));
    assert!(!json.contains("csrfToken"));
    assert!(!format!("{registry:?}").contains("secret"));
}

#[test]
fn given_builder_with_all_fields_when_built_then_registry_is_populated() {
    let registry = Registry::builder()
        .with_api_base_url("http://localhost:8000/api")
        .with_current_locale("en")
        .with_user(SessionUser {
            id: Id::Int(1),
            username: "admin".to_string(),
            roles: vec!["admin".to_string()],
            email: "admin@example.org".to_string(),
            first_name: None,
            last_name: None,
        })
        .build()
        .unwrap();

    assert_eq!(registry.api_base_url(), Some("http://localhost:8000/api"));
    assert!(registry.csrf_token().is_none());
    assert_eq!(registry.user().unwrap().username, "admin");
}

#[test]
fn given_relative_base_url_without_slash_when_built_then_returns_validation_error() {
    let result = Registry::builder().with_api_base_url("api/v1").build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Invalid API base URL: api/v1");
        }
        Ok(_) => panic!("Expected validation error"),
    }
}

#[test]
fn given_locale_with_whitespace_when_built_then_returns_validation_error() {
    let result = Registry::builder().with_current_locale("en US").build();
    assert!(matches!(result, Err(ModelError::Validation { .. })));
}
