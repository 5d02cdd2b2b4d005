use crate::{Id, ModelError, Submission, SubmissionStatus, User};

use serde_json::json;

#[test]
fn given_backend_user_json_when_deserialized_then_camel_case_fields_map() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "username": "editor",
        "email": "editor@example.org",
        "givenName": {"en": "Ada", "fr": "Ada"},
        "familyName": {"en": "Lovelace"},
        "roles": [{
            "id": 3,
            "name": "Journal editor",
            "nameLocalized": {"en": "Journal editor"},
            "abbreviation": "JE",
            "roleId": 16,
            "isManager": true
        }],
        "disabled": false,
        "dateRegistered": "2024-01-01T00:00:00Z",
        "mustChangePassword": false
    }))
    .unwrap();

    assert_eq!(user.id, Id::Int(7));
    assert_eq!(user.given_name.get("en"), Some("Ada"));
    assert!(user.preferred_public_name.is_none());
    assert!(user.date_last_login.is_none());
    assert_eq!(user.roles[0].role_id, 16);
    assert!(user.roles[0].is_manager);
    assert!(!user.roles[0].permit_self_registration);
}

#[test]
fn given_submission_json_when_deserialized_then_status_and_publication_parse() {
    let submission: Submission = serde_json::from_value(json!({
        "id": 12,
        "contextId": 1,
        "currentPublication": {
            "id": 30,
            "title": {"en": "On Computable Numbers"},
            "abstract": {"en": "An abstract."},
            "authors": [],
            "lastModified": "2024-02-01T00:00:00Z",
            "status": 1,
            "version": 1
        },
        "dateLastActivity": "2024-02-02T00:00:00Z",
        "lastModified": "2024-02-02T00:00:00Z",
        "locale": "en",
        "stageId": 3,
        "status": 3
    }))
    .unwrap();

    assert_eq!(submission.status, SubmissionStatus::Published);
    assert!(submission.submissions.is_empty());
    let publication = submission.current_publication.unwrap();
    assert_eq!(publication.title.get("en"), Some("On Computable Numbers"));
    assert_eq!(
        publication.abstract_text.unwrap().get("en"),
        Some("An abstract.")
    );
}

#[test]
fn given_status_when_serialized_then_emits_backend_integer() {
    assert_eq!(
        serde_json::to_value(SubmissionStatus::Archived).unwrap(),
        json!(5)
    );
}

/// **BUG THIS CATCHES**: Would catch silently mapping unknown statuses (2 is
/// not a backend constant) onto a default variant.
#[test]
fn given_unknown_status_integer_when_converted_then_returns_validation_error() {
    match SubmissionStatus::try_from(2) {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Unknown submission status: 2");
        }
        Ok(status) => panic!("Expected validation error, got {status:?}"),
    }

    let parsed: Result<SubmissionStatus, _> = serde_json::from_value(json!(2));
    assert!(parsed.is_err());
}
