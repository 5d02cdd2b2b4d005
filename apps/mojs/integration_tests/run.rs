use mojs::app::{Args, load, run};
use mojs::error::MojsError;

use models::Registry;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_for(server: &MockServer, locale: &str) -> Registry {
    Registry::builder()
        .with_api_base_url(format!("{}/api", server.uri()))
        .with_current_locale(locale)
        .build()
        .unwrap()
}

#[tokio::test]
async fn given_signed_in_user_and_submission_when_run_then_prints_localized_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 2,
                "username": "editor",
                "email": "editor@example.org",
                "givenName": {"en": "Alan", "fr": "Alain"},
                "dateRegistered": "2021-01-01T00:00:00Z"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/submissions/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 5,
                "contextId": 1,
                "currentPublication": {
                    "id": 50,
                    "title": {"fr": "Titre", "en": "Title"},
                    "lastModified": "2024-01-01T00:00:00Z",
                    "status": 1,
                    "version": 1
                },
                "dateLastActivity": "2024-01-01T00:00:00Z",
                "lastModified": "2024-01-01T00:00:00Z",
                "locale": "fr",
                "stageId": 1,
                "status": 1
            }
        })))
        .mount(&server)
        .await;

    let registry = registry_for(&server, "fr");
    let args = Args {
        submission_id: Some("5".to_string()),
        ..Args::default()
    };
    let mut out = Vec::new();

    run(&registry, &args, &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, "Signed in as editor (Alain)\nSubmission 5: Titre\n");
}

#[tokio::test]
async fn given_anonymous_session_when_run_then_prints_not_signed_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let registry = registry_for(&server, "en");
    let mut out = Vec::new();

    run(&registry, &Args::default(), &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Not signed in\n");
}

#[tokio::test]
async fn given_missing_submission_when_run_then_returns_core_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/submissions/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let registry = registry_for(&server, "en");
    let args = Args {
        submission_id: Some("9".to_string()),
        ..Args::default()
    };
    let mut out = Vec::new();

    let result = run(&registry, &args, &mut out).await;

    match result {
        Err(MojsError::Core { message, .. }) => assert!(message.contains("Not Found")),
        other => panic!("Expected Core error, got {other:?}"),
    }
}

#[test]
fn given_corrupt_registry_file_when_loaded_then_returns_core_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("registry.json");
    std::fs::write(&path, "not json").unwrap();

    let args = Args {
        registry_path: Some(path),
        ..Args::default()
    };

    assert!(matches!(load(&args), Err(MojsError::Core { .. })));
}
