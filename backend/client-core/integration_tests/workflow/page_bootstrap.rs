// End-to-end: a registry published by the host page drives the client and
// the locale resolver against a mock backend.

use client_core::config::{REGISTRY_FILE_NAME, load_registry};
use client_core::{ApiClient, CurrentUser, LocaleResolver};
use models::Id;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_published_registry_when_page_boots_then_user_and_title_resolve_in_page_locale() {
    // GIVEN: A backend and a registry file pointing at it
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index.php/j/api/v1/users/me"))
        .and(header("x-csrf-token", "page-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 4,
                "username": "author",
                "email": "author@example.org",
                "givenName": {"en": "Grace", "fr_CA": "Grâce"},
                "familyName": {"en": "Hopper"},
                "dateRegistered": "2022-01-01T00:00:00Z"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/index.php/j/api/v1/submissions/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 8,
                "contextId": 1,
                "currentPublication": {
                    "id": 80,
                    "title": {"de": "Titel", "en": "Title"},
                    "lastModified": "2024-01-01T00:00:00Z",
                    "status": 1,
                    "version": 2
                },
                "dateLastActivity": "2024-01-01T00:00:00Z",
                "lastModified": "2024-01-01T00:00:00Z",
                "locale": "en",
                "stageId": 4,
                "status": 4
            }
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let registry_path = dir.path().join(REGISTRY_FILE_NAME);
    std::fs::write(
        &registry_path,
        json!({
            "apiBaseUrl": format!("{}/index.php/j/api/v1", server.uri()),
            "csrfToken": "page-token",
            "currentLocale": "fr_CA"
        })
        .to_string(),
    )
    .unwrap();

    // WHEN: The page boots
    let registry = load_registry(&registry_path).unwrap();
    let client = ApiClient::new(&registry).unwrap();
    let resolver = LocaleResolver::new(&registry);

    let user = client.fetch_current_user().await;
    let submission = client.fetch_submission(&Id::Int(8)).await.unwrap();

    // THEN: The user's name uses the page locale, the title falls back to English
    let CurrentUser::Found(user) = user else {
        panic!("Expected the current user");
    };
    assert_eq!(resolver.resolve(Some(&user.given_name)), "Grâce");
    assert_eq!(resolver.resolve(Some(&user.family_name)), "Hopper");

    let title = submission
        .current_publication
        .as_ref()
        .map(|publication| &publication.title);
    assert_eq!(resolver.resolve(title), "Title");
}

/// **VALUE**: Verifies concurrent calls are independent network operations.
///
/// **WHY THIS MATTERS**: The client does no deduplication; two identical calls
/// in flight must both reach the server and both complete.
#[tokio::test]
async fn given_identical_concurrent_requests_when_awaited_then_both_reach_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let registry = models::Registry::builder()
        .with_api_base_url(format!("{}/api", server.uri()))
        .build()
        .unwrap();
    let client = ApiClient::new(&registry).unwrap();

    let (first, second) = tokio::join!(client.fetch_current_user(), client.fetch_current_user());

    assert_eq!(first, CurrentUser::Absent);
    assert_eq!(second, CurrentUser::Absent);
}
