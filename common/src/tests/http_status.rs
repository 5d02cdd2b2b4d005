use crate::HttpStatusCode;

#[test]
fn given_status_codes_when_classified_then_ranges_are_exclusive() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(301).is_success());

    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(500).is_client_error());
}

#[test]
fn given_auth_statuses_when_checked_then_only_401_and_403_match() {
    assert!(HttpStatusCode(401).is_auth_failure());
    assert!(HttpStatusCode(403).is_auth_failure());
    assert!(!HttpStatusCode(400).is_auth_failure());
    assert!(!HttpStatusCode(404).is_auth_failure());
}

#[test]
fn given_status_when_displayed_then_renders_number_only() {
    let status = HttpStatusCode::from(503);
    assert_eq!(status.to_string(), "503");
    assert_eq!(status.as_u16(), 503);
}
