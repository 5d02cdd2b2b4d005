use crate::RedactedToken;

/// **VALUE**: Verifies the CSRF token never leaks through Debug or Display.
///
/// **WHY THIS MATTERS**: The registry is logged at debug level during startup.
/// A leaked session token in a log file is a session hijack.
#[test]
fn given_token_when_formatted_then_value_is_hidden() {
    let token = RedactedToken::new("s3cr3t-csrf");

    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    assert!(!debug.contains("s3cr3t"), "Debug must not expose the token");
    assert!(!display.contains("s3cr3t"), "Display must not expose the token");
    assert_eq!(token.as_str(), "s3cr3t-csrf");
    assert_eq!(token.len(), 11);
}

#[test]
fn given_empty_token_when_debug_formatted_then_marked_empty() {
    let token = RedactedToken::default();
    assert!(token.is_empty());
    assert_eq!(format!("{:?}", token), "RedactedToken(<empty>)");
}

#[test]
fn given_json_null_or_string_when_deserialized_then_token_is_built() {
    let from_null: RedactedToken = serde_json::from_str("null").unwrap();
    let from_string: RedactedToken = serde_json::from_str("\"abc\"").unwrap();

    assert!(from_null.is_empty());
    assert_eq!(from_string.as_str(), "abc");
}

/// **BUG THIS CATCHES**: Would catch someone deriving `Serialize` on the token,
/// which would let it slip into a JSON dump of the registry.
#[test]
fn given_token_when_serialized_then_returns_error() {
    let token = RedactedToken::new("abc");
    let result = serde_json::to_string(&token);
    assert!(result.is_err(), "Serialization must be refused");
}
