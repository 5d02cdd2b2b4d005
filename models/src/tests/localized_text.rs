use crate::LocalizedText;

/// **VALUE**: Verifies deserialization keeps the backend's key order.
///
/// **WHY THIS MATTERS**: When neither the preferred nor the fallback locale
/// exists, the first stored translation is shown. A sorted map would show
/// `de` before `fr` no matter what the backend sent.
#[test]
fn given_json_object_when_deserialized_then_key_order_is_preserved() {
    let text: LocalizedText =
        serde_json::from_str(r#"{"fr_CA": "Bonjour", "de": "Hallo", "en": "Hello"}"#).unwrap();

    let locales: Vec<&str> = text.locales().collect();
    assert_eq!(locales, vec!["fr_CA", "de", "en"]);
    assert_eq!(text.values().next(), Some("Bonjour"));
}

#[test]
fn given_null_translation_when_deserialized_then_stored_as_empty() {
    let text: LocalizedText = serde_json::from_str(r#"{"en": null, "fr": "Salut"}"#).unwrap();

    assert_eq!(text.get("en"), Some(""));
    assert_eq!(text.get("fr"), Some("Salut"));
}

/// **BUG THIS CATCHES**: PHP encodes an empty associative array as `[]`;
/// without the sequence branch every untranslated field would fail to parse.
#[test]
fn given_empty_json_array_when_deserialized_then_text_is_empty() {
    let text: LocalizedText = serde_json::from_str("[]").unwrap();
    assert!(text.is_empty());

    let non_empty: Result<LocalizedText, _> = serde_json::from_str(r#"["en"]"#);
    assert!(non_empty.is_err());
}

#[test]
fn given_existing_locale_when_inserted_then_value_replaced_in_place() {
    let mut text: LocalizedText = [("en", "Hello"), ("fr", "Bonjour")].into_iter().collect();

    text.insert("en", "Hi");

    assert_eq!(text.len(), 2);
    assert_eq!(text.values().collect::<Vec<_>>(), vec!["Hi", "Bonjour"]);
}

#[test]
fn given_text_when_serialized_then_emits_object_in_stored_order() {
    let text: LocalizedText = [("fr", "Bonjour"), ("en", "Hello")].into_iter().collect();

    let json = serde_json::to_string(&text).unwrap();

    assert_eq!(json, r#"{"fr":"Bonjour","en":"Hello"}"#);
}
