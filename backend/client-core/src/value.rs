//! Small helpers over untyped JSON and the registry.

use models::Registry;

use serde::de::DeserializeOwned;
use serde_json::Value;

const DEFAULT_GREETING_NAME: &str = "World";

/// Read a value at a dot-separated path such as `user.profile.name`.
///
/// Numeric segments index into arrays (`items.0.title`). Returns `default`
/// when the root is absent, a segment is missing, the walk hits a scalar,
/// or the found value does not deserialize as `T`.
pub fn get_nested<T: DeserializeOwned>(obj: Option<&Value>, path: &str, default: T) -> T {
    let Some(root) = obj else {
        return default;
    };

    let found = path.split('.').try_fold(root, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    });

    found
        .and_then(|value| T::deserialize(value).ok())
        .unwrap_or(default)
}

/// True for JSON objects; arrays and `null` are not objects.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Username of the user embedded in the page, if signed in.
pub fn current_username(registry: &Registry) -> Option<&str> {
    registry.user().map(|user| user.username.as_str())
}

pub fn say_hello(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_GREETING_NAME))
}
