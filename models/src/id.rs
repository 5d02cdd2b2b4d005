use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::{Deserialize, Serialize};

/// Backend entity identifier.
///
/// The PHP backend emits integer ids for most entities but some endpoints
/// (and URL paths) carry them as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Str(String),
}

impl Display for Id {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            Id::Int(value) => write!(formatter, "{value}"),
            Id::Str(value) => write!(formatter, "{value}"),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Int(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Str(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Str(value)
    }
}
