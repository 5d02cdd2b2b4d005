use crate::{Id, LocaleKey, LocalizedText};

use serde::{Deserialize, Serialize};

/// A journal (the backend calls it a context).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub id: Id,
    pub url: String,
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    pub primary_locale: LocaleKey,
    #[serde(default)]
    pub supported_locales: Vec<LocaleKey>,
    #[serde(default)]
    pub enabled: bool,
}
