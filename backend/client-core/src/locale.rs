//! Picks one display string out of a set of translations.

use models::{LocalizedText, Registry};

pub const DEFAULT_LOCALE: &str = "en";

/// Choose the best translation.
///
/// Resolution order (first match wins):
/// 1. `preferred`, if present and non-empty
/// 2. `fallback`, if present and non-empty
/// 3. the first stored translation
///
/// Absent or empty text yields `""`.
pub fn get_localized_string(text: Option<&LocalizedText>, preferred: &str, fallback: &str) -> String {
    let Some(text) = text else {
        return String::new();
    };

    [preferred, fallback]
        .into_iter()
        .filter_map(|locale| text.get(locale))
        .find(|value| !value.is_empty())
        .or_else(|| text.values().next())
        .unwrap_or_default()
        .to_string()
}

/// [`get_localized_string`] bound to the registry's current locale.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    current_locale: String,
}

impl LocaleResolver {
    pub fn new(registry: &Registry) -> Self {
        Self {
            current_locale: registry
                .current_locale()
                .unwrap_or(DEFAULT_LOCALE)
                .to_string(),
        }
    }

    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }

    pub fn resolve(&self, text: Option<&LocalizedText>) -> String {
        get_localized_string(text, &self.current_locale, DEFAULT_LOCALE)
    }

    pub fn resolve_with(
        &self,
        text: Option<&LocalizedText>,
        preferred: &str,
        fallback: &str,
    ) -> String {
        get_localized_string(text, preferred, fallback)
    }
}
