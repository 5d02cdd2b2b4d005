//! Locale code to display string mapping.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Translations of one piece of content, keyed by locale code.
///
/// Keys keep the order in which they were inserted or deserialized; the
/// locale resolver's last-resort fallback depends on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    entries: Vec<(String, String)>,
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a translation. A replaced key keeps its position.
    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        let locale = locale.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(key, _)| *key == locale) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((locale, text)),
        }
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == locale)
            .map(|(_, text)| text.as_str())
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Translations in stored order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, text)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedText
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut text = LocalizedText::new();
        for (locale, value) in iter {
            text.insert(locale, value);
        }
        text
    }
}

impl Serialize for LocalizedText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (locale, text) in &self.entries {
            map.serialize_entry(locale, text)?;
        }
        map.end()
    }
}

struct LocalizedTextVisitor;

impl<'de> Visitor<'de> for LocalizedTextVisitor {
    type Value = LocalizedText;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of locale codes to strings")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut text = LocalizedText::new();
        while let Some((locale, value)) = access.next_entry::<String, Option<String>>()? {
            // PHP serializes missing translations as null.
            text.insert(locale, value.unwrap_or_default());
        }
        Ok(text)
    }

    // PHP's json_encode turns an empty associative array into `[]`.
    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        if access.next_element::<serde::de::IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::custom(
                "expected an empty array for an empty localized text",
            ));
        }
        Ok(LocalizedText::new())
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LocalizedTextVisitor)
    }
}
