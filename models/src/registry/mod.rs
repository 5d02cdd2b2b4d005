//! The configuration bundle the host page hands to the client.

pub mod builder;

use crate::{Id, LocaleKey};

use common::RedactedToken;

use serde::{Deserialize, Serialize};

/// Read-only configuration supplied by the host page.
///
/// Any field may be empty or missing; the accessors return `None` for empty
/// strings so consumers apply their own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    #[serde(default)]
    pub(crate) api_base_url: String,
    #[serde(default, skip_serializing)]
    pub(crate) csrf_token: RedactedToken,
    #[serde(default)]
    pub(crate) current_locale: String,
    #[serde(default)]
    pub(crate) user: Option<SessionUser>,
    #[serde(default)]
    pub(crate) context: Option<SessionContext>,
}

impl Registry {
    pub fn builder() -> builder::RegistryBuilder {
        builder::RegistryBuilder::default()
    }

    pub fn api_base_url(&self) -> Option<&str> {
        non_empty(&self.api_base_url)
    }

    pub fn csrf_token(&self) -> Option<&str> {
        non_empty(self.csrf_token.as_str())
    }

    pub fn current_locale(&self) -> Option<&str> {
        non_empty(&self.current_locale)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn context(&self) -> Option<&SessionContext> {
        self.context.as_ref()
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// The signed-in user as embedded in the page, a subset of [`crate::User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Id,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// The active journal as embedded in the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub id: Id,
    pub name: String,
    pub path: String,
    pub primary_locale: LocaleKey,
    #[serde(default)]
    pub supported_locales: Vec<LocaleKey>,
}
