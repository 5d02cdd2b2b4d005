use crate::{Id, Iso8601DateString, LocalizedText};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub given_name: LocalizedText,
    #[serde(default)]
    pub family_name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_public_name: Option<LocalizedText>,
    #[serde(default)]
    pub roles: Vec<UserRole>,
    #[serde(default)]
    pub disabled: bool,
    pub date_registered: Iso8601DateString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_last_login: Option<Iso8601DateString>,
    #[serde(default)]
    pub must_change_password: bool,
}

/// A user group membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub name_localized: LocalizedText,
    #[serde(default)]
    pub abbreviation: String,
    pub role_id: u32,
    #[serde(default)]
    pub is_displayed_to_publish: bool,
    #[serde(default)]
    pub permit_self_registration: bool,
    #[serde(default)]
    pub permit_metadata_edit: bool,
    #[serde(default)]
    pub is_manager: bool,
}
