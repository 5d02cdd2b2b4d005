use crate::error::model_error::ModelError;
use crate::{ErrorLocation, Id, Iso8601DateString, LocaleKey, LocalizedText};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Workflow status of a submission, serialized as the backend's integer constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SubmissionStatus {
    Queued = 1,
    Published = 3,
    Declined = 4,
    Archived = 5,
}

impl TryFrom<u8> for SubmissionStatus {
    type Error = ModelError;

    #[track_caller]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SubmissionStatus::Queued),
            3 => Ok(SubmissionStatus::Published),
            4 => Ok(SubmissionStatus::Declined),
            5 => Ok(SubmissionStatus::Archived),
            other => Err(ModelError::Validation {
                message: format!("Unknown submission status: {other}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl From<SubmissionStatus> for u8 {
    fn from(status: SubmissionStatus) -> Self {
        status as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Id,
    pub context_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_publication: Option<Publication>,
    pub date_last_activity: Iso8601DateString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_submitted: Option<Iso8601DateString>,
    pub last_modified: Iso8601DateString,
    pub locale: LocaleKey,
    pub stage_id: u32,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_workflow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_published: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: Id,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<LocalizedText>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright_holder: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<Iso8601DateString>,
    pub last_modified: Iso8601DateString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_url: Option<String>,
    pub status: u8,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Id,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub family_name: LocalizedText,
    #[serde(default)]
    pub given_name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<LocalizedText>,
    #[serde(default)]
    pub include_in_browse: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    pub publication_id: Id,
    #[serde(default)]
    pub seq: i32,
    pub user_group_id: Id,
}
