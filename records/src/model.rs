//! Portal records mirrored from the backend's JSON responses.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase wire format. Optional fields the
//! backend may omit default to `None` or an empty list so partially populated
//! payloads still decode.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything the client keeps in an id-addressed list.
pub trait Record {
    /// Backend identifier, absent on records that were never persisted.
    fn record_id(&self) -> Option<&str>;
}

/// Account role as encoded in tokens and user payloads.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    Admin,
    Permanent,
    User,
    /// Role string this client does not know about.
    Other(String),
}

impl Role {
    /// Wire value (`ADMIN`, `PERMANENT`, ...).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Permanent => "PERMANENT",
            Self::User => "USER",
            Self::Other(raw) => raw,
        }
    }

    /// Roles an administrator can assign from the console.
    #[must_use]
    pub fn assignable() -> [Role; 4] {
        [Self::SuperAdmin, Self::Admin, Self::Permanent, Self::User]
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "SUPER_ADMIN" => Self::SuperAdmin,
            "ADMIN" => Self::Admin,
            "PERMANENT" => Self::Permanent,
            "USER" => Self::User,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation status of an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    Approved,
    Pending,
    Declined,
    Other(String),
}

impl UserStatus {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Approved => "APPROVED",
            Self::Pending => "PENDING",
            Self::Declined => "DECLINED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for UserStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "APPROVED" => Self::Approved,
            "PENDING" => Self::Pending,
            "DECLINED" => Self::Declined,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for UserStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event status values offered by the UI.
pub const EVENT_STATUSES: [&str; 4] = ["UPCOMING", "ONGOING", "COMPLETED", "CANCELLED"];

/// Project status values offered by the UI.
pub const PROJECT_STATUSES: [&str; 4] = ["ACTIVE", "PLANNED", "COMPLETED", "ON_HOLD"];

/// File types used when the backend's type list cannot be fetched.
pub const DEFAULT_FILE_TYPES: [&str; 4] = ["dataset", "certification", "research paper", "report"];

/// An uploaded research document and its bibliographic metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDocument {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub affiliations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
}

impl Record for FileDocument {
    fn record_id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }
}

/// A portal account as returned by `/users/{email}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub institute: String,
    #[serde(default)]
    pub last_diploma: String,
    #[serde(default)]
    pub research_area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in_url: Option<String>,
    #[serde(default)]
    pub uploads: Vec<FileDocument>,
}

impl Record for User {
    fn record_id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }
}

/// Partial user body for `PUT /users/{email}`; `None` fields are left out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_diploma: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// A scheduled community event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub event_name: String,
    pub location: String,
    pub budget: f64,
    pub max_participants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_places: Option<u32>,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for Event {
    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A research project with a bounded team.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub project_name: String,
    pub description: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub max_team_members: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_spots: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Record for Project {
    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration body for `POST /users/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone: String,
    pub grade: String,
    pub institute: String,
    pub last_diploma: String,
    pub research_area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in_url: Option<String>,
}
