//! Presentation helpers shared by the pages and the CLI tables.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::error::ApiError;
use crate::model::{FileDocument, Role, User, UserStatus};

/// Fallback download name when a document has neither title nor filename.
pub const FALLBACK_DOWNLOAD_NAME: &str = "downloaded_file";

#[must_use]
pub fn format_user_name(user: &User) -> String {
    format!("{} {}", user.first_name, user.last_name).trim().to_owned()
}

/// Badge color for an account status.
#[must_use]
pub fn status_color(status: &UserStatus) -> &'static str {
    match status {
        UserStatus::Approved => "#27ae60",
        UserStatus::Pending => "#f39c12",
        UserStatus::Declined => "#e74c3c",
        UserStatus::Other(_) => "#95a5a6",
    }
}

#[must_use]
pub fn role_display(role: &Role) -> &str {
    match role {
        Role::SuperAdmin => "Super Admin",
        Role::Admin => "Administrator",
        Role::Permanent => "Researcher",
        Role::User => "Visitor",
        Role::Other(raw) => raw,
    }
}

/// Badge color for a role.
#[must_use]
pub fn role_color(role: &Role) -> &'static str {
    match role {
        Role::SuperAdmin => "#dc2626",
        Role::Admin => "#ea580c",
        Role::User => "#2563eb",
        Role::Permanent | Role::Other(_) => "#6b7280",
    }
}

/// Upper-cased last dot segment of `filename`, `FILE` when there is none.
#[must_use]
pub fn file_extension(filename: &str) -> String {
    match filename.rsplit('.').next() {
        Some(ext) if !ext.is_empty() => ext.to_uppercase(),
        _ => "FILE".to_owned(),
    }
}

/// Stored filename used to build the download URL.
///
/// Documents missing a filename fall back to the title with every
/// non-alphanumeric character replaced by `_`, suffixed with the lower-cased
/// file type.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] when neither a filename nor both title and
/// file type are present.
pub fn download_filename(doc: &FileDocument) -> Result<String, ApiError> {
    if let Some(name) = doc.filename.as_deref().filter(|n| !n.is_empty()) {
        return Ok(name.to_owned());
    }
    match (doc.title.as_deref(), doc.file_type.as_deref()) {
        (Some(title), Some(file_type)) if !title.is_empty() && !file_type.is_empty() => {
            let stem: String = title
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            Ok(format!("{stem}.{}", file_type.to_lowercase()))
        }
        _ => Err(ApiError::Invalid("File name and type are missing. Cannot download.".to_owned())),
    }
}

/// Name the browser saves a download under.
#[must_use]
pub fn download_name(doc: &FileDocument) -> String {
    doc.title
        .as_deref()
        .filter(|t| !t.is_empty())
        .or_else(|| doc.filename.as_deref().filter(|n| !n.is_empty()))
        .unwrap_or(FALLBACK_DOWNLOAD_NAME)
        .to_owned()
}

/// Notification text for a failed file download.
#[must_use]
pub fn download_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(400) => "Invalid file name provided.".to_owned(),
        Some(404) => "File not found on the server.".to_owned(),
        Some(500) => "Server error while downloading file. Please check the backend logs.".to_owned(),
        _ => format!("Failed to download file: {err}"),
    }
}

/// Locate one of `user`'s uploads by id.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] naming the id when the user has no such upload.
pub fn find_upload(user: &User, id: &str) -> Result<FileDocument, ApiError> {
    user.uploads
        .iter()
        .find(|doc| doc.id == id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("File with ID {id} not found")))
}

/// Short `YYYY-MM-DD` rendering of a backend timestamp; empty stays empty.
#[must_use]
pub fn short_date(value: &str) -> String {
    crate::forms::date_part(value)
}
