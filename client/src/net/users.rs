//! `/users` calls: session, profile and uploads.

use records::endpoints::users;
use records::forms::UploadMetadata;
use records::model::UserUpdate;
use records::{ApiError, FileDocument, LoginRequest, Project, SignupRequest, User};

use super::http::{self, Body};
use crate::util::picked_file::PickedFile;

/// Register an account. The backend answers with a plain-text confirmation.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn signup(req: &SignupRequest) -> Result<String, ApiError> {
    http::text(&users::signup(), Body::json(req)?).await
}

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// Returns the backend or transport failure, or `Decode` for an empty token.
pub async fn login(req: &LoginRequest) -> Result<String, ApiError> {
    let token = http::text(&users::login(), Body::json(req)?).await?;
    let token = token.trim().trim_matches('"').to_owned();
    if token.is_empty() {
        return Err(ApiError::Decode("empty token".to_owned()));
    }
    Ok(token)
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn by_email(email: &str) -> Result<User, ApiError> {
    http::get(&users::by_email(email)).await
}

/// User record for the stored session.
///
/// # Errors
///
/// Returns `MissingSession` when no email is known, otherwise the backend or
/// transport failure.
pub async fn current(email: Option<&str>) -> Result<User, ApiError> {
    let email = email.ok_or(ApiError::MissingSession)?;
    by_email(email).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn update(email: &str, update: &UserUpdate) -> Result<User, ApiError> {
    http::json(&users::update(email), Body::json(update)?).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn update_role(email: &str, role: &str) -> Result<User, ApiError> {
    http::json(&users::update_role(email, role), Body::Empty).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn enrolled_projects(email: &str) -> Result<Vec<Project>, ApiError> {
    http::get(&users::enrolled_projects(email)).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn enrolled_events(email: &str) -> Result<Vec<records::Event>, ApiError> {
    http::get(&users::enrolled_events(email)).await
}

/// Uploads of the last `days` days across all users.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn recent_uploads(days: u32) -> Result<Vec<FileDocument>, ApiError> {
    http::get(&users::recent_uploads(days)).await
}

#[cfg(feature = "hydrate")]
fn form_data() -> Result<web_sys::FormData, ApiError> {
    web_sys::FormData::new().map_err(|e| ApiError::Invalid(format!("{e:?}")))
}

#[cfg(feature = "hydrate")]
fn append(form: &web_sys::FormData, key: &str, value: &str) -> Result<(), ApiError> {
    form.append_with_str(key, value).map_err(|e| ApiError::Invalid(format!("{e:?}")))
}

#[cfg(feature = "hydrate")]
fn append_file(form: &web_sys::FormData, key: &str, file: &PickedFile) -> Result<(), ApiError> {
    form.append_with_blob_and_filename(key, &file.handle, &file.name)
        .map_err(|e| ApiError::Invalid(format!("{e:?}")))
}

/// Upload a document with its metadata as multipart form data. The backend
/// answers with the owner's updated record.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn upload_document(email: &str, file: &PickedFile, meta: &UploadMetadata) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = form_data()?;
        append_file(&form, "file", file)?;
        for (key, value) in meta.multipart_fields() {
            append(&form, key, &value)?;
        }
        http::json(&users::upload(email), Body::Form(form)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, file, meta);
        Err(ApiError::Unavailable)
    }
}

/// Replace the profile photo.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn upload_photo(email: &str, file: &PickedFile) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = form_data()?;
        append_file(&form, "file", file)?;
        http::json(&users::upload_photo(email), Body::Form(form)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, file);
        Err(ApiError::Unavailable)
    }
}

/// Raw bytes of a stored upload.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn download(filename: &str) -> Result<Vec<u8>, ApiError> {
    http::bytes(&users::file(filename)).await
}
