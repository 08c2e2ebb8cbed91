//! `/files` calls plus the upload and download paths that go through
//! `/users`.
//!
//! DESIGN
//! ======
//! `GET /files/{id}` is not reachable for every document, so lookups fall
//! back to the current user's own uploads. The type list falls back to a
//! built-in set when the backend cannot provide one.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use records::display::{download_filename, download_name, find_upload};
use records::endpoints::files;
use records::forms::UploadMetadata;
use records::model::DEFAULT_FILE_TYPES;
use records::{ApiError, FileDocument, User};

use super::http::{self, Body};
use super::users;
use crate::util::picked_file::PickedFile;

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn list() -> Result<Vec<FileDocument>, ApiError> {
    http::get(&files::list()).await
}

/// Fetch one document, falling back to the uploads of `email`.
///
/// # Errors
///
/// Returns `MissingSession` when the direct lookup fails and no email is
/// known, `NotFound` when the user has no such upload, or the failure of the
/// user lookup.
pub async fn get(id: &str, email: Option<&str>) -> Result<FileDocument, ApiError> {
    match http::get(&files::by_id(id)).await {
        Ok(doc) => Ok(doc),
        Err(err) => {
            log::debug!("direct lookup of file {id} failed ({err}); trying own uploads");
            let user = users::current(email).await?;
            find_upload(&user, id)
        }
    }
}

/// Replace the metadata of a stored document.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn update(id: &str, meta: &UploadMetadata) -> Result<FileDocument, ApiError> {
    http::json(&files::update(id), Body::json(meta)?).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn delete(id: &str) -> Result<(), ApiError> {
    http::unit(&files::delete(id), Body::Empty).await
}

pub(crate) fn types_or_default(result: Result<Vec<String>, ApiError>) -> Vec<String> {
    match result {
        Ok(types) if !types.is_empty() => types,
        _ => DEFAULT_FILE_TYPES.iter().map(|t| (*t).to_owned()).collect(),
    }
}

/// Selectable document types. Never fails.
pub async fn types() -> Vec<String> {
    types_or_default(http::get(&files::types()).await)
}

/// Upload a document owned by `email`.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn upload(email: &str, file: &PickedFile, meta: &UploadMetadata) -> Result<User, ApiError> {
    users::upload_document(email, file, meta).await
}

/// Fetch the stored bytes of `doc` and the name to save them under.
///
/// Listing entries may lack the stored filename; those are looked up again
/// through [`get`] before a name is derived from title and type.
///
/// # Errors
///
/// Returns `Invalid` when no filename can be derived, otherwise the
/// backend or transport failure.
pub async fn download(doc: &FileDocument, email: Option<&str>) -> Result<(String, Vec<u8>), ApiError> {
    let fresh;
    let doc = if doc.filename.as_deref().is_some_and(|n| !n.is_empty()) {
        doc
    } else {
        fresh = get(&doc.id, email).await.unwrap_or_else(|_| doc.clone());
        &fresh
    };
    let filename = download_filename(doc)?;
    let bytes = users::download(&filename).await?;
    Ok((download_name(doc), bytes))
}
