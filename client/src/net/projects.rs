//! `/projects` calls.

use records::endpoints::projects;
use records::{ApiError, Project};

use super::http::{self, Body};

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn list() -> Result<Vec<Project>, ApiError> {
    http::get(&projects::list()).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn create(project: &Project) -> Result<Project, ApiError> {
    http::json(&projects::create(), Body::json(project)?).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn update(id: &str, project: &Project) -> Result<Project, ApiError> {
    http::json(&projects::update(id), Body::json(project)?).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn delete(id: &str) -> Result<(), ApiError> {
    http::unit(&projects::delete(id), Body::Empty).await
}

/// Add `user_id` to the project team.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn add_member(project_id: &str, user_id: &str) -> Result<Project, ApiError> {
    http::json(&projects::add_member(project_id, user_id), Body::Json(serde_json::json!({}))).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn count() -> Result<u64, ApiError> {
    http::get(&projects::count()).await
}
