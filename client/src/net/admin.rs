//! `/admin` moderation calls.

use records::endpoints::admin;
use records::{ApiError, Role, User};

use super::http::{self, Body};

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn users() -> Result<Vec<User>, ApiError> {
    http::get(&admin::users()).await
}

/// Approve a pending account with `role`.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn approve(email: &str, role: &Role) -> Result<User, ApiError> {
    http::json(&admin::approve(email, role.as_str()), Body::Empty).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn decline(email: &str) -> Result<User, ApiError> {
    http::json(&admin::decline(email), Body::Empty).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn count_users(role: &Role) -> Result<u64, ApiError> {
    http::get(&admin::count_users(role.as_str())).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn count_files() -> Result<u64, ApiError> {
    http::get(&admin::count_files()).await
}

/// Plain-text activity summary.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn summary_report() -> Result<String, ApiError> {
    http::text(&admin::summary_report(), Body::Empty).await
}
