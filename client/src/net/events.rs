//! `/events` calls.

use records::endpoints::events;
use records::{ApiError, Event};

use super::http::{self, Body};

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn list() -> Result<Vec<Event>, ApiError> {
    http::get(&events::list()).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn upcoming() -> Result<Vec<Event>, ApiError> {
    http::get(&events::upcoming()).await
}

/// Events currently in `status` (`UPCOMING`, `ONGOING`, ...).
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn by_status(status: &str) -> Result<Vec<Event>, ApiError> {
    http::get(&events::search_status(status)).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn create(event: &Event) -> Result<Event, ApiError> {
    http::json(&events::create(), Body::json(event)?).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn update(id: &str, event: &Event) -> Result<Event, ApiError> {
    http::json(&events::update(id), Body::json(event)?).await
}

/// # Errors
///
/// Returns the backend or transport failure.
pub async fn delete(id: &str) -> Result<(), ApiError> {
    http::unit(&events::delete(id), Body::Empty).await
}

/// Enroll `user_id` in the event; returns the event with updated places.
///
/// # Errors
///
/// Returns the backend or transport failure.
pub async fn enroll(event_id: &str, user_id: &str) -> Result<Event, ApiError> {
    http::json(&events::enroll(event_id, user_id), Body::Json(serde_json::json!({}))).await
}
