//! REST endpoint descriptors for the portal backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call is described here once, as method + path + query
//! parameters relative to the API base URL. The browser client executes them
//! with `gloo-net`, the CLI with `reqwest`, so both issue identical requests.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::fmt;

/// Backend base URL used when no configuration overrides it.
pub const DEFAULT_API_BASE: &str = "http://localhost:8087/api";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// `localStorage` key holding the logged-in email.
pub const EMAIL_STORAGE_KEY: &str = "userEmail";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// One REST call relative to the API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    /// Absolute path below the base URL, starting with `/`.
    pub path: String,
    /// Query parameters in insertion order; values are not yet encoded.
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new() }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Join the path onto `base`, tolerating a trailing slash on the base.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// `/users` routes, keyed by email.
pub mod users {
    use super::Endpoint;

    /// Days of history requested by the recent-uploads listing.
    pub const DEFAULT_RECENT_DAYS: u32 = 7;

    #[must_use]
    pub fn signup() -> Endpoint {
        Endpoint::post("/users/signup")
    }

    #[must_use]
    pub fn login() -> Endpoint {
        Endpoint::post("/users/login")
    }

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::get("/users")
    }

    #[must_use]
    pub fn by_email(email: &str) -> Endpoint {
        Endpoint::get(format!("/users/{email}"))
    }

    #[must_use]
    pub fn update(email: &str) -> Endpoint {
        Endpoint::put(format!("/users/{email}"))
    }

    #[must_use]
    pub fn update_role(email: &str, role: &str) -> Endpoint {
        Endpoint::put(format!("/users/{email}/role")).param("role", role)
    }

    /// Multipart document upload attached to the user's record.
    #[must_use]
    pub fn upload(email: &str) -> Endpoint {
        Endpoint::post(format!("/users/{email}/uploads"))
    }

    #[must_use]
    pub fn upload_photo(email: &str) -> Endpoint {
        Endpoint::post(format!("/users/{email}/photo"))
    }

    #[must_use]
    pub fn recent_uploads(days: u32) -> Endpoint {
        Endpoint::get("/users/uploads/recent").param("days", days)
    }

    #[must_use]
    pub fn enrolled_projects(email: &str) -> Endpoint {
        Endpoint::get(format!("/users/{email}/enrolled-projects"))
    }

    #[must_use]
    pub fn enrolled_events(email: &str) -> Endpoint {
        Endpoint::get(format!("/users/{email}/enrolled-events"))
    }

    /// Download location of a stored upload.
    #[must_use]
    pub fn file(filename: &str) -> Endpoint {
        Endpoint::get(format!("/users/uploads/{filename}"))
    }
}

/// `/events` routes.
pub mod events {
    use super::Endpoint;

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::get("/events")
    }

    #[must_use]
    pub fn by_id(id: &str) -> Endpoint {
        Endpoint::get(format!("/events/{id}"))
    }

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::post("/events")
    }

    #[must_use]
    pub fn update(id: &str) -> Endpoint {
        Endpoint::put(format!("/events/{id}"))
    }

    #[must_use]
    pub fn delete(id: &str) -> Endpoint {
        Endpoint::delete(format!("/events/{id}"))
    }

    #[must_use]
    pub fn enroll(event_id: &str, user_id: &str) -> Endpoint {
        Endpoint::post(format!("/events/{event_id}/enroll/{user_id}"))
    }

    #[must_use]
    pub fn upcoming() -> Endpoint {
        Endpoint::get("/events/upcoming")
    }

    #[must_use]
    pub fn search_name(name: &str) -> Endpoint {
        Endpoint::get("/events/search/name").param("name", name)
    }

    #[must_use]
    pub fn search_location(location: &str) -> Endpoint {
        Endpoint::get("/events/search/location").param("location", location)
    }

    #[must_use]
    pub fn search_status(status: &str) -> Endpoint {
        Endpoint::get("/events/search/status").param("status", status)
    }

    #[must_use]
    pub fn search_budget(min: f64, max: f64) -> Endpoint {
        Endpoint::get("/events/search/budget").param("min", min).param("max", max)
    }

    #[must_use]
    pub fn search_start_after(start: &str) -> Endpoint {
        Endpoint::get("/events/search/startAfter").param("start", start)
    }

    #[must_use]
    pub fn search_end_before(end: &str) -> Endpoint {
        Endpoint::get("/events/search/endBefore").param("end", end)
    }

    #[must_use]
    pub fn search_date_range(start: &str, end: &str) -> Endpoint {
        Endpoint::get("/events/search/dateRange").param("start", start).param("end", end)
    }
}

/// `/projects` routes.
pub mod projects {
    use super::Endpoint;

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::get("/projects")
    }

    #[must_use]
    pub fn by_id(id: &str) -> Endpoint {
        Endpoint::get(format!("/projects/{id}"))
    }

    #[must_use]
    pub fn create() -> Endpoint {
        Endpoint::post("/projects")
    }

    #[must_use]
    pub fn update(id: &str) -> Endpoint {
        Endpoint::put(format!("/projects/{id}"))
    }

    #[must_use]
    pub fn delete(id: &str) -> Endpoint {
        Endpoint::delete(format!("/projects/{id}"))
    }

    #[must_use]
    pub fn add_member(project_id: &str, user_id: &str) -> Endpoint {
        Endpoint::post(format!("/projects/{project_id}/addMember/{user_id}"))
    }

    #[must_use]
    pub fn count() -> Endpoint {
        Endpoint::get("/projects/count")
    }

    #[must_use]
    pub fn search_name(name: &str) -> Endpoint {
        Endpoint::get("/projects/search/name").param("name", name)
    }

    #[must_use]
    pub fn search_status(status: &str) -> Endpoint {
        Endpoint::get("/projects/search/status").param("status", status)
    }

    #[must_use]
    pub fn search_budget(min: f64, max: f64) -> Endpoint {
        Endpoint::get("/projects/search/budget").param("min", min).param("max", max)
    }

    #[must_use]
    pub fn search_start_after(start: &str) -> Endpoint {
        Endpoint::get("/projects/search/startAfter").param("start", start)
    }

    #[must_use]
    pub fn search_end_before(end: &str) -> Endpoint {
        Endpoint::get("/projects/search/endBefore").param("end", end)
    }

    #[must_use]
    pub fn search_date_range(start: &str, end: &str) -> Endpoint {
        Endpoint::get("/projects/search/dateRange").param("start", start).param("end", end)
    }
}

/// `/files` and `/file-types` routes.
pub mod files {
    use super::Endpoint;

    #[must_use]
    pub fn list() -> Endpoint {
        Endpoint::get("/files")
    }

    #[must_use]
    pub fn by_id(id: &str) -> Endpoint {
        Endpoint::get(format!("/files/{id}"))
    }

    #[must_use]
    pub fn update(id: &str) -> Endpoint {
        Endpoint::put(format!("/files/{id}"))
    }

    #[must_use]
    pub fn delete(id: &str) -> Endpoint {
        Endpoint::delete(format!("/files/{id}"))
    }

    #[must_use]
    pub fn types() -> Endpoint {
        Endpoint::get("/file-types")
    }

    #[must_use]
    pub fn search_title(title: &str) -> Endpoint {
        Endpoint::get("/files/search/title").param("title", title)
    }

    #[must_use]
    pub fn search_keyword(keyword: &str) -> Endpoint {
        Endpoint::get("/files/search/keyword").param("keyword", keyword)
    }

    #[must_use]
    pub fn search_author(author: &str) -> Endpoint {
        Endpoint::get("/files/search/author").param("author", author)
    }

    #[must_use]
    pub fn search_date_after(date: &str) -> Endpoint {
        Endpoint::get("/files/search/dateAfter").param("date", date)
    }

    #[must_use]
    pub fn search_date_before(date: &str) -> Endpoint {
        Endpoint::get("/files/search/dateBefore").param("date", date)
    }
}

/// `/admin` moderation routes.
pub mod admin {
    use super::Endpoint;

    #[must_use]
    pub fn users() -> Endpoint {
        Endpoint::get("/admin/users")
    }

    #[must_use]
    pub fn approve(email: &str, role: &str) -> Endpoint {
        Endpoint::put("/admin/users/approve").param("email", email).param("role", role)
    }

    #[must_use]
    pub fn decline(email: &str) -> Endpoint {
        Endpoint::put("/admin/users/decline").param("email", email)
    }

    #[must_use]
    pub fn update_role(user_id: &str, role: &str) -> Endpoint {
        Endpoint::put(format!("/admin/users/{user_id}/role")).param("role", role)
    }

    #[must_use]
    pub fn count_users(role: &str) -> Endpoint {
        Endpoint::get("/admin/users/count").param("role", role)
    }

    #[must_use]
    pub fn count_files() -> Endpoint {
        Endpoint::get("/admin/files/count")
    }

    /// Plain-text summary report.
    #[must_use]
    pub fn summary_report() -> Endpoint {
        Endpoint::get("/admin/report/summary")
    }
}

/// `Authorization` header value for a stored token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
