//! Blocking-free REST executor for `records::endpoints` descriptors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client and this CLI share endpoint descriptors, so a command
//! here issues the same request the UI would. A token, when present, is sent
//! as `Authorization: Bearer ...` on every call.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use records::ApiError;
use records::endpoints::{Endpoint, Method, bearer};
use records::search::{Filter, FilterOutcome, compose};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CliError;

/// Fallback MIME type for files with an unknown extension.
const OCTET_STREAM: &str = "application/octet-stream";

pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PortalClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().build()?;
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url, token: token.filter(|t| !t.trim().is_empty()) })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Token for commands that cannot run anonymously.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingToken`] when no token was supplied.
    pub fn require_token(&self) -> Result<&str, CliError> {
        self.token().ok_or(CliError::MissingToken)
    }

    fn request(&self, endpoint: &Endpoint) -> reqwest::RequestBuilder {
        let builder = self.http.request(to_reqwest(endpoint.method), endpoint.url(&self.base_url));
        let builder = if endpoint.query.is_empty() { builder } else { builder.query(&endpoint.query) };
        match &self.token {
            Some(token) => builder.header(reqwest::header::AUTHORIZATION, bearer(token)),
            None => builder,
        }
    }

    /// # Errors
    ///
    /// Returns the transport failure, a non-success status or a decode error.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, CliError> {
        let response = check(self.request(endpoint).send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send `body` (or nothing) and decode a JSON answer.
    ///
    /// # Errors
    ///
    /// Returns the transport failure, a non-success status or a decode error.
    pub async fn json<B, T>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<T, CliError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(endpoint);
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        let response = check(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send `body` (or nothing) and return the plain-text answer.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or a non-success status.
    pub async fn text<B>(&self, endpoint: &Endpoint, body: Option<&B>) -> Result<String, CliError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(endpoint);
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        let response = check(request.send().await?).await?;
        Ok(response.text().await?)
    }

    /// Issue a DELETE-style call whose answer is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or a non-success status.
    pub async fn send(&self, endpoint: &Endpoint) -> Result<(), CliError> {
        check(self.request(endpoint).send().await?).await?;
        Ok(())
    }

    /// Post a multipart form and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// Returns the transport failure, a non-success status or a decode error.
    pub async fn multipart<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        form: reqwest::multipart::Form,
    ) -> Result<T, CliError> {
        let response = check(self.request(endpoint).multipart(form).send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Run every search query of `filter` concurrently and compose the
    /// results with `base`, exactly as the listing pages do.
    ///
    /// # Errors
    ///
    /// Returns the first failing query.
    pub async fn apply_filter<F>(&self, filter: &F, base: &[F::Item]) -> Result<FilterOutcome<F::Item>, CliError>
    where
        F: Filter,
        F::Item: DeserializeOwned,
    {
        let queries = filter.queries();
        let sets = futures_util::future::try_join_all(queries.iter().map(|q| self.get::<Vec<F::Item>>(q))).await?;
        Ok(compose(filter, base, &sets))
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Turn non-success statuses into [`ApiError::Status`] with the body text.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CliError::Api(ApiError::Status { status: status.as_u16(), body }))
}

/// MIME type guessed from the file extension for document uploads.
pub fn mime_for(path: &std::path::Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        _ => OCTET_STREAM,
    }
}
