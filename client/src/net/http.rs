//! Request executor for `records::endpoints` descriptors.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached when present.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! backend is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `ApiError::Network`, non-2xx answers to
//! `ApiError::Status` carrying the response text, and body mismatches to
//! `ApiError::Decode`. Callers turn these into notifications.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use records::ApiError;
use records::endpoints::Endpoint;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Request body variants the portal backend accepts.
pub(crate) enum Body {
    Empty,
    Json(serde_json::Value),
    #[cfg(feature = "hydrate")]
    Form(web_sys::FormData),
}

impl Body {
    pub(crate) fn json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        serde_json::to_value(body)
            .map(Self::Json)
            .map_err(|e| ApiError::Invalid(e.to_string()))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: String) -> ApiError {
    ApiError::Status { status, body }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn method(method: records::endpoints::Method) -> gloo_net::http::Method {
    use records::endpoints::Method;
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

#[cfg(feature = "hydrate")]
async fn send(endpoint: &Endpoint, body: Body) -> Result<gloo_net::http::Response, ApiError> {
    let url = endpoint.url(&crate::util::config::api_base());
    let mut builder = gloo_net::http::RequestBuilder::new(&url)
        .method(method(endpoint.method))
        .query(endpoint.query.iter().map(|(k, v)| (*k, v.as_str())));
    if let Some(token) = crate::util::storage::token() {
        builder = builder.header("Authorization", &records::endpoints::bearer(&token));
    }
    let request = match body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(&value),
        Body::Form(form) => builder.body(form),
    }
    .map_err(|e| ApiError::Invalid(e.to_string()))?;

    log::debug!("{endpoint}");
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        log::warn!("{endpoint} failed with {status}");
        return Err(status_error(status, text));
    }
    Ok(resp)
}

/// Execute `endpoint` and decode a JSON response.
pub(crate) async fn json<T: DeserializeOwned>(endpoint: &Endpoint, body: Body) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(endpoint, body).await?;
        let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_json(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(ApiError::Unavailable)
    }
}

/// Execute `endpoint` and return the response text.
pub(crate) async fn text(endpoint: &Endpoint, body: Body) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(endpoint, body).await?;
        resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, body);
        Err(ApiError::Unavailable)
    }
}

/// Execute `endpoint` and ignore any response body.
pub(crate) async fn unit(endpoint: &Endpoint, body: Body) -> Result<(), ApiError> {
    text(endpoint, body).await.map(drop)
}

/// Execute `endpoint` and return the raw response bytes.
pub(crate) async fn bytes(endpoint: &Endpoint) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(endpoint, Body::Empty).await?;
        resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

/// GET a JSON list or record.
pub(crate) async fn get<T: DeserializeOwned>(endpoint: &Endpoint) -> Result<T, ApiError> {
    json(endpoint, Body::Empty).await
}
