//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serves only the front end: Leptos SSR pages, the compiled
//! `/pkg` assets and a health probe. All data lives behind the external REST
//! backend, whose base URL reaches the page through the `ApiBase` context.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::util::config::ApiBase;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{HostError, PortalConfig};

/// Routes that do not depend on the Leptos configuration.
fn base_routes() -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new().route("/healthz", get(healthz)).layer(cors)
}

/// Full host router: health probe, Leptos SSR routes and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &PortalConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let api_base = ApiBase(config.api_base.clone());

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(api_base.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
