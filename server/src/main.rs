//! SSR host for the research portal front end.
#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{HostError, PortalConfig};

#[tokio::main]
async fn main() -> Result<(), HostError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PortalConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, api_base = %config.api_base, "portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
