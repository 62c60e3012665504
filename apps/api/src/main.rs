mod catalog;
mod config;
mod engine;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::source::{
    load_snapshot, CatalogSource, FileCatalogSource, HttpCatalogSource,
};
use crate::config::{CatalogLocation, Config};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing catalog location)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting InternCompass API v{}", env!("CARGO_PKG_VERSION"));

    // Load the catalog once at startup; handlers serve from this immutable snapshot
    let source: Box<dyn CatalogSource> = match &config.catalog {
        CatalogLocation::File(path) => Box::new(FileCatalogSource::new(path)),
        CatalogLocation::Url(url) => Box::new(HttpCatalogSource::new(url.clone())),
    };
    let snapshot = load_snapshot(source.as_ref()).await?;

    // Build app state
    let state = AppState {
        catalog: Arc::new(snapshot),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
