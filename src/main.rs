mod catalog;
mod config;
mod error;
mod filter;
mod models;
mod routes;
mod store;
mod templates;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{catalog::CatalogClient, config::Config, store::RecordStore};

#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/search", get(routes::search))
        .route("/status", get(routes::status))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,marquee=debug".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("marquee/0.1")
        .timeout(config.http_timeout)
        .build()?;

    let store = RecordStore::new();
    let catalog = CatalogClient::new(http, config.catalog_url.clone());

    // Fire and forget: the server answers with an empty catalog until this lands.
    let loader_store = store.clone();
    tokio::spawn(async move {
        catalog::load_into(&catalog, &loader_store).await;
    });

    let app = router(Arc::new(AppState { store }));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, catalog_url = %config.catalog_url, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
