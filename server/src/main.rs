// server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use outlet_catalog::CatalogStore;
use outlet_server::config::AppConfig;
use outlet_server::db::PgCatalogStore;
use outlet_server::state::AppState;
use outlet_server::web::configure_app_routes;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_env_filter(outlet_server::log_filter())
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting outlet catalog server...");

  // Any failure before bind aborts the process; no traffic is served.
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e).context("configuration error");
    }
  };

  let pg_store = match PgCatalogStore::connect(&app_config).await {
    Ok(store) => Arc::new(store),
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      return Err(e).context("database connection error");
    }
  };

  if let Err(e) = pg_store.ping().await {
    tracing::error!(error = %e, "Database did not answer the startup ping.");
    pg_store.close().await;
    return Err(e).context("database ping failed");
  }
  tracing::info!("Pinged the database. Successfully connected.");

  let app_state = AppState::new(pg_store.clone(), app_config.clone());

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let server = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(outlet_server::cors_headers())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?;

  tracing::info!("Outlet server running on {}", server_address);
  let served = server.run().await;

  pg_store.close().await;
  served.context("server terminated with an error")
}
