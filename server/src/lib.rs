// server/src/lib.rs

//! HTTP surface of the outlet catalog: actix-web routes over a [`CatalogStore`]
//! shared through [`state::AppState`].
//!
//! [`CatalogStore`]: outlet_catalog::CatalogStore

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod web;

use actix_web::middleware::DefaultHeaders;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set and valid, INFO otherwise.
pub fn log_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Every origin may read the catalog.
///
/// Only the allow-origin header is added. OPTIONS preflights are not answered,
/// which is enough for the plain GETs this API serves.
pub fn cors_headers() -> DefaultHeaders {
  DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*"))
}
