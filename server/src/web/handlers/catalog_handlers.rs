// server/src/web/handlers/catalog_handlers.rs

//! Distinct category and brand names across the whole catalog.

use actix_web::{web, HttpResponse};
use outlet_catalog::service;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let categories = service::list_categories(app_state.store()).await?;
  info!("Fetched {} distinct categories.", categories.len());
  Ok(HttpResponse::Ok().json(json!({ "categories": categories })))
}

#[instrument(name = "handler::list_brands", skip(app_state))]
pub async fn list_brands_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let brands = service::list_brands(app_state.store()).await?;
  info!("Fetched {} distinct brands.", brands.len());
  Ok(HttpResponse::Ok().json(json!({ "brands": brands })))
}
