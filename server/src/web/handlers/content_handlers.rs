// server/src/web/handlers/content_handlers.rs

//! Banner and review collections. Unlike the catalog endpoints these respond
//! with a bare JSON array, which existing clients depend on.

use actix_web::{web, HttpResponse};
use outlet_catalog::service;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::banner_data", skip(app_state))]
pub async fn banner_data_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let banners = service::list_banners(app_state.store()).await?;
  Ok(HttpResponse::Ok().json(banners))
}

#[instrument(name = "handler::review_data", skip(app_state))]
pub async fn review_data_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let reviews = service::list_reviews(app_state.store()).await?;
  Ok(HttpResponse::Ok().json(reviews))
}
