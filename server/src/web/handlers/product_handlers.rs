// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use outlet_catalog::service;
use outlet_catalog::FilterRequest;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

/// `GET /products`. Query pairs are taken raw so that no parameter shape can
/// cause a rejection; coercion happens in [`FilterRequest::from_query_pairs`].
#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
  let request = FilterRequest::from_query_pairs(query_params.into_inner());
  info!(
    page = request.page,
    limit = request.limit,
    search = %request.search,
    sort_by = ?request.sort_by,
    category = ?request.category,
    brand = ?request.brand,
    min_price = request.min_price,
    max_price = request.max_price,
    "Received product listing request."
  );

  let envelope = service::list_products(app_state.store(), &request).await?;

  info!(
    total_products = envelope.total_products,
    returned = envelope.products.len(),
    "Products fetched successfully."
  );
  Ok(HttpResponse::Ok().json(envelope))
}
