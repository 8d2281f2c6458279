// server/src/web/routes.rs

use actix_web::{web, HttpResponse};

use crate::web::handlers::{catalog_handlers, content_handlers, product_handlers};

pub const LIVENESS_MESSAGE: &str = "Outlet Server is running...";

async fn liveness_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(LIVENESS_MESSAGE)
}

// Called in `main.rs` (and by the HTTP tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(liveness_handler))
    .route("/products", web::get().to(product_handlers::list_products_handler))
    .route("/categories", web::get().to(catalog_handlers::list_categories_handler))
    .route("/brands", web::get().to(catalog_handlers::list_brands_handler))
    .route("/bannerData", web::get().to(content_handlers::banner_data_handler))
    .route("/reviewData", web::get().to(content_handlers::review_data_handler));
}
