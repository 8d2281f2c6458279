// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use outlet_catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

/// Body returned for every server-side failure. Details stay in the logs.
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Catalog Error: {source}")]
  Catalog {
    #[from]
    source: CatalogError,
  },
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    HttpResponse::build(self.status_code()).json(json!({ "error": SERVER_ERROR_MESSAGE }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
