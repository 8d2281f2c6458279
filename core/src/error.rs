// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  /// The storage collaborator failed while running `operation`.
  /// Never surfaced verbatim to HTTP callers.
  #[error("Storage operation '{operation}' failed. Source: {source}")]
  Storage {
    operation: &'static str,
    #[source]
    source: AnyhowError,
  },
}

impl CatalogError {
  /// Wraps any backend error as a storage failure for `operation`.
  pub fn storage<E>(operation: &'static str, err: E) -> Self
  where
    E: Into<AnyhowError>,
  {
    CatalogError::Storage {
      operation,
      source: err.into(),
    }
  }

  pub fn operation(&self) -> &'static str {
    match self {
      CatalogError::Storage { operation, .. } => *operation,
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
