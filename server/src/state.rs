// server/src/state.rs
use crate::config::AppConfig;
use outlet_catalog::CatalogStore;
use std::sync::Arc;

/// Shared by every worker; the store is the single long-lived connection handle.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn CatalogStore>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(store: Arc<dyn CatalogStore>, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }

  pub fn store(&self) -> &dyn CatalogStore {
    self.store.as_ref()
  }
}
