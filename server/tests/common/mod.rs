// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use actix_web::web;
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use outlet_catalog::{
  CatalogError, CatalogResult, CatalogStore, DocumentCollection, InMemoryCatalogStore, PageWindow, Product,
  ProductField, QuerySpec, SortOrder,
};
use outlet_server::config::AppConfig;
use outlet_server::state::AppState;
use serde_json::Value;
use std::sync::Arc;
use tracing::Level;
use uuid::Uuid;

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    db_user: "outlet".to_string(),
    db_pass: "secret".to_string(),
    db_host: "localhost".to_string(),
    db_port: 5432,
    db_name: "outlet_test".to_string(),
    db_max_connections: 1,
  }
}

pub fn product(name: &str, category: &str, brand: &str, price: f64) -> Product {
  Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: None,
    image: None,
    category: category.to_string(),
    brand: brand.to_string(),
    price,
    ratings: None,
    created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
  }
}

pub fn dated_product(name: &str, price: f64, days: i64) -> Product {
  let mut p = product(name, "general", "acme", price);
  p.created_at += Duration::days(days);
  p
}

/// Store whose every operation fails, as if the database connection dropped.
pub struct BrokenStore;

impl BrokenStore {
  fn fail<T>(operation: &'static str) -> CatalogResult<T> {
    Err(CatalogError::storage(
      operation,
      anyhow::anyhow!("password authentication failed for user \"outlet\""),
    ))
  }
}

#[async_trait]
impl CatalogStore for BrokenStore {
  async fn ping(&self) -> CatalogResult<()> {
    Self::fail("ping")
  }

  async fn count_products(&self, _spec: &QuerySpec) -> CatalogResult<u64> {
    Self::fail("count_products")
  }

  async fn find_products(&self, _spec: &QuerySpec, _sort: SortOrder, _window: PageWindow) -> CatalogResult<Vec<Product>> {
    Self::fail("find_products")
  }

  async fn distinct_values(&self, _field: ProductField) -> CatalogResult<Vec<String>> {
    Self::fail("distinct_values")
  }

  async fn documents(&self, _collection: DocumentCollection) -> CatalogResult<Vec<Value>> {
    Self::fail("documents")
  }
}

pub fn seeded_store() -> InMemoryCatalogStore {
  let store = InMemoryCatalogStore::with_products(vec![
    product("Trail Runner", "shoes", "acme", 50.0),
    product("Court Classic", "shoes", "zeta", 90.0),
    product("Wool Beanie", "hats", "acme", 10.0),
  ]);
  store.insert_document(
    DocumentCollection::Banners,
    serde_json::json!({ "title": "New Season", "image": "banner-1.jpg" }),
  );
  store.insert_document(
    DocumentCollection::Reviews,
    serde_json::json!({ "name": "Sam", "rating": 4, "review": "Comfortable." }),
  );
  store
}

pub fn app_data(store: Arc<dyn CatalogStore>) -> web::Data<AppState> {
  web::Data::new(AppState::new(store, Arc::new(test_config())))
}

/// Builds the full route table over `store`, the way `main` does.
#[allow(unused_macros)]
macro_rules! init_app {
  ($store:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(common::app_data($store))
        .wrap(outlet_server::cors_headers())
        .configure(outlet_server::web::configure_app_routes),
    )
    .await
  };
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
