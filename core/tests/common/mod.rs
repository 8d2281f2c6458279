// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use outlet_catalog::{
  CatalogError, CatalogResult, CatalogStore, DocumentCollection, InMemoryCatalogStore, PageWindow, Product,
  ProductField, QuerySpec, SortOrder,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Level;
use uuid::Uuid;

// --- Product fixtures ---
pub fn base_time() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
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
    created_at: base_time(),
  }
}

/// Same as [`product`] but created `days` after [`base_time`].
pub fn product_at(name: &str, price: f64, days: i64) -> Product {
  let mut p = product(name, "general", "acme", price);
  p.created_at = base_time() + Duration::days(days);
  p
}

pub fn store_with(products: Vec<Product>) -> InMemoryCatalogStore {
  InMemoryCatalogStore::with_products(products)
}

// --- Failing store ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
  Count,
  Find,
  Distinct,
  Documents,
}

/// Delegates to an in-memory store but fails the configured operation.
pub struct FailingStore {
  pub inner: InMemoryCatalogStore,
  pub fail_at: FailAt,
  pub find_calls: AtomicUsize,
}

impl FailingStore {
  pub fn new(inner: InMemoryCatalogStore, fail_at: FailAt) -> Self {
    Self {
      inner,
      fail_at,
      find_calls: AtomicUsize::new(0),
    }
  }

  fn check(&self, at: FailAt, operation: &'static str) -> CatalogResult<()> {
    if self.fail_at == at {
      return Err(CatalogError::storage(
        operation,
        anyhow::anyhow!("simulated connection reset"),
      ));
    }
    Ok(())
  }
}

#[async_trait]
impl CatalogStore for FailingStore {
  async fn ping(&self) -> CatalogResult<()> {
    Ok(())
  }

  async fn count_products(&self, spec: &QuerySpec) -> CatalogResult<u64> {
    self.check(FailAt::Count, "count_products")?;
    self.inner.count_products(spec).await
  }

  async fn find_products(&self, spec: &QuerySpec, sort: SortOrder, window: PageWindow) -> CatalogResult<Vec<Product>> {
    self.find_calls.fetch_add(1, Ordering::SeqCst);
    self.check(FailAt::Find, "find_products")?;
    self.inner.find_products(spec, sort, window).await
  }

  async fn distinct_values(&self, field: ProductField) -> CatalogResult<Vec<String>> {
    self.check(FailAt::Distinct, "distinct_values")?;
    self.inner.distinct_values(field).await
  }

  async fn documents(&self, collection: DocumentCollection) -> CatalogResult<Vec<Value>> {
    self.check(FailAt::Documents, "documents")?;
    self.inner.documents(collection).await
  }
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
