// core/src/store.rs

//! The storage collaborator consumed by the catalog service.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CatalogResult;
use crate::model::{DocumentCollection, Product, ProductField};
use crate::query::{PageWindow, QuerySpec, SortOrder};

/// A read-only document store holding products, banners and reviews.
///
/// Implementations are shared by every request for the lifetime of the process,
/// hence `Send + Sync` and `&self` receivers.
#[async_trait]
pub trait CatalogStore: Send + Sync {
  /// Cheap round-trip used at startup to prove the store is reachable.
  async fn ping(&self) -> CatalogResult<()>;

  /// Number of products matching `spec`, ignoring any pagination.
  async fn count_products(&self, spec: &QuerySpec) -> CatalogResult<u64>;

  /// Products matching `spec`, ordered by `sort`, restricted to `window`.
  async fn find_products(
    &self,
    spec: &QuerySpec,
    sort: SortOrder,
    window: PageWindow,
  ) -> CatalogResult<Vec<Product>>;

  /// Distinct values of `field` across all products, in store grouping order.
  async fn distinct_values(&self, field: ProductField) -> CatalogResult<Vec<String>>;

  /// Every document of `collection`, untouched.
  async fn documents(&self, collection: DocumentCollection) -> CatalogResult<Vec<Value>>;
}
