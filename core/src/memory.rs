// core/src/memory.rs

//! In-process [`CatalogStore`] backed by vectors.
//!
//! Natural order is insertion order and distinct values come back in order of
//! first appearance.

use std::cmp::Ordering;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::error::CatalogResult;
use crate::model::{DocumentCollection, Product, ProductField};
use crate::query::{PageWindow, QuerySpec, SortDirection, SortField, SortOrder};
use crate::store::CatalogStore;

#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
  products: RwLock<Vec<Product>>,
  banners: RwLock<Vec<Value>>,
  reviews: RwLock<Vec<Value>>,
}

impl InMemoryCatalogStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_products(products: Vec<Product>) -> Self {
    Self {
      products: RwLock::new(products),
      ..Self::default()
    }
  }

  pub fn insert_product(&self, product: Product) {
    self.products.write().push(product);
  }

  pub fn insert_document(&self, collection: DocumentCollection, document: Value) {
    self.collection(collection).write().push(document);
  }

  pub fn product_count(&self) -> usize {
    self.products.read().len()
  }

  fn collection(&self, collection: DocumentCollection) -> &RwLock<Vec<Value>> {
    match collection {
      DocumentCollection::Banners => &self.banners,
      DocumentCollection::Reviews => &self.reviews,
    }
  }
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
  match field {
    SortField::Price => a.price.total_cmp(&b.price),
    SortField::CreatedAt => a.created_at.cmp(&b.created_at),
  }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
  async fn ping(&self) -> CatalogResult<()> {
    Ok(())
  }

  async fn count_products(&self, spec: &QuerySpec) -> CatalogResult<u64> {
    let guard = self.products.read();
    Ok(guard.iter().filter(|p| spec.matches(p)).count() as u64)
  }

  async fn find_products(
    &self,
    spec: &QuerySpec,
    sort: SortOrder,
    window: PageWindow,
  ) -> CatalogResult<Vec<Product>> {
    let mut matched: Vec<Product> = {
      let guard = self.products.read();
      guard.iter().filter(|p| spec.matches(p)).cloned().collect()
    };

    // sort_by is stable, so ties keep insertion order.
    if let SortOrder::By { field, direction } = sort {
      matched.sort_by(|a, b| match direction {
        SortDirection::Ascending => compare(a, b, field),
        SortDirection::Descending => compare(b, a, field),
      });
    }

    let skip = usize::try_from(window.skip).unwrap_or(usize::MAX);
    let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);
    Ok(matched.into_iter().skip(skip).take(limit).collect())
  }

  async fn distinct_values(&self, field: ProductField) -> CatalogResult<Vec<String>> {
    let guard = self.products.read();
    let mut seen: Vec<String> = Vec::new();
    for product in guard.iter() {
      let value = field.value_of(product);
      if !seen.iter().any(|s| s == value) {
        seen.push(value.to_string());
      }
    }
    Ok(seen)
  }

  async fn documents(&self, collection: DocumentCollection) -> CatalogResult<Vec<Value>> {
    Ok(self.collection(collection).read().clone())
  }
}
