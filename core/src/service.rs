// core/src/service.rs

//! Catalog read operations. Each one receives the store it runs against;
//! nothing here holds a connection of its own.

use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::error::CatalogResult;
use crate::filter::FilterRequest;
use crate::model::{DocumentCollection, ProductField, ResultEnvelope};
use crate::query::compile;
use crate::store::CatalogStore;

/// Runs one filtered, sorted, paginated listing.
///
/// The count is taken over the unpaginated query so that `total_pages` does not
/// depend on which page was asked for. If either the count or the fetch fails,
/// no envelope is produced.
#[instrument(
  name = "catalog::list_products",
  skip(store, request),
  fields(page = request.page, limit = request.limit),
  err(Display)
)]
pub async fn list_products(store: &dyn CatalogStore, request: &FilterRequest) -> CatalogResult<ResultEnvelope> {
  let compiled = compile(request);
  debug!(constraints = compiled.spec.constraints().len(), sort = ?compiled.sort, "Compiled product query.");

  let total_products = store.count_products(&compiled.spec).await.map_err(|e| {
    error!(error = %e, "Counting products failed.");
    e
  })?;

  let products = store
    .find_products(&compiled.spec, compiled.sort, request.window())
    .await
    .map_err(|e| {
      error!(error = %e, "Fetching products failed.");
      e
    })?;

  debug!(total_products, returned = products.len(), "Product page assembled.");
  Ok(ResultEnvelope::new(products, total_products, request.limit))
}

#[instrument(name = "catalog::list_categories", skip(store), err(Display))]
pub async fn list_categories(store: &dyn CatalogStore) -> CatalogResult<Vec<String>> {
  store.distinct_values(ProductField::Category).await
}

#[instrument(name = "catalog::list_brands", skip(store), err(Display))]
pub async fn list_brands(store: &dyn CatalogStore) -> CatalogResult<Vec<String>> {
  store.distinct_values(ProductField::Brand).await
}

#[instrument(name = "catalog::list_banners", skip(store), err(Display))]
pub async fn list_banners(store: &dyn CatalogStore) -> CatalogResult<Vec<Value>> {
  store.documents(DocumentCollection::Banners).await
}

#[instrument(name = "catalog::list_reviews", skip(store), err(Display))]
pub async fn list_reviews(store: &dyn CatalogStore) -> CatalogResult<Vec<Value>> {
  store.documents(DocumentCollection::Reviews).await
}
