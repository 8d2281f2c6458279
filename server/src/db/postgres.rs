// server/src/db/postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use outlet_catalog::{
  CatalogError, CatalogResult, CatalogStore, Constraint, DocumentCollection, PageWindow, Product, ProductField,
  QuerySpec, SortDirection, SortOrder,
};
use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{FromRow, Postgres, QueryBuilder};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::Result;

const PRODUCT_COLUMNS: &str = "id, name, description, image, category, brand, price, ratings, created_at";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: Uuid,
  name: String,
  description: Option<String>,
  image: Option<String>,
  category: String,
  brand: String,
  price: f64,
  ratings: Option<f64>,
  created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      description: row.description,
      image: row.image,
      category: row.category,
      brand: row.brand,
      price: row.price,
      ratings: row.ratings,
      created_at: row.created_at,
    }
  }
}

/// Appends ` WHERE a AND b ...` for every constraint of `spec`, all values bound.
fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, spec: &QuerySpec) {
  if spec.is_empty() {
    return;
  }
  builder.push(" WHERE ");
  for (i, constraint) in spec.constraints().iter().enumerate() {
    if i > 0 {
      builder.push(" AND ");
    }
    match constraint {
      // strpos instead of ILIKE: the search text must not act as a pattern.
      Constraint::NameContains(search) => {
        builder
          .push("strpos(lower(name), lower(")
          .push_bind(search.clone())
          .push(")) > 0");
      }
      Constraint::CategoryIn(values) => {
        builder.push("category = ANY(").push_bind(values.clone()).push(")");
      }
      Constraint::BrandIn(values) => {
        builder.push("brand = ANY(").push_bind(values.clone()).push(")");
      }
      Constraint::PriceBetween { min, max } => {
        builder
          .push("price BETWEEN ")
          .push_bind(*min)
          .push(" AND ")
          .push_bind(*max);
      }
    }
  }
}

/// `id` breaks ties so that LIMIT/OFFSET pages of one ordering never overlap.
fn push_order(builder: &mut QueryBuilder<'_, Postgres>, sort: SortOrder) {
  if let SortOrder::By { field, direction } = sort {
    let direction = match direction {
      SortDirection::Ascending => "ASC",
      SortDirection::Descending => "DESC",
    };
    builder.push(format!(" ORDER BY {} {}, id", field.as_str(), direction));
  }
}

fn to_i64(value: u64) -> i64 {
  i64::try_from(value).unwrap_or(i64::MAX)
}

/// Products, banners and reviews held in PostgreSQL. Banner and review rows
/// carry their document in a JSONB `data` column.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
  pool: PgPool,
}

impl PgCatalogStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Opens the shared pool. Called once at startup.
  pub async fn connect(config: &AppConfig) -> Result<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(config.db_max_connections)
      .connect_with(config.connect_options())
      .await?;
    info!(host = %config.db_host, database = %config.db_name, "Database pool opened.");
    Ok(Self::new(pool))
  }

  pub async fn close(&self) {
    self.pool.close().await;
    info!("Database pool closed.");
  }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
  #[instrument(name = "pg::ping", skip(self), err(Display))]
  async fn ping(&self) -> CatalogResult<()> {
    sqlx::query("SELECT 1")
      .execute(&self.pool)
      .await
      .map_err(|e| CatalogError::storage("ping", e))?;
    Ok(())
  }

  #[instrument(name = "pg::count_products", skip(self, spec), err(Display))]
  async fn count_products(&self, spec: &QuerySpec) -> CatalogResult<u64> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
    push_predicate(&mut builder, spec);
    debug!(sql = builder.sql(), "Counting products.");

    let count: i64 = builder
      .build_query_scalar()
      .fetch_one(&self.pool)
      .await
      .map_err(|e| CatalogError::storage("count_products", e))?;
    Ok(u64::try_from(count).unwrap_or_default())
  }

  #[instrument(name = "pg::find_products", skip(self, spec), fields(offset = window.skip, limit = window.limit), err(Display))]
  async fn find_products(&self, spec: &QuerySpec, sort: SortOrder, window: PageWindow) -> CatalogResult<Vec<Product>> {
    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));
    push_predicate(&mut builder, spec);
    push_order(&mut builder, sort);
    builder
      .push(" LIMIT ")
      .push_bind(to_i64(window.limit))
      .push(" OFFSET ")
      .push_bind(to_i64(window.skip));
    debug!(sql = builder.sql(), "Fetching products.");

    let rows = builder
      .build_query_as::<ProductRow>()
      .fetch_all(&self.pool)
      .await
      .map_err(|e| CatalogError::storage("find_products", e))?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "pg::distinct_values", skip(self), fields(field = field.as_str()), err(Display))]
  async fn distinct_values(&self, field: ProductField) -> CatalogResult<Vec<String>> {
    let column = field.as_str();
    let sql = format!("SELECT {column} FROM products GROUP BY {column}");
    sqlx::query_scalar::<_, String>(&sql)
      .fetch_all(&self.pool)
      .await
      .map_err(|e| CatalogError::storage("distinct_values", e))
  }

  #[instrument(name = "pg::documents", skip(self), fields(collection = collection.as_str()), err(Display))]
  async fn documents(&self, collection: DocumentCollection) -> CatalogResult<Vec<Value>> {
    // The row id is exposed as `_id`, like any other stored document.
    let sql = format!(
      "SELECT data || jsonb_build_object('_id', id) FROM {}",
      collection.as_str()
    );
    sqlx::query_scalar::<_, Value>(&sql)
      .fetch(&self.pool)
      .try_collect()
      .await
      .map_err(|e| CatalogError::storage("documents", e))
  }
}
