// core/src/model.rs

//! Data structures read from the catalog store and returned to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product. Identity is assigned by the store; this crate never writes products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(rename = "_id")]
  pub id: Uuid,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  pub category: String,
  pub brand: String,
  pub price: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ratings: Option<f64>,
  pub created_at: DateTime<Utc>,
}

/// Text fields of a product that can be aggregated into distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
  Category,
  Brand,
}

impl ProductField {
  pub fn as_str(&self) -> &'static str {
    match self {
      ProductField::Category => "category",
      ProductField::Brand => "brand",
    }
  }

  pub fn value_of<'a>(&self, product: &'a Product) -> &'a str {
    match self {
      ProductField::Category => &product.category,
      ProductField::Brand => &product.brand,
    }
  }
}

/// Collections whose documents are returned verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentCollection {
  Banners,
  Reviews,
}

impl DocumentCollection {
  pub fn as_str(&self) -> &'static str {
    match self {
      DocumentCollection::Banners => "banners",
      DocumentCollection::Reviews => "reviews",
    }
  }
}

/// One page of a filtered product listing.
///
/// `total_products` counts every match of the query regardless of the page,
/// so `total_pages` is the same for every page of one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
  pub products: Vec<Product>,
  pub total_products: u64,
  pub total_pages: u64,
}

impl ResultEnvelope {
  pub fn new(products: Vec<Product>, total_products: u64, limit: u64) -> Self {
    Self {
      products,
      total_products,
      total_pages: total_pages(total_products, limit),
    }
  }
}

/// `ceil(total / limit)`. A zero limit yields zero pages.
pub fn total_pages(total: u64, limit: u64) -> u64 {
  if limit == 0 {
    return 0;
  }
  total.div_ceil(limit)
}
