// core/src/query.rs

//! Query compiler: turns a [`FilterRequest`] into a store-agnostic predicate and sort order.
//!
//! The predicate is a flat list of field-level [`Constraint`]s that are all ANDed.
//! Constraints are appended by [`QuerySpecBuilder`] only when their filter is active,
//! so an empty category or brand list contributes nothing.

use crate::filter::{FilterRequest, SortBy};
use crate::model::Product;

#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
  /// Case-insensitive substring match on the product name.
  NameContains(String),
  CategoryIn(Vec<String>),
  BrandIn(Vec<String>),
  /// Inclusive on both ends. `min > max` matches nothing.
  PriceBetween { min: f64, max: f64 },
}

impl Constraint {
  pub fn matches(&self, product: &Product) -> bool {
    match self {
      Constraint::NameContains(needle) => {
        product.name.to_lowercase().contains(&needle.to_lowercase())
      }
      Constraint::CategoryIn(values) => values.iter().any(|v| *v == product.category),
      Constraint::BrandIn(values) => values.iter().any(|v| *v == product.brand),
      Constraint::PriceBetween { min, max } => *min <= product.price && product.price <= *max,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
  constraints: Vec<Constraint>,
}

impl QuerySpec {
  pub fn builder() -> QuerySpecBuilder {
    QuerySpecBuilder::default()
  }

  pub fn constraints(&self) -> &[Constraint] {
    &self.constraints
  }

  pub fn is_empty(&self) -> bool {
    self.constraints.is_empty()
  }

  pub fn matches(&self, product: &Product) -> bool {
    self.constraints.iter().all(|c| c.matches(product))
  }
}

#[derive(Debug, Default)]
pub struct QuerySpecBuilder {
  constraints: Vec<Constraint>,
}

impl QuerySpecBuilder {
  pub fn name_contains(mut self, search: impl Into<String>) -> Self {
    self.constraints.push(Constraint::NameContains(search.into()));
    self
  }

  /// No-op when `values` is empty.
  pub fn category_in(mut self, values: &[String]) -> Self {
    if !values.is_empty() {
      self.constraints.push(Constraint::CategoryIn(values.to_vec()));
    }
    self
  }

  /// No-op when `values` is empty.
  pub fn brand_in(mut self, values: &[String]) -> Self {
    if !values.is_empty() {
      self.constraints.push(Constraint::BrandIn(values.to_vec()));
    }
    self
  }

  pub fn price_between(mut self, min: f64, max: f64) -> Self {
    self.constraints.push(Constraint::PriceBetween { min, max });
    self
  }

  pub fn build(self) -> QuerySpec {
    QuerySpec {
      constraints: self.constraints,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
  Price,
  CreatedAt,
}

impl SortField {
  pub fn as_str(&self) -> &'static str {
    match self {
      SortField::Price => "price",
      SortField::CreatedAt => "created_at",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Ascending,
  Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
  /// Whatever order the store yields.
  #[default]
  Natural,
  By { field: SortField, direction: SortDirection },
}

impl From<SortBy> for SortOrder {
  fn from(sort_by: SortBy) -> Self {
    let (field, direction) = match sort_by {
      SortBy::None => return SortOrder::Natural,
      SortBy::PriceAsc => (SortField::Price, SortDirection::Ascending),
      SortBy::PriceDesc => (SortField::Price, SortDirection::Descending),
      SortBy::DateAsc => (SortField::CreatedAt, SortDirection::Ascending),
      SortBy::DateDesc => (SortField::CreatedAt, SortDirection::Descending),
    };
    SortOrder::By { field, direction }
  }
}

/// Skip/limit pair applied after filtering and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
  pub skip: u64,
  pub limit: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
  pub spec: QuerySpec,
  pub sort: SortOrder,
}

pub fn compile(request: &FilterRequest) -> CompiledQuery {
  let spec = QuerySpec::builder()
    .name_contains(request.search.as_str())
    .category_in(&request.category)
    .brand_in(&request.brand)
    .price_between(request.min_price, request.max_price)
    .build();

  CompiledQuery {
    spec,
    sort: request.sort_by.into(),
  }
}
