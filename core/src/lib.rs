// src/lib.rs

//! Outlet catalog: the read side of a product catalog.
//!
//! A listing request goes through three stages:
//!  - raw query pairs are coerced into a [`FilterRequest`] (never rejected),
//!  - the [`query`] compiler turns it into a [`QuerySpec`] and a [`SortOrder`],
//!  - [`service::list_products`] counts and fetches against a [`CatalogStore`]
//!    and assembles a [`ResultEnvelope`].
//!
//! Category/brand aggregation and the banner/review readers are thin calls on
//! the same store.

pub mod error;
pub mod filter;
pub mod memory;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use crate::error::{CatalogError, CatalogResult};
pub use crate::filter::{FilterRequest, SortBy};
pub use crate::memory::InMemoryCatalogStore;
pub use crate::model::{DocumentCollection, Product, ProductField, ResultEnvelope};
pub use crate::query::{
  compile, CompiledQuery, Constraint, PageWindow, QuerySpec, QuerySpecBuilder, SortDirection, SortField, SortOrder,
};
pub use crate::store::CatalogStore;
