// server/src/db/mod.rs

//! Storage backends for the catalog.

pub mod postgres;

pub use postgres::PgCatalogStore;
