// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod catalog_handlers;
pub mod content_handlers;
pub mod product_handlers;
