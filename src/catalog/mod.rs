//! Product catalog API access

pub mod api;
pub mod types;

pub use api::{Catalog, CatalogClient, CatalogQuery};
pub use types::Product;
