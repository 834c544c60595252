//! Product catalog as seen by the storefront assistant.
//!
//! Read-only models, the fetch collaborator boundary, and the snapshot cache.
//! The product store itself (CRUD, schemas) lives elsewhere.

pub mod cache;
pub mod catalog;
pub mod product;
pub mod seed;
pub mod source;

pub use cache::{CatalogCache, RefreshOutcome};
pub use catalog::Catalog;
pub use product::{Price, Product};
pub use source::{CatalogError, CatalogSource, HttpCatalogSource, StaticCatalogSource};
