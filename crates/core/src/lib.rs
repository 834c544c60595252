//! `storefront-core`: shared building blocks.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no storage) shared by
//! the catalog, assistant and API crates.

pub mod entity;
pub mod id;

pub use entity::Entity;
pub use id::ProductId;
