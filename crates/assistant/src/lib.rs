//! `storefront-assistant`
//!
//! **Responsibility:** the storefront's rule-based chat assistant.
//!
//! Deterministic lexical matching, not NLU:
//! - normalize and tokenize the utterance
//! - classify it with an ordered rule table (first match wins)
//! - score catalog products for product questions
//! - format a reply (phrase pools, light markup, sampling for long lists)
//!
//! The crate owns no network boundary and persists nothing; the catalog is
//! supplied by a [`storefront_catalog::CatalogSource`].

pub mod assistant;
pub mod format;
pub mod intent;
pub mod matcher;
pub mod normalize;
mod pattern;
pub mod reply;
pub mod resolver;
pub mod responses;

pub use assistant::Assistant;
pub use format::{render_html, render_plain};
pub use intent::{Classification, Intent, classify};
pub use matcher::{Decision, Match, decide, rank};
pub use normalize::{normalize, tokenize};
pub use reply::Reply;
pub use resolver::resolve;
