use std::collections::HashSet;

use serde::Serialize;

use storefront_core::{Entity, ProductId};

use crate::product::Product;

/// Ordered product snapshot.
///
/// Invariants:
/// - Order is the collaborator's order (it is the tie-breaker for ranking).
/// - Unique by id: the first occurrence of a repeated id wins. Records that
///   arrived without an id are kept as distinct entries.
/// - Never mutated in place; a refresh builds a new `Catalog`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The not-yet-loaded state.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut seen: HashSet<ProductId> = HashSet::new();
        let products = products
            .into_iter()
            .filter(|p| {
                let keep = p.id().is_blank() || seen.insert(p.id().clone());
                if !keep {
                    tracing::debug!(id = %p.id(), "dropping duplicate catalog record");
                }
                keep
            })
            .collect();
        Self { products }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::from_products(iter)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
