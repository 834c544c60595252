use serde::Serialize;

use storefront_catalog::Product;

use crate::format;
use crate::intent::Intent;

/// Result of resolving one query.
///
/// `text` uses the reply markup (`**bold**`, `\n`); `products` are the catalog
/// facts the reply asserts (the confident match, candidates, listing or samples).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
    pub products: Vec<Product>,
}

impl Reply {
    pub fn new(intent: Intent, text: impl Into<String>) -> Self {
        Self {
            intent,
            text: text.into(),
            products: Vec::new(),
        }
    }

    pub fn with_products<'a>(mut self, products: impl IntoIterator<Item = &'a Product>) -> Self {
        self.products = products.into_iter().cloned().collect();
        self
    }

    pub fn html(&self) -> String {
        format::render_html(&self.text)
    }

    pub fn plain(&self) -> String {
        format::render_plain(&self.text)
    }
}
