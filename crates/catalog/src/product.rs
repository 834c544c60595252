use serde::{Deserialize, Deserializer, Serialize};

use storefront_core::{Entity, ProductId};

/// Unit price in the store currency (rupees).
///
/// Always finite and non-negative; anything else collapses to zero on construction.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Self(amount)
        } else {
            Self(0.0)
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    /// Integral prices render without decimals (`35`), others with two (`12.50`).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(Self::new(raw.unwrap_or(0.0)))
    }
}

/// Read model: one catalog product as served by the product collaborator.
///
/// Records may be incomplete; every field except `id` falls back to an
/// empty/zero default so that rendering never fails on a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "_id", default)]
    id: ProductId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stock: Option<u32>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Price::new(price),
            description: None,
            category: None,
            stock: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Description, with blank strings treated as absent.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Units on hand, when the collaborator tracks stock.
    pub fn stock(&self) -> Option<u32> {
        self.stock
    }

    /// `false` only when stock is tracked and exhausted.
    pub fn in_stock(&self) -> bool {
        self.stock != Some(0)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_display_drops_fraction_for_whole_amounts() {
        assert_eq!(Price::new(35.0).to_string(), "35");
        assert_eq!(Price::new(12.5).to_string(), "12.50");
    }

    #[test]
    fn price_clamps_negative_and_non_finite() {
        assert_eq!(Price::new(-4.0).amount(), 0.0);
        assert_eq!(Price::new(f64::NAN).amount(), 0.0);
        assert_eq!(Price::new(f64::INFINITY).amount(), 0.0);
    }

    #[test]
    fn deserializes_document_store_shape() {
        let json = r#"{
            "_id": "65f0c1a2",
            "name": "Diary",
            "price": 35,
            "description": "High-quality diary for every occasion.",
            "category": "Category A",
            "stock": 10,
            "image": "/images/mp1.jpg"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id().as_str(), "65f0c1a2");
        assert_eq!(p.name(), "Diary");
        assert_eq!(p.price(), Price::new(35.0));
        assert_eq!(p.description(), Some("High-quality diary for every occasion."));
        assert_eq!(p.category(), Some("Category A"));
        assert_eq!(p.stock(), Some(10));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let p: Product = serde_json::from_str(r#"{"id": "x", "name": "Chalk"}"#).unwrap();
        assert_eq!(p.price().amount(), 0.0);
        assert_eq!(p.description(), None);
        assert!(p.in_stock());

        let p: Product = serde_json::from_str(r#"{"id": "y", "price": null}"#).unwrap();
        assert_eq!(p.name(), "");
        assert_eq!(p.price().amount(), 0.0);
    }

    #[test]
    fn blank_description_is_absent() {
        let p = Product::new("x", "Files", 30.0).with_description("   ");
        assert_eq!(p.description(), None);
    }

    #[test]
    fn zero_stock_is_out_of_stock() {
        assert!(!Product::new("x", "Duster", 40.0).with_stock(0).in_stock());
        assert!(Product::new("x", "Duster", 40.0).with_stock(3).in_stock());
    }
}
