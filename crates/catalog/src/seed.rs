//! The store's starter catalog.

use crate::product::Product;

/// Stationery items the store opens with, in display order.
pub fn products() -> Vec<Product> {
    vec![
        Product::new("diary", "Diary", 35.0)
            .with_description("High-quality diary for every occasion.")
            .with_category("Category A"),
        Product::new("pen-set", "Pen set", 50.0)
            .with_description("Stylish pens for professionals and students.")
            .with_category("Category B"),
        Product::new("chalk", "Chalk", 30.0)
            .with_description("Smooth, vibrant, and dust-free chalks")
            .with_category("Category C"),
        Product::new("files", "Files", 30.0)
            .with_description("High-quality files with attractive colors")
            .with_category("Category D"),
        Product::new("duster", "Duster", 40.0)
            .with_description("Effortless cleaning every time")
            .with_category("Category D"),
        Product::new("blank-pages", "Blank Pages", 50.0)
            .with_description("Premium quality pages for every occasion")
            .with_category("Category B"),
        Product::new("notebooks", "Notebooks", 30.0)
            .with_description("High-quality notebooks for smooth writing")
            .with_category("Category B"),
        Product::new("markers", "Markers", 30.0)
            .with_description("Bold marks, smooth lines")
            .with_category("Category C"),
    ]
}

#[cfg(test)]
mod tests {
    use crate::Catalog;

    #[test]
    fn seed_ids_are_unique() {
        let products = super::products();
        let n = products.len();
        assert_eq!(Catalog::from_products(products).len(), n);
    }
}
