//! Reply texts: fixed phrase pools and the computed product answers.
//!
//! Texts use the light markup understood by [`crate::format`]: `**bold**` and `\n`.

use rand::RngCore;
use rand::seq::SliceRandom;

use storefront_catalog::{Catalog, Product};

use crate::normalize::CURRENCY_GLYPH;

pub const WELCOME: &str = "Hi! 👋 How can I help you today? Try: 'What products do you have?' or 'Help'";

pub const EMPTY_PROMPT: &str = "Type something to get started!";

pub const GREETINGS: [&str; 3] = [
    "Hi! 👋 I'm your stationery store assistant. How can I help you today?",
    "Hello! Welcome to the stationery store. What would you like to know?",
    "Hey there! Ask me about products, prices, or how to order.",
];

pub const HELP: [&str; 2] = [
    "I can help you with:\n• Product info & prices\n• Finding items (diary, pens, notebooks, etc.)\n• Cart & checkout help\n• Store info & contact\n\nJust type your question!",
    "You can ask me: 'What products do you have?', 'How much is X?', 'Where is the cart?', or 'How do I order?'",
];

pub const THANKS: [&str; 3] = [
    "You're welcome! Happy shopping! 🎒",
    "Glad I could help! Feel free to ask more.",
    "Anytime! Enjoy your stationery!",
];

pub const CART: &str = "To add items to cart, click **Add to Cart** on any product. View your cart using the **🛒 View Cart** link in the header.";

pub const CHECKOUT: &str = "After adding items to cart, click **View Cart**, review your items, then proceed to checkout. You can also use **Buy Now** for instant checkout on a single item.";

pub const ABOUT: &str = "We're passionate about stationery! Our collection is curated with care for students and professionals. Quality products at affordable prices.";

pub const CONTACT: &str = "Reach us via the Contact form on this page, or you can send an email. We're here to help!";

pub const OFF_TOPIC: &str = "I can only help with our stationery store: products, prices, your cart and orders. Try asking 'What products do you have?'";

pub const DEFAULT: &str = "I'm not sure about that. Try asking: 'What products do you have?', 'How much is a diary?', or 'How do I add to cart?'";

pub const LOADING_PRODUCTS: &str = "Loading products... Try again in a moment!";

pub const LOADING_PRODUCT_INFO: &str = "I'm loading product info. Ask again shortly!";

/// Listings longer than this are cut off with a "more" line.
pub const LISTING_LIMIT: usize = 12;

/// Default-reply sample size.
pub const DEFAULT_SAMPLE: usize = 3;

/// Uniformly random phrase from a pool.
pub fn pick<R>(pool: &[&'static str], rng: &mut R) -> &'static str
where
    R: RngCore + ?Sized,
{
    pool.choose(rng).copied().unwrap_or(DEFAULT)
}

fn price_label(product: &Product) -> String {
    format!("{CURRENCY_GLYPH}{}", product.price())
}

fn with_description(head: String, product: &Product) -> String {
    match product.description() {
        Some(desc) => format!("{head} {desc}"),
        None => head,
    }
}

/// `• Diary - ₹35`
pub fn product_line(product: &Product) -> String {
    format!("• {} - {}", product.name(), price_label(product))
}

fn bullet_list<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    products.into_iter().map(product_line).collect::<Vec<_>>().join("\n")
}

pub fn listing(catalog: &Catalog) -> String {
    let mut lines = bullet_list(catalog.iter().take(LISTING_LIMIT));
    if catalog.len() > LISTING_LIMIT {
        lines.push_str(&format!("\n…and {} more", catalog.len() - LISTING_LIMIT));
    }
    format!(
        "Here are our products:\n\n{lines}\n\nBrowse the Products section or search to find what you need!"
    )
}

pub fn price_answer(product: &Product) -> String {
    with_description(
        format!("**{}** costs {}.", product.name(), price_label(product)),
        product,
    )
}

pub fn availability_answer(product: &Product) -> String {
    if product.in_stock() {
        format!(
            "Yes! **{}** is available for {}. Add it to your cart from the Products section.",
            product.name(),
            price_label(product)
        )
    } else {
        format!(
            "**{}** ({}) is currently out of stock. Please check back soon!",
            product.name(),
            price_label(product)
        )
    }
}

pub fn mention_answer(product: &Product) -> String {
    with_description(
        format!("**{}**: {}.", product.name(), price_label(product)),
        product,
    )
}

pub fn disambiguation(candidates: &[&Product]) -> String {
    format!(
        "I found a few close matches:\n{}\n\nWhich one did you mean?",
        bullet_list(candidates.iter().copied())
    )
}

/// No-match fallback: never a bare "not found".
pub fn suggestions(samples: &[&Product]) -> String {
    if samples.is_empty() {
        return LOADING_PRODUCT_INFO.to_string();
    }
    format!(
        "I couldn't find that product. Here are some things we carry:\n{}",
        bullet_list(samples.iter().copied())
    )
}

pub fn default_reply(samples: &[&Product]) -> String {
    if samples.is_empty() {
        return DEFAULT.to_string();
    }
    let names = samples.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ");
    format!("{DEFAULT}\n\nPopular picks: {names}")
}
