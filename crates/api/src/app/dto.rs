use serde::{Deserialize, Serialize};

use storefront_assistant::{render_html, Intent, Reply};
use storefront_catalog::Product;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// A missing message is treated like an empty one.
    #[serde(default)]
    pub message: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub intent: Intent,
    /// Reply in the light markup (`**bold**`, newlines).
    pub reply: String,
    /// Same reply, escaped and rendered for direct insertion into a page.
    pub html: String,
    pub products: Vec<Product>,
}

impl From<Reply> for ChatResponse {
    fn from(reply: Reply) -> Self {
        let html = reply.html();
        Self {
            intent: reply.intent,
            reply: reply.text,
            html,
            products: reply.products,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub reply: &'static str,
    pub html: String,
}

impl WelcomeResponse {
    pub fn new(text: &'static str) -> Self {
        Self {
            reply: text,
            html: render_html(text),
        }
    }
}
