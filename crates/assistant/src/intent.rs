//! Intent classification.
//!
//! An ordered rule table evaluated top to bottom; the first rule whose pattern
//! matches wins, even when a later rule would also match. After the fixed rules
//! come the catalog-aware product mention, the off-topic deny-list and finally
//! the default.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use storefront_catalog::Catalog;

use crate::matcher::{self, CONFIDENT_SCORE, MENTION_LIMIT, Match};
use crate::normalize::{collapse_whitespace, normalize};
use crate::pattern::compile_regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Blank input.
    Empty,
    Greeting,
    Help,
    ProductList,
    Price,
    Availability,
    Cart,
    Checkout,
    About,
    Contact,
    Thanks,
    /// The query names a catalog product without any other trigger.
    ProductMention,
    OffTopic,
    Default,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Empty => "empty",
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::ProductList => "product_list",
            Intent::Price => "price",
            Intent::Availability => "availability",
            Intent::Cart => "cart",
            Intent::Checkout => "checkout",
            Intent::About => "about",
            Intent::Contact => "contact",
            Intent::Thanks => "thanks",
            Intent::ProductMention => "product_mention",
            Intent::OffTopic => "off_topic",
            Intent::Default => "default",
        }
    }
}

impl core::fmt::Display for Intent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the rule table.
struct Rule {
    intent: Intent,
    pattern: Regex,
    /// Whether the matched trigger words are removed to form a product search term.
    extracts_term: bool,
}

impl Rule {
    fn new(intent: Intent, pattern: &str) -> Self {
        Self {
            intent,
            pattern: compile_regex(pattern),
            extracts_term: false,
        }
    }

    fn extracting(intent: Intent, pattern: &str) -> Self {
        Self {
            extracts_term: true,
            ..Self::new(intent, pattern)
        }
    }
}

/// Fixed rules in priority order. Price is deliberately ahead of availability:
/// a query that matches both is a price question.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(Intent::Greeting, r"\b(?:hi|hello|hey|hiya)\b"),
        Rule::new(Intent::Help, r"\b(?:help|what can you do|options)\b"),
        Rule::new(
            Intent::ProductList,
            r"\b(?:products?|items?|what do you (?:have|sell)|catalog)\b",
        ),
        // `\b` needs a word character next to it, so the glyph is matched on its own.
        Rule::extracting(Intent::Price, r"\b(?:price|cost|how much|rupees?)\b|₹"),
        Rule::extracting(
            Intent::Availability,
            r"\b(?:available|in stock|do you have|have you got|selling|sell|any)\b",
        ),
        Rule::new(Intent::Cart, r"\b(?:cart|add to cart|shopping cart)\b"),
        Rule::new(Intent::Checkout, r"\b(?:checkout|order|buy|purchase)\b"),
        Rule::new(Intent::About, r"\b(?:about|who are you|store info)\b"),
        Rule::new(Intent::Contact, r"\b(?:contact|email|reach|support)\b"),
        Rule::new(Intent::Thanks, r"\b(?:thanks?|thank you|ty)\b"),
    ]
});

/// Conservative on purpose: only subjects a stationery shop never answers.
static OFF_TOPIC: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex(
        r"\b(?:weather|jokes?|sports?|news|politics|movies?|music|songs?|cricket|football|recipes?|games?)\b",
    )
});

/// Outcome of classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub intent: Intent,
    /// Product search term for price/availability questions.
    pub search_term: Option<String>,
    /// Ranked candidates for `ProductMention`.
    pub mentions: Vec<Match<'a>>,
}

impl Classification<'_> {
    fn plain(intent: Intent) -> Self {
        Self {
            intent,
            search_term: None,
            mentions: Vec::new(),
        }
    }
}

/// Lowercase, trim and collapse whitespace so multi-word triggers match
/// regardless of spacing.
fn prepare(raw: &str) -> String {
    collapse_whitespace(&raw.to_lowercase())
}

/// Remove every trigger occurrence; if nothing searchable is left, search with the
/// whole text instead.
fn extract_term(pattern: &Regex, text: &str) -> String {
    let stripped = pattern.replace_all(text, " ");
    let stripped = collapse_whitespace(&stripped);
    if normalize(&stripped).is_empty() {
        text.to_string()
    } else {
        stripped
    }
}

/// Classify `raw` against the rule table, then the catalog, then the deny-list.
pub fn classify<'a>(raw: &str, catalog: &'a Catalog) -> Classification<'a> {
    let text = prepare(raw);
    if text.is_empty() {
        return Classification::plain(Intent::Empty);
    }

    if let Some(rule) = RULES.iter().find(|rule| rule.pattern.is_match(&text)) {
        let search_term = rule
            .extracts_term
            .then(|| extract_term(&rule.pattern, &text));
        return Classification {
            intent: rule.intent,
            search_term,
            mentions: Vec::new(),
        };
    }

    if !catalog.is_empty() {
        // Only a product name contained in the query (or the other way round)
        // counts; a single shared word is not a mention.
        let mut mentions = matcher::rank(&text, catalog, MENTION_LIMIT);
        mentions.retain(|m| m.score >= CONFIDENT_SCORE);
        if !mentions.is_empty() {
            return Classification {
                intent: Intent::ProductMention,
                search_term: Some(text),
                mentions,
            };
        }
    }

    if OFF_TOPIC.is_match(&text) {
        return Classification::plain(Intent::OffTopic);
    }

    Classification::plain(Intent::Default)
}
