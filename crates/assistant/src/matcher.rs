//! Product matching & ranking.
//!
//! Additive lexical scoring, computed per product with no cross-product
//! normalization:
//! - normalized name equals the normalized query: +120
//! - containment in either direction: +70
//! - name starts with the query: +15
//! - each distinct query token that is also a name token: +12

use std::collections::HashSet;

use rand::RngCore;
use rand::seq::SliceRandom;

use storefront_catalog::{Catalog, Product};
use storefront_core::{Entity, ProductId};

use crate::normalize::{normalize, tokenize};

pub const EXACT_NAME_SCORE: u32 = 120;
pub const CONTAINMENT_SCORE: u32 = 70;
pub const PREFIX_SCORE: u32 = 15;
pub const TOKEN_OVERLAP_SCORE: u32 = 12;

/// Top score at or above which a match is answered without asking back.
pub const CONFIDENT_SCORE: u32 = CONTAINMENT_SCORE;

/// Match cap for the free-text product mention fallback.
pub const MENTION_LIMIT: usize = 3;
/// Match cap for explicit price/availability questions.
pub const LOOKUP_LIMIT: usize = 5;
/// How many catalog items to suggest when nothing matched.
pub const SUGGESTION_SAMPLE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub product: &'a Product,
    pub score: u32,
}

/// Score one product against an already-normalized query.
fn score_product(query: &str, query_tokens: &[String], product: &Product) -> u32 {
    let name = normalize(product.name());
    if name.is_empty() || query.is_empty() {
        return 0;
    }

    let mut score = 0;
    if name == query {
        score += EXACT_NAME_SCORE;
    }
    if query.contains(name.as_str()) || name.contains(query) {
        score += CONTAINMENT_SCORE;
    }
    if name.starts_with(query) {
        score += PREFIX_SCORE;
    }

    let name_tokens: HashSet<String> = tokenize(product.name()).into_iter().collect();
    let overlap = query_tokens.iter().filter(|t| name_tokens.contains(*t)).count() as u32;
    score + overlap * TOKEN_OVERLAP_SCORE
}

/// Rank catalog products against `query`.
///
/// Only positive scores are returned, highest first; equal scores keep catalog
/// order. Deduplicated by product id and capped at `limit`.
pub fn rank<'a>(query: &str, catalog: &'a Catalog, limit: usize) -> Vec<Match<'a>> {
    let normalized = normalize(query);
    let mut query_tokens = tokenize(query);
    let mut seen_tokens = HashSet::new();
    query_tokens.retain(|t| seen_tokens.insert(t.clone()));

    let mut matches: Vec<Match<'a>> = catalog
        .iter()
        .map(|product| Match {
            product,
            score: score_product(&normalized, &query_tokens, product),
        })
        .filter(|m| m.score > 0)
        .collect();

    // `sort_by` is stable: ties stay in catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    let mut seen_ids: HashSet<&ProductId> = HashSet::new();
    matches.retain(|m| m.product.id().is_blank() || seen_ids.insert(m.product.id()));
    matches.truncate(limit);
    matches
}

/// What to do with a ranked match list.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision<'a> {
    /// One product is the answer.
    Confident(&'a Product),
    /// Several weak candidates; ask which one was meant.
    Ambiguous(Vec<&'a Product>),
    NoMatch,
}

pub fn decide<'a>(matches: &[Match<'a>]) -> Decision<'a> {
    match matches {
        [] => Decision::NoMatch,
        [only] => Decision::Confident(only.product),
        [top, ..] if top.score >= CONFIDENT_SCORE => Decision::Confident(top.product),
        _ => Decision::Ambiguous(matches.iter().map(|m| m.product).collect()),
    }
}

/// Up to `n` distinct catalog products in random order (partial Fisher–Yates).
pub fn sample<'a, R>(catalog: &'a Catalog, n: usize, rng: &mut R) -> Vec<&'a Product>
where
    R: RngCore + ?Sized,
{
    let mut pool: Vec<&'a Product> = catalog.iter().collect();
    let take = n.min(pool.len());
    let (picked, _) = pool.partial_shuffle(rng, take);
    picked.to_vec()
}
