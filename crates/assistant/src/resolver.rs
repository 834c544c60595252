//! Query resolution: classify, match, answer.
//!
//! Pure given the catalog snapshot and the RNG; never fails and never returns
//! empty text.

use rand::RngCore;

use storefront_catalog::{Catalog, Product};

use crate::intent::{Intent, classify};
use crate::matcher::{self, Decision, LOOKUP_LIMIT, SUGGESTION_SAMPLE};
use crate::reply::Reply;
use crate::responses;

pub fn resolve<R>(query: &str, catalog: &Catalog, rng: &mut R) -> Reply
where
    R: RngCore + ?Sized,
{
    let classified = classify(query, catalog);
    tracing::debug!(intent = %classified.intent, catalog_size = catalog.len(), "classified query");

    let search_term = classified.search_term.as_deref().unwrap_or(query);

    match classified.intent {
        Intent::Empty => Reply::new(Intent::Empty, responses::EMPTY_PROMPT),
        Intent::Greeting => Reply::new(Intent::Greeting, responses::pick(&responses::GREETINGS, rng)),
        Intent::Help => Reply::new(Intent::Help, responses::pick(&responses::HELP, rng)),
        Intent::ProductList => {
            if catalog.is_empty() {
                Reply::new(Intent::ProductList, responses::LOADING_PRODUCTS)
            } else {
                Reply::new(Intent::ProductList, responses::listing(catalog))
                    .with_products(catalog.iter().take(responses::LISTING_LIMIT))
            }
        }
        Intent::Price => lookup(Intent::Price, search_term, catalog, rng, responses::price_answer),
        Intent::Availability => lookup(
            Intent::Availability,
            search_term,
            catalog,
            rng,
            responses::availability_answer,
        ),
        Intent::Cart => Reply::new(Intent::Cart, responses::CART),
        Intent::Checkout => Reply::new(Intent::Checkout, responses::CHECKOUT),
        Intent::About => Reply::new(Intent::About, responses::ABOUT),
        Intent::Contact => Reply::new(Intent::Contact, responses::CONTACT),
        Intent::Thanks => Reply::new(Intent::Thanks, responses::pick(&responses::THANKS, rng)),
        // Mentions are containment-level matches, so the top one is the answer.
        Intent::ProductMention => match classified.mentions.first() {
            Some(top) => {
                Reply::new(Intent::ProductMention, responses::mention_answer(top.product)).with_products([top.product])
            }
            None => default_reply(catalog, rng),
        },
        Intent::OffTopic => Reply::new(Intent::OffTopic, responses::OFF_TOPIC),
        Intent::Default => default_reply(catalog, rng),
    }
}

/// Price/availability flow: one confident answer, a list to choose from, or samples.
fn lookup<R>(
    intent: Intent,
    term: &str,
    catalog: &Catalog,
    rng: &mut R,
    answer: fn(&Product) -> String,
) -> Reply
where
    R: RngCore + ?Sized,
{
    if catalog.is_empty() {
        return Reply::new(intent, responses::LOADING_PRODUCT_INFO);
    }

    let matches = matcher::rank(term, catalog, LOOKUP_LIMIT);
    match matcher::decide(&matches) {
        Decision::Confident(product) => Reply::new(intent, answer(product)).with_products([product]),
        Decision::Ambiguous(candidates) => {
            Reply::new(intent, responses::disambiguation(&candidates)).with_products(candidates)
        }
        Decision::NoMatch => {
            let samples = matcher::sample(catalog, SUGGESTION_SAMPLE, rng);
            Reply::new(intent, responses::suggestions(&samples)).with_products(samples)
        }
    }
}

fn default_reply<R>(catalog: &Catalog, rng: &mut R) -> Reply
where
    R: RngCore + ?Sized,
{
    let samples = matcher::sample(catalog, responses::DEFAULT_SAMPLE, rng);
    Reply::new(Intent::Default, responses::default_reply(&samples)).with_products(samples)
}
