//! Deterministic keyword responder used when the remote assistant is
//! unavailable.
//!
//! # Invariants
//! - Intents are checked in a fixed order; the first match wins.
//! - Keywords match anywhere in the lowercased input, inside longer words
//!   too ("overall" asks for everything, "inexpensive" for the priciest).
//! - The only nondeterminism is the recommendation pick, drawn from the
//!   caller's `Rng`.

use crate::model::catalog_item::CatalogItem;
use crate::search::query::{low_stock_items, LOW_STOCK_THRESHOLD};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::fmt::Write;

const PICK_COUNT: usize = 3;

static LOW_STOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"low stock|running out|scarce").expect("valid low stock regex"));
static EXPENSIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"expensive|costly|pricey").expect("valid expensive regex"));
static CHEAP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"cheap|affordable|inexpensive").expect("valid cheap regex"));
static RECOMMEND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"recommend|suggest").expect("valid recommend regex"));
static OVERVIEW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"all|everything|complete").expect("valid overview regex"));

/// What the fallback responder decided the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackIntent<'a> {
    /// Items whose title or creator contains the whole input.
    Matches(Vec<&'a CatalogItem>),
    LowStock(Vec<&'a CatalogItem>),
    MostExpensive(Vec<&'a CatalogItem>),
    LeastExpensive(Vec<&'a CatalogItem>),
    Recommend(Vec<&'a CatalogItem>),
    Overview(usize),
    Help(usize),
}

/// Classifies `input` against `items`.
pub fn classify<'a, R: Rng + ?Sized>(
    input: &str,
    items: &'a [CatalogItem],
    rng: &mut R,
) -> FallbackIntent<'a> {
    if input.trim().is_empty() {
        return FallbackIntent::Help(items.len());
    }
    let lowered = input.to_lowercase();

    let matches = items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&lowered)
                || item.creator.to_lowercase().contains(&lowered)
        })
        .collect::<Vec<_>>();
    if !matches.is_empty() {
        return FallbackIntent::Matches(matches);
    }

    if LOW_STOCK_RE.is_match(&lowered) {
        return FallbackIntent::LowStock(low_stock_items(items));
    }
    if EXPENSIVE_RE.is_match(&lowered) {
        let mut sorted = items.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.unit_price.total_cmp(&a.unit_price));
        sorted.truncate(PICK_COUNT);
        return FallbackIntent::MostExpensive(sorted);
    }
    if CHEAP_RE.is_match(&lowered) {
        let mut sorted = items.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
        sorted.truncate(PICK_COUNT);
        return FallbackIntent::LeastExpensive(sorted);
    }
    if RECOMMEND_RE.is_match(&lowered) {
        let picks = items.choose_multiple(rng, PICK_COUNT).collect::<Vec<_>>();
        return FallbackIntent::Recommend(picks);
    }
    if OVERVIEW_RE.is_match(&lowered) {
        return FallbackIntent::Overview(items.len());
    }

    FallbackIntent::Help(items.len())
}

/// Produces the local answer for `input`.
pub fn fallback_reply<R: Rng + ?Sized>(input: &str, items: &[CatalogItem], rng: &mut R) -> String {
    render(&classify(input, items, rng))
}

fn render(intent: &FallbackIntent<'_>) -> String {
    let mut out = String::new();
    match intent {
        FallbackIntent::Matches(found) => {
            let noun = if found.len() == 1 { "title" } else { "titles" };
            let _ = writeln!(out, "Found {} matching {noun}:\n", found.len());
            for item in found {
                let warning = if item.quantity_on_hand < LOW_STOCK_THRESHOLD {
                    " (low stock)"
                } else {
                    ""
                };
                let _ = writeln!(
                    out,
                    "- \"{}\" by {}: ${}, {} in stock{warning}",
                    item.title, item.creator, item.unit_price, item.quantity_on_hand
                );
            }
        }
        FallbackIntent::LowStock(low) if low.is_empty() => {
            out.push_str("Every title is well stocked right now.");
        }
        FallbackIntent::LowStock(low) => {
            let noun = if low.len() == 1 { "title is" } else { "titles are" };
            let _ = writeln!(out, "{} {noun} running low:\n", low.len());
            for item in low {
                let copies = if item.quantity_on_hand == 1 { "copy" } else { "copies" };
                let _ = writeln!(
                    out,
                    "- \"{}\" by {}: {} {copies} left",
                    item.title, item.creator, item.quantity_on_hand
                );
            }
        }
        FallbackIntent::MostExpensive(ranked) => {
            out.push_str("Highest priced titles:\n\n");
            write_ranked(&mut out, ranked);
        }
        FallbackIntent::LeastExpensive(ranked) => {
            out.push_str("Most affordable titles:\n\n");
            write_ranked(&mut out, ranked);
        }
        FallbackIntent::Recommend(picks) => {
            out.push_str("A few titles worth a look:\n\n");
            for item in picks {
                let _ = writeln!(out, "- \"{}\" by {} (${})", item.title, item.creator, item.unit_price);
            }
        }
        FallbackIntent::Overview(count) => {
            let _ = write!(
                out,
                "The catalog holds {count} titles. Ask about a title, an author, stock levels or prices."
            );
        }
        FallbackIntent::Help(count) => {
            let _ = write!(
                out,
                "The assistant service is not reachable, but I can still help with the {count} titles in stock:\n\n\
                 - search by title or author\n\
                 - low stock checks\n\
                 - most and least expensive titles\n\
                 - recommendations"
            );
        }
    }
    out.trim_end().to_string()
}

fn write_ranked(out: &mut String, ranked: &[&CatalogItem]) {
    for (index, item) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. \"{}\" by {}: ${}",
            index + 1,
            item.title,
            item.creator,
            item.unit_price
        );
    }
}
