//! Substring search and inventory statistics.
//!
//! # Responsibility
//! - Filter catalog items by a free-text query.
//! - Aggregate counts, units and stock value for the stats panel.
//!
//! # Invariants
//! - Filtering never reorders: output order equals input order.
//! - A blank query returns the whole collection.
//! - Title/creator matching is case-insensitive; code matching is
//!   case-sensitive against the raw query.
//! - Stats never divide by zero.

use crate::model::catalog_item::CatalogItem;

/// Stock strictly below this count is reported as low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Aggregates shown above the catalog list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    pub title_count: usize,
    pub total_units: u64,
    pub total_value: f64,
    /// Unit-weighted average: `total_value / total_units`.
    pub average_unit_price: f64,
}

impl CatalogStats {
    pub const EMPTY: Self = Self {
        title_count: 0,
        total_units: 0,
        total_value: 0.0,
        average_unit_price: 0.0,
    };
}

/// Returns items whose title, creator or code contains `query`.
///
/// The query is matched as-is (not trimmed) once it is known to be
/// non-blank, so inner and edge whitespace are significant.
pub fn filter_by_query(items: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(item, query, &needle))
        .cloned()
        .collect()
}

/// Returns whether one item matches a non-blank query.
///
/// `lowered` must be `raw.to_lowercase()`.
pub fn matches_query(item: &CatalogItem, raw: &str, lowered: &str) -> bool {
    item.title.to_lowercase().contains(lowered)
        || item.creator.to_lowercase().contains(lowered)
        || item.code.contains(raw)
}

/// Computes stats over `items`; an empty slice yields all zeros.
pub fn compute_stats(items: &[CatalogItem]) -> CatalogStats {
    let total_units = items
        .iter()
        .map(|item| u64::from(item.quantity_on_hand))
        .sum::<u64>();
    let total_value = items.iter().map(CatalogItem::stock_value).sum::<f64>();
    let average_unit_price = if total_units > 0 {
        total_value / total_units as f64
    } else {
        0.0
    };

    CatalogStats {
        title_count: items.len(),
        total_units,
        total_value,
        average_unit_price,
    }
}

/// Returns items with stock below [`LOW_STOCK_THRESHOLD`], in input order.
pub fn low_stock_items(items: &[CatalogItem]) -> Vec<&CatalogItem> {
    items
        .iter()
        .filter(|item| item.quantity_on_hand < LOW_STOCK_THRESHOLD)
        .collect()
}
