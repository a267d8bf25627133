//! Marketplace pricing: escrow fee tiers and simulated purchases.
//!
//! # Responsibility
//! - Map a valuation to its flat escrow fee.
//! - Compose purchase totals and drive the simulated confirmation flow.
//!
//! # Invariants
//! - Tiers partition `[0, inf)` without gaps or overlaps.
//! - Purchases never produce durable state.

pub mod purchase;
pub mod tier;
