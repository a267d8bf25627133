//! Escrow fee tier table and total computation.
//!
//! # Invariants
//! - Lower bounds are inclusive, upper bounds exclusive.
//! - The last tier is unbounded above.
//! - Negative or non-finite valuations are rejected, never mapped to the
//!   lowest tier.

use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PricingResult<T> = Result<T, PricingError>;

/// Pricing failure.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Valuation is negative or not a finite number. Indicates a caller bug.
    InvalidValuation(f64),
    /// Listing has no public price and cannot be quoted.
    PriceOnRequest(String),
}

impl Display for PricingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValuation(value) => write!(f, "invalid valuation: {value}"),
            Self::PriceOnRequest(item_id) => {
                write!(f, "listing `{item_id}` is priced on request")
            }
        }
    }
}

impl Error for PricingError {}

/// One valuation bracket and its flat fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingTier {
    /// Inclusive lower bound.
    pub lower_bound: f64,
    /// Exclusive upper bound; `None` for the last tier.
    pub upper_bound: Option<f64>,
    pub flat_fee: f64,
}

impl PricingTier {
    /// Returns whether `valuation` falls inside this tier.
    pub fn contains(&self, valuation: f64) -> bool {
        valuation >= self.lower_bound && self.upper_bound.map_or(true, |upper| valuation < upper)
    }
}

const PRICING_TIERS: [PricingTier; 4] = [
    PricingTier {
        lower_bound: 0.0,
        upper_bound: Some(100_000.0),
        flat_fee: 750.0,
    },
    PricingTier {
        lower_bound: 100_000.0,
        upper_bound: Some(1_000_000.0),
        flat_fee: 1_500.0,
    },
    PricingTier {
        lower_bound: 1_000_000.0,
        upper_bound: Some(10_000_000.0),
        flat_fee: 3_500.0,
    },
    PricingTier {
        lower_bound: 10_000_000.0,
        upper_bound: None,
        flat_fee: 5_000.0,
    },
];

/// Preset gratuity amounts offered next to the free-form input.
pub const GRATUITY_PRESETS: [f64; 3] = [100.0, 250.0, 500.0];

/// Returns the full tier table in ascending order.
pub fn pricing_tiers() -> &'static [PricingTier] {
    &PRICING_TIERS
}

/// Returns the tier containing `valuation`.
///
/// # Errors
/// - `InvalidValuation` for negative, NaN or infinite input.
pub fn tier_for(valuation: f64) -> PricingResult<&'static PricingTier> {
    if !valuation.is_finite() || valuation < 0.0 {
        error!(
            "event=tier_resolve module=pricing status=error error_code=invalid_valuation valuation={}",
            valuation
        );
        return Err(PricingError::InvalidValuation(valuation));
    }

    PRICING_TIERS
        .iter()
        .find(|tier| tier.contains(valuation))
        .ok_or(PricingError::InvalidValuation(valuation))
}

/// Returns the flat escrow fee for `valuation`.
pub fn resolve_tier(valuation: f64) -> PricingResult<f64> {
    tier_for(valuation).map(|tier| tier.flat_fee)
}

/// Item price plus fee plus gratuity; a negative gratuity counts as zero.
pub fn compute_total(item_price: f64, tier_fee: f64, gratuity: f64) -> f64 {
    item_price + tier_fee + normalize_gratuity(gratuity)
}

/// Parses free-form gratuity input; blank or non-numeric text is zero.
pub fn parse_gratuity(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .map(normalize_gratuity)
        .unwrap_or(0.0)
}

/// Clamps a gratuity to a finite non-negative amount.
pub(crate) fn normalize_gratuity(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
