//! Simulated escrow purchase flow.
//!
//! # Responsibility
//! - Quote a rare listing (price + escrow fee + optional gratuity).
//! - Walk the `Reviewing -> Processing -> Confirmed` confirmation steps.
//!
//! # Invariants
//! - Gratuity can only change while reviewing.
//! - Confirming never touches any store; it only waits a fixed delay.

use crate::model::rare_item::RareItem;
use crate::pricing::tier::{
    compute_total, normalize_gratuity, resolve_tier, PricingError, PricingResult,
};
use log::info;
use std::time::Duration;

/// Default simulated processing time.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2_000);

/// Ordered steps of the escrow journey shown to buyers.
pub const ESCROW_STEPS: [&str; 8] = [
    "Buyer Selects Book",
    "Buyer Pays Escrow Fee",
    "Authentication Process",
    "Insurance Activates",
    "Secure Inspection Hub",
    "Certification & COA",
    "Funds Released",
    "Final Delivery",
];

/// Price breakdown for one rare listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseQuote {
    pub item_price: f64,
    pub escrow_fee: f64,
    pub gratuity: f64,
    pub total: f64,
}

/// Builds a quote for `item` with an optional gratuity.
///
/// # Errors
/// - `PriceOnRequest` when the listing has no public price.
/// - `InvalidValuation` when the listing price is negative.
pub fn quote_purchase(item: &RareItem, gratuity: f64) -> PricingResult<PurchaseQuote> {
    if item.is_price_on_request() {
        return Err(PricingError::PriceOnRequest(item.id.clone()));
    }

    let escrow_fee = resolve_tier(item.valuation)?;
    Ok(PurchaseQuote {
        item_price: item.valuation,
        escrow_fee,
        gratuity: normalize_gratuity(gratuity),
        total: compute_total(item.valuation, escrow_fee, gratuity),
    })
}

/// Purchase confirmation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStage {
    Reviewing,
    Processing,
    Confirmed,
}

/// In-memory purchase flow for one listing.
#[derive(Debug, Clone)]
pub struct PurchaseFlow {
    item: RareItem,
    quote: PurchaseQuote,
    stage: PurchaseStage,
    processing_delay: Duration,
}

impl PurchaseFlow {
    /// Opens a flow in `Reviewing` with no gratuity.
    pub fn new(item: RareItem) -> PricingResult<Self> {
        let quote = quote_purchase(&item, 0.0)?;
        Ok(Self {
            item,
            quote,
            stage: PurchaseStage::Reviewing,
            processing_delay: DEFAULT_PROCESSING_DELAY,
        })
    }

    /// Overrides the simulated processing delay.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    pub fn item(&self) -> &RareItem {
        &self.item
    }

    pub fn quote(&self) -> &PurchaseQuote {
        &self.quote
    }

    pub fn stage(&self) -> PurchaseStage {
        self.stage
    }

    /// Re-quotes with a new gratuity. Ignored once confirmation started.
    pub fn set_gratuity(&mut self, gratuity: f64) -> PricingResult<()> {
        if self.stage != PurchaseStage::Reviewing {
            return Ok(());
        }
        self.quote = quote_purchase(&self.item, gratuity)?;
        Ok(())
    }

    /// Runs the simulated confirmation and returns the final quote.
    ///
    /// Calling again after confirmation returns immediately.
    pub async fn confirm(&mut self) -> PurchaseQuote {
        if self.stage == PurchaseStage::Confirmed {
            return self.quote;
        }

        self.stage = PurchaseStage::Processing;
        tokio::time::sleep(self.processing_delay).await;
        self.stage = PurchaseStage::Confirmed;
        info!(
            "event=purchase_confirm module=pricing status=ok item_id={} escrow_fee={}",
            self.item.id, self.quote.escrow_fee
        );
        self.quote
    }
}
