use std::time::Duration;
use tomekeeper_core::pricing::purchase::ESCROW_STEPS;
use tomekeeper_core::pricing::tier::{parse_gratuity, pricing_tiers, tier_for, GRATUITY_PRESETS};
use tomekeeper_core::repo::sample_data::rare_catalog;
use tomekeeper_core::{
    compute_total, quote_purchase, resolve_tier, PricingError, PurchaseFlow, PurchaseStage,
    RareItem,
};

fn rare(id: &str) -> RareItem {
    rare_catalog()
        .into_iter()
        .find(|item| item.id == id)
        .expect("rare item should exist")
}

#[test]
fn tier_boundaries_are_exact() {
    assert_eq!(resolve_tier(0.0).unwrap(), 750.0);
    assert_eq!(resolve_tier(99_999.0).unwrap(), 750.0);
    assert_eq!(resolve_tier(100_000.0).unwrap(), 1_500.0);
    assert_eq!(resolve_tier(999_999.0).unwrap(), 1_500.0);
    assert_eq!(resolve_tier(1_000_000.0).unwrap(), 3_500.0);
    assert_eq!(resolve_tier(9_999_999.99).unwrap(), 3_500.0);
    assert_eq!(resolve_tier(10_000_000.0).unwrap(), 5_000.0);
    assert_eq!(resolve_tier(1e12).unwrap(), 5_000.0);
}

#[test]
fn tiers_partition_without_gaps() {
    let tiers = pricing_tiers();
    assert_eq!(tiers[0].lower_bound, 0.0);
    for pair in tiers.windows(2) {
        assert_eq!(pair[0].upper_bound, Some(pair[1].lower_bound));
    }
    assert_eq!(tiers[tiers.len() - 1].upper_bound, None);
}

#[test]
fn invalid_valuations_are_rejected() {
    assert_eq!(
        resolve_tier(-1.0),
        Err(PricingError::InvalidValuation(-1.0))
    );
    assert!(matches!(
        tier_for(f64::NAN),
        Err(PricingError::InvalidValuation(_))
    ));
    assert!(tier_for(f64::INFINITY).is_err());
}

#[test]
fn total_clamps_negative_gratuity() {
    assert_eq!(compute_total(500_000.0, 1_500.0, 250.0), 501_750.0);
    assert_eq!(compute_total(500_000.0, 1_500.0, -100.0), 501_500.0);
    assert_eq!(compute_total(500_000.0, 1_500.0, f64::NAN), 501_500.0);
}

#[test]
fn gratuity_text_defaults_to_zero() {
    assert_eq!(parse_gratuity(""), 0.0);
    assert_eq!(parse_gratuity("abc"), 0.0);
    assert_eq!(parse_gratuity("-20"), 0.0);
    assert_eq!(parse_gratuity(" 42.5 "), 42.5);
    assert_eq!(GRATUITY_PRESETS, [100.0, 250.0, 500.0]);
}

#[test]
fn quote_combines_tier_fee_and_gratuity() {
    let quote = quote_purchase(&rare("gutenberg-bible-leaf"), 250.0).unwrap();
    assert_eq!(quote.item_price, 185_000.0);
    assert_eq!(quote.escrow_fee, 1_500.0);
    assert_eq!(quote.gratuity, 250.0);
    assert_eq!(quote.total, 186_750.0);
}

#[test]
fn price_on_request_listing_cannot_be_quoted() {
    let err = quote_purchase(&rare("diamond-sutra-fragment"), 0.0).unwrap_err();
    assert_eq!(
        err,
        PricingError::PriceOnRequest("diamond-sutra-fragment".to_string())
    );
    assert!(PurchaseFlow::new(rare("diamond-sutra-fragment")).is_err());
}

#[tokio::test]
async fn purchase_flow_confirms_after_delay() {
    let mut flow = PurchaseFlow::new(rare("first-folio"))
        .unwrap()
        .with_processing_delay(Duration::from_millis(10));
    assert_eq!(flow.stage(), PurchaseStage::Reviewing);

    flow.set_gratuity(500.0).unwrap();
    let quote = flow.confirm().await;
    assert_eq!(flow.stage(), PurchaseStage::Confirmed);
    assert_eq!(quote.escrow_fee, 3_500.0);
    assert_eq!(quote.total, 9_950_000.0 + 3_500.0 + 500.0);

    flow.set_gratuity(100.0).unwrap();
    assert_eq!(flow.quote().gratuity, 500.0);
    assert_eq!(flow.confirm().await, quote);
}

#[test]
fn escrow_journey_has_eight_distinct_steps() {
    assert_eq!(ESCROW_STEPS.len(), 8);
    let mut unique = ESCROW_STEPS.to_vec();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 8);
}
