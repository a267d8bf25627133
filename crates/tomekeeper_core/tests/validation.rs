use tomekeeper_core::{CatalogItemDraft, DraftField};

fn draft(code: &str, title: &str, creator: &str, price: &str, quantity: &str) -> CatalogItemDraft {
    CatalogItemDraft {
        code: code.to_string(),
        title: title.to_string(),
        creator: creator.to_string(),
        unit_price: price.to_string(),
        quantity_on_hand: quantity.to_string(),
        image_ref: String::new(),
    }
}

#[test]
fn all_violations_are_reported_together() {
    let errors = draft("", "", "x", "-1", "-1").validate().unwrap_err();

    assert_eq!(
        errors.fields(),
        vec![
            DraftField::Code,
            DraftField::Title,
            DraftField::UnitPrice,
            DraftField::QuantityOnHand
        ]
    );
    assert_eq!(errors.message_for(DraftField::Code), Some("ISBN is required"));
    assert_eq!(
        errors.message_for(DraftField::QuantityOnHand),
        Some("Quantity must be 0 or greater")
    );
    assert_eq!(errors.message_for(DraftField::Creator), None);
}

#[test]
fn whitespace_only_text_is_missing() {
    let errors = draft("  ", "\t", " ", "5", "1").validate().unwrap_err();
    assert_eq!(errors.len(), 3);
}

#[test]
fn numeric_fields_must_parse() {
    let errors = draft("c", "t", "a", "free", "2.5").validate().unwrap_err();
    assert_eq!(
        errors.message_for(DraftField::UnitPrice),
        Some("Price must be greater than 0")
    );
    assert_eq!(
        errors.message_for(DraftField::QuantityOnHand),
        Some("Quantity must be a whole number")
    );

    let zero_price = draft("c", "t", "a", "0", "0").validate().unwrap_err();
    assert_eq!(zero_price.fields(), vec![DraftField::UnitPrice]);
}

#[test]
fn valid_draft_is_trimmed_and_zero_stock_is_allowed() {
    let mut input = draft(" 978-1 ", " Dune ", " Frank Herbert ", " 18.5 ", " 0 ");
    input.image_ref = "   ".to_string();

    let fields = input.validate().unwrap();
    assert_eq!(fields.code, "978-1");
    assert_eq!(fields.title, "Dune");
    assert_eq!(fields.creator, "Frank Herbert");
    assert_eq!(fields.unit_price, 18.5);
    assert_eq!(fields.quantity_on_hand, 0);
    assert_eq!(fields.image_ref, None);
}
