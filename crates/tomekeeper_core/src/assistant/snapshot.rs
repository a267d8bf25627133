//! Plain-text catalog snapshot sent as assistant context.

use crate::model::catalog_item::CatalogItem;
use crate::search::query::LOW_STOCK_THRESHOLD;

/// Renders one line per item, flagging low stock.
pub fn catalog_snapshot(items: &[CatalogItem]) -> String {
    items
        .iter()
        .map(snapshot_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn snapshot_line(item: &CatalogItem) -> String {
    let low_stock = if item.quantity_on_hand < LOW_STOCK_THRESHOLD {
        " - LOW STOCK"
    } else {
        ""
    };
    format!(
        "- \"{}\" by {} (ISBN: {}, Price: ${}, Stock: {}{})",
        item.title, item.creator, item.code, item.unit_price, item.quantity_on_hand, low_stock
    )
}

#[cfg(test)]
mod tests {
    use super::catalog_snapshot;
    use crate::model::catalog_item::CatalogItem;

    #[test]
    fn snapshot_flags_low_stock() {
        let items = vec![CatalogItem {
            id: 1,
            code: "978-1".to_string(),
            title: "Hamlet".to_string(),
            creator: "William Shakespeare".to_string(),
            unit_price: 9.99,
            quantity_on_hand: 2,
            image_ref: None,
        }];
        assert_eq!(
            catalog_snapshot(&items),
            "- \"Hamlet\" by William Shakespeare (ISBN: 978-1, Price: $9.99, Stock: 2 - LOW STOCK)"
        );
    }
}
