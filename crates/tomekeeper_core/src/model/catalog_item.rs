//! Catalog item domain model and edit-draft validation.
//!
//! # Responsibility
//! - Define the canonical inventory record shared by list/search/stats.
//! - Turn untyped form input into validated fields in a single pass.
//!
//! # Invariants
//! - `id` is assigned by the backing store and never changes afterwards.
//! - `unit_price` of validated fields is finite and strictly positive.
//! - Validation reports every violated rule, not only the first one.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier assigned by the backing store at creation time.
pub type CatalogItemId = i64;

/// Canonical inventory record.
///
/// Serialized with the field names the external catalog service speaks
/// (`isbn`, `author`, `price`, `quantity`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    /// External identifier, usually an ISBN. Not required to be unique.
    #[serde(rename = "isbn")]
    pub code: String,
    pub title: String,
    #[serde(rename = "author")]
    pub creator: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(rename = "quantity")]
    pub quantity_on_hand: u32,
    /// Optional cover reference; renderers fall back to a placeholder.
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl CatalogItem {
    /// Builds a record from validated fields and a store-assigned id.
    pub fn from_fields(id: CatalogItemId, fields: CatalogItemFields) -> Self {
        Self {
            id,
            code: fields.code,
            title: fields.title,
            creator: fields.creator,
            unit_price: fields.unit_price,
            quantity_on_hand: fields.quantity_on_hand,
            image_ref: fields.image_ref,
        }
    }

    /// Returns the mutable fields of this record, without its id.
    pub fn fields(&self) -> CatalogItemFields {
        CatalogItemFields {
            code: self.code.clone(),
            title: self.title.clone(),
            creator: self.creator.clone(),
            unit_price: self.unit_price,
            quantity_on_hand: self.quantity_on_hand,
            image_ref: self.image_ref.clone(),
        }
    }

    /// Stock value of this record (`unit_price * quantity_on_hand`).
    pub fn stock_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity_on_hand)
    }
}

/// Validated item content without identity.
///
/// This is the body sent to create/update calls; the store owns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemFields {
    #[serde(rename = "isbn")]
    pub code: String,
    pub title: String,
    #[serde(rename = "author")]
    pub creator: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(rename = "quantity")]
    pub quantity_on_hand: u32,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

/// Form field addressed by a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Code,
    Title,
    Creator,
    UnitPrice,
    QuantityOnHand,
}

impl DraftField {
    /// Stable field key, matching the wire names used by form renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "isbn",
            Self::Title => "title",
            Self::Creator => "author",
            Self::UnitPrice => "price",
            Self::QuantityOnHand => "quantity",
        }
    }
}

/// One violated validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: DraftField,
    pub message: String,
}

/// Every rule violated by one draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Returns all field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the fields that failed validation.
    pub fn fields(&self) -> Vec<DraftField> {
        self.errors.iter().map(|err| err.field).collect()
    }

    /// Returns the message for one field, if that field failed.
    pub fn message_for(&self, field: DraftField) -> Option<&str> {
        self.errors
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|err| format!("{}: {}", err.field.as_str(), err.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid catalog item: {joined}")
    }
}

impl Error for ValidationErrors {}

/// Untyped edit form content for create/update flows.
///
/// Numeric fields stay strings until validation so that a renderer can
/// bind them directly to text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogItemDraft {
    pub code: String,
    pub title: String,
    pub creator: String,
    pub unit_price: String,
    pub quantity_on_hand: String,
    pub image_ref: String,
}

impl CatalogItemDraft {
    /// Prefills a draft from an existing record for the edit flow.
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            code: item.code.clone(),
            title: item.title.clone(),
            creator: item.creator.clone(),
            unit_price: item.unit_price.to_string(),
            quantity_on_hand: item.quantity_on_hand.to_string(),
            image_ref: item.image_ref.clone().unwrap_or_default(),
        }
    }

    /// Validates every field independently and returns trimmed fields.
    ///
    /// # Errors
    /// - Returns all violated rules together when any field is invalid.
    pub fn validate(&self) -> Result<CatalogItemFields, ValidationErrors> {
        let mut errors = Vec::new();

        let code = required_text(&self.code, DraftField::Code, "ISBN is required", &mut errors);
        let title = required_text(&self.title, DraftField::Title, "Title is required", &mut errors);
        let creator = required_text(
            &self.creator,
            DraftField::Creator,
            "Author is required",
            &mut errors,
        );

        let unit_price = match self.unit_price.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Some(value),
            _ => {
                errors.push(FieldError {
                    field: DraftField::UnitPrice,
                    message: "Price must be greater than 0".to_string(),
                });
                None
            }
        };

        let quantity_on_hand = match self.quantity_on_hand.trim().parse::<i64>() {
            Ok(value) if value >= 0 => match u32::try_from(value) {
                Ok(quantity) => Some(quantity),
                Err(_) => {
                    errors.push(FieldError {
                        field: DraftField::QuantityOnHand,
                        message: "Quantity is too large".to_string(),
                    });
                    None
                }
            },
            Ok(_) => {
                errors.push(FieldError {
                    field: DraftField::QuantityOnHand,
                    message: "Quantity must be 0 or greater".to_string(),
                });
                None
            }
            Err(_) => {
                errors.push(FieldError {
                    field: DraftField::QuantityOnHand,
                    message: "Quantity must be a whole number".to_string(),
                });
                None
            }
        };

        match (code, title, creator, unit_price, quantity_on_hand) {
            (Some(code), Some(title), Some(creator), Some(unit_price), Some(quantity_on_hand))
                if errors.is_empty() =>
            {
                let image_ref = self.image_ref.trim();
                Ok(CatalogItemFields {
                    code,
                    title,
                    creator,
                    unit_price,
                    quantity_on_hand,
                    image_ref: (!image_ref.is_empty()).then(|| image_ref.to_string()),
                })
            }
            _ => Err(ValidationErrors { errors }),
        }
    }
}

fn required_text(
    value: &str,
    field: DraftField,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            message: message.to_string(),
        });
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{CatalogItem, CatalogItemDraft, DraftField};

    fn valid_draft() -> CatalogItemDraft {
        CatalogItemDraft {
            code: " 978-0-00-000000-1 ".to_string(),
            title: "Dune".to_string(),
            creator: "Frank Herbert".to_string(),
            unit_price: "9.5".to_string(),
            quantity_on_hand: "0".to_string(),
            image_ref: "   ".to_string(),
        }
    }

    #[test]
    fn validate_trims_text_and_drops_blank_image() {
        let fields = valid_draft().validate().expect("draft should be valid");
        assert_eq!(fields.code, "978-0-00-000000-1");
        assert_eq!(fields.quantity_on_hand, 0);
        assert_eq!(fields.image_ref, None);
    }

    #[test]
    fn validate_rejects_zero_price() {
        let mut draft = valid_draft();
        draft.unit_price = "0".to_string();
        let errors = draft.validate().expect_err("zero price must fail");
        assert_eq!(errors.fields(), vec![DraftField::UnitPrice]);
    }

    #[test]
    fn validate_rejects_fractional_quantity() {
        let mut draft = valid_draft();
        draft.quantity_on_hand = "2.5".to_string();
        let errors = draft.validate().expect_err("fractional quantity must fail");
        assert_eq!(
            errors.message_for(DraftField::QuantityOnHand),
            Some("Quantity must be a whole number")
        );
    }

    #[test]
    fn draft_from_item_round_trips_through_validation() {
        let item = CatalogItem {
            id: 7,
            code: "isbn".to_string(),
            title: "Title".to_string(),
            creator: "Author".to_string(),
            unit_price: 12.25,
            quantity_on_hand: 4,
            image_ref: Some("cover.png".to_string()),
        };
        let fields = CatalogItemDraft::from_item(&item)
            .validate()
            .expect("prefilled draft should be valid");
        assert_eq!(CatalogItem::from_fields(7, fields), item);
    }
}
