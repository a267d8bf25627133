//! Rare marketplace listing model.
//!
//! Rare items come from a static catalog and are never created, edited or
//! deleted through core APIs.

use serde::{Deserialize, Serialize};

/// One authenticated listing in the rare marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RareItem {
    /// URL slug, unique within the rare catalog.
    pub id: String,
    pub title: String,
    #[serde(rename = "author")]
    pub creator: String,
    /// Signed year; negative values are BCE.
    pub year: i32,
    /// Asking price. Zero means "price on request".
    #[serde(rename = "price")]
    pub valuation: f64,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    pub provenance: String,
    pub condition: String,
    pub condition_grade: String,
    pub description: String,
    pub appraisal_summary: String,
    pub verified: bool,
}

impl RareItem {
    /// Returns whether the listing requires a private consultation.
    pub fn is_price_on_request(&self) -> bool {
        self.valuation == 0.0
    }

    /// Human-readable year label.
    pub fn display_year(&self) -> String {
        display_year(self.year)
    }
}

/// Formats a signed year: `350 BCE`, `c. 868`, or `1455`.
pub fn display_year(year: i32) -> String {
    if year < 0 {
        return format!("{} BCE", year.unsigned_abs());
    }
    if year < 1000 {
        return format!("c. {year}");
    }
    year.to_string()
}

#[cfg(test)]
mod tests {
    use super::display_year;

    #[test]
    fn display_year_covers_all_eras() {
        assert_eq!(display_year(-350), "350 BCE");
        assert_eq!(display_year(868), "c. 868");
        assert_eq!(display_year(1455), "1455");
    }
}
