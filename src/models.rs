//! Wire Models
//!
//! Data structures matching the backend JSON API.

use serde::{Deserialize, Serialize};

/// Storage location types recognized by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerType {
    Fridge,
    Freezer,
    Pantry,
    Shopping,
}

impl ContainerType {
    /// Default-expiration rationale shown in the move modal. The shopping
    /// list carries no expiration semantics, so it gets none.
    pub fn expiration_hint(self) -> Option<&'static str> {
        match self {
            ContainerType::Freezer => Some("Extended expiration (frozen storage)"),
            ContainerType::Fridge => Some("Standard refrigerated expiration"),
            ContainerType::Pantry => Some("Room-temperature expiration"),
            ContainerType::Shopping => None,
        }
    }

    pub fn is_shopping(self) -> bool {
        self == ContainerType::Shopping
    }
}

/// A named, typed storage location owned by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: u32,
    pub name: String,
    pub container_type: ContainerType,
}

/// One food association inside a container: catalog food plus quantity
/// and optional expiration date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerItem {
    pub id: u32,
    pub food_name: String,
    pub quantity: u32,
    pub expiration_date: Option<String>,
    pub days_until_expiration: Option<i32>,
}

impl ContainerItem {
    pub fn status(&self) -> Option<ExpirationStatus> {
        self.days_until_expiration.map(ExpirationStatus::from_days)
    }
}

/// A container together with its items, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContainerDetail {
    pub container: Container,
    pub items: Vec<ContainerItem>,
}

/// A globally shared catalog entry, independent of any container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFood {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One category section of the catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub key: String,
    pub label: String,
    pub foods: Vec<CatalogFood>,
}

/// One entry of a batch quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityChange {
    pub item_id: u32,
    pub quantity: u32,
}

// ========================
// Expiration status
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationBand {
    Expired,
    Warning,
    Fresh,
}

/// Expiration state derived from days-until-expiration.
///
/// Three bands: negative days are expired, 0..=3 expire soon, everything
/// else is fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationStatus {
    pub band: ExpirationBand,
    pub days: i32,
}

impl ExpirationStatus {
    pub fn from_days(days: i32) -> Self {
        let band = if days < 0 {
            ExpirationBand::Expired
        } else if days <= 3 {
            ExpirationBand::Warning
        } else {
            ExpirationBand::Fresh
        };
        Self { band, days }
    }

    pub fn css_class(&self) -> &'static str {
        match self.band {
            ExpirationBand::Expired => "expired",
            ExpirationBand::Warning => "warning",
            ExpirationBand::Fresh => "fresh",
        }
    }

    pub fn text(&self) -> String {
        match self.band {
            ExpirationBand::Expired => format!("Expired {} days ago", -self.days),
            ExpirationBand::Warning => format!("Expires in {} days", self.days),
            ExpirationBand::Fresh => format!("{} days remaining", self.days),
        }
    }
}

// ========================
// Mutation outcomes
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct MoveOutcome {
    pub success: bool,
    pub message: String,
    pub shopping_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOutcome {
    pub success: bool,
    pub message: String,
    pub quantity: u32,
    pub days_until_expiration: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
    pub shopping_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchUpdateOutcome {
    pub success: bool,
    pub message: String,
    pub updated: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchMoveOutcome {
    pub success: bool,
    pub message: String,
    pub moved: u32,
    pub shopping_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRemoveOutcome {
    pub success: bool,
    pub message: String,
    pub removed: u32,
    pub shopping_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchAddOutcome {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddOutcome {
    pub success: bool,
    pub message: String,
    pub created: bool,
    pub new_quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_band_counts_days_ago() {
        let status = ExpirationStatus::from_days(-2);
        assert_eq!(status.band, ExpirationBand::Expired);
        assert_eq!(status.css_class(), "expired");
        assert_eq!(status.text(), "Expired 2 days ago");
    }

    #[test]
    fn warning_band_covers_zero_through_three() {
        for days in 0..=3 {
            let status = ExpirationStatus::from_days(days);
            assert_eq!(status.band, ExpirationBand::Warning);
            assert_eq!(status.css_class(), "warning");
        }
        assert_eq!(ExpirationStatus::from_days(3).text(), "Expires in 3 days");
    }

    #[test]
    fn fresh_band_beyond_three_days() {
        let status = ExpirationStatus::from_days(10);
        assert_eq!(status.band, ExpirationBand::Fresh);
        assert_eq!(status.css_class(), "fresh");
        assert_eq!(status.text(), "10 days remaining");
    }

    #[test]
    fn expiration_hint_keyed_by_container_type() {
        assert_eq!(
            ContainerType::Freezer.expiration_hint(),
            Some("Extended expiration (frozen storage)")
        );
        assert_eq!(
            ContainerType::Fridge.expiration_hint(),
            Some("Standard refrigerated expiration")
        );
        assert_eq!(
            ContainerType::Pantry.expiration_hint(),
            Some("Room-temperature expiration")
        );
        assert_eq!(ContainerType::Shopping.expiration_hint(), None);
    }

    #[test]
    fn container_type_uses_wire_names() {
        let container: Container =
            serde_json::from_str(r#"{"id":3,"name":"Big Freezer","container_type":"FREEZER"}"#)
                .unwrap();
        assert_eq!(container.container_type, ContainerType::Freezer);
        assert!(!container.container_type.is_shopping());

        let shopping: ContainerType = serde_json::from_str(r#""SHOPPING""#).unwrap();
        assert!(shopping.is_shopping());
    }

    #[test]
    fn item_without_expiration_has_no_status() {
        let item = ContainerItem {
            id: 1,
            food_name: "Whole Milk".into(),
            quantity: 2,
            expiration_date: None,
            days_until_expiration: None,
        };
        assert_eq!(item.status(), None);
    }
}
