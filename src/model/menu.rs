//! Menu catalog types supplied by the external catalog service.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque key of a menu item in the external catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub i64);

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

/// A single item on the vendor's menu.
///
/// Owned and supplied by the catalog service; this crate only reads it.
/// Prices are in yen. Example data carries whole-yen amounts, but the model
/// does not assume integral prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    pub allergy_info: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn katsu_bento() -> MenuItem {
        MenuItem {
            id: MenuItemId(1),
            name: "カツ弁当".to_string(),
            price: Decimal::from(500),
            description: "Pork cutlet bento".to_string(),
            allergy_info: Some("wheat, egg".to_string()),
            image: None,
            is_active: true,
        }
    }

    #[test]
    fn menu_item_round_trips_through_json() {
        let item = katsu_bento();
        let json = serde_json::to_string(&item).unwrap();
        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn menu_item_id_serializes_as_bare_integer() {
        let json = serde_json::to_value(katsu_bento()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["allergy_info"], "wheat, egg");
    }

    #[test]
    fn catalog_payload_with_null_optionals_parses() {
        let json = r#"{
            "id": 7,
            "name": "Salad Bowl",
            "price": "480.5",
            "description": "",
            "allergy_info": null,
            "image": null,
            "is_active": false
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, MenuItemId(7));
        assert_eq!(item.price, "480.5".parse::<Decimal>().unwrap());
        assert!(item.allergy_info.is_none());
        assert!(!item.is_active);
    }
}
