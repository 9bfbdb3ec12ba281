//! Orderer identities and the submission payload handed to the order API.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MenuItemId;

/// Opaque key of a customer user (an employee of a subscriber company).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerUserId(pub i64);

impl fmt::Display for CustomerUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "customer_user_{}", self.0)
    }
}

/// Opaque key of a subscriber company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub i64);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "company_{}", self.0)
    }
}

/// Opaque key of a submitted order, echoed back by the order API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// An employee eligible to receive a proxy order, as listed by the
/// employee directory for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: CustomerUserId,
    pub username: String,
    pub email: String,
}

/// One submitted line: a menu item and a positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item: MenuItemId,
    pub quantity: u32,
}

/// The payload handed to the external order API.
///
/// Built once per submission attempt and not retained afterwards. `items`
/// only ever contains lines with quantity > 0, and `is_confirmed` is always
/// true: orders are submitted already confirmed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmissionRequest {
    pub customer_user: CustomerUserId,
    pub order_date: NaiveDate,
    pub total_amount: Decimal,
    pub is_confirmed: bool,
    pub items: Vec<OrderLine>,
}

/// Success acknowledgment from the order API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAck {
    pub id: OrderId,
    pub order_date: NaiveDate,
    pub total_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_request_uses_external_field_names() {
        let request = OrderSubmissionRequest {
            customer_user: CustomerUserId(1),
            order_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            total_amount: Decimal::from(1800),
            is_confirmed: true,
            items: vec![
                OrderLine { menu_item: MenuItemId(4), quantity: 2 },
                OrderLine { menu_item: MenuItemId(9), quantity: 1 },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["customer_user"], 1);
        assert_eq!(json["order_date"], "2024-06-03");
        assert_eq!(json["is_confirmed"], true);
        assert_eq!(json["items"][0]["menu_item"], 4);
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn ack_round_trips_through_json() {
        let ack = OrderAck {
            id: OrderId(42),
            order_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            total_amount: Decimal::from(1300),
        };
        let json = serde_json::to_string(&ack).unwrap();
        let back: OrderAck = serde_json::from_str(&json).unwrap();
        assert_eq!(ack, back);
    }
}
