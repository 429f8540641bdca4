//! Sales order types.

use serde::Deserialize;

use super::BadgeTone;
use crate::core::TextFilter;

/// Lifecycle status of a sales order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Draft,
    Confirmed,
    InProduction,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Human label for the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Confirmed => "Confirmed",
            Self::InProduction => "In production",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Badge tone for the status.
    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Draft => BadgeTone::Neutral,
            Self::Confirmed => BadgeTone::Info,
            Self::InProduction => BadgeTone::Warning,
            Self::Shipped => BadgeTone::Info,
            Self::Delivered => BadgeTone::Success,
            Self::Cancelled => BadgeTone::Danger,
        }
    }
}

/// A sales order as returned by `GET /api/orders`.
#[derive(Clone, Debug, Deserialize)]
pub struct Order {
    pub id: u64,
    /// Display reference, e.g. "SO-1042".
    pub reference: String,
    pub customer_name: String,
    pub status: OrderStatus,
    /// Order total in cents.
    pub total_cents: i64,
    /// ISO date the order was placed (YYYY-MM-DD).
    pub placed_at: String,
    /// Promised delivery date, if committed.
    pub due_date: Option<String>,
    pub line_count: u32,
}

impl TextFilter for Order {
    fn filter_fields(&self) -> Vec<&str> {
        vec![&self.reference, &self.customer_name, self.status.label()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_from_wire_format() {
        let json = r#"{
            "id": 7,
            "reference": "SO-1042",
            "customer_name": "Acme Fittings",
            "status": "in_production",
            "total_cents": 129950,
            "placed_at": "2026-08-12",
            "due_date": null,
            "line_count": 4
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::InProduction);
        assert_eq!(order.total_cents, 129_950);
        assert!(order.due_date.is_none());
    }

    #[test]
    fn test_filter_matches_reference_and_customer() {
        let order = Order {
            id: 1,
            reference: "SO-1042".into(),
            customer_name: "Acme Fittings".into(),
            status: OrderStatus::Confirmed,
            total_cents: 0,
            placed_at: "2026-01-01".into(),
            due_date: None,
            line_count: 1,
        };
        assert!(order.matches("1042"));
        assert!(order.matches("acme"));
        assert!(order.matches("confirmed"));
        assert!(!order.matches("shipped"));
    }
}
