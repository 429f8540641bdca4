//! Shipment types.

use serde::Deserialize;

use super::BadgeTone;
use crate::core::TextFilter;

/// Where a shipment is in its journey.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Preparing,
    InTransit,
    Customs,
    Delivered,
    Returned,
}

impl ShipmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Preparing => "Preparing",
            Self::InTransit => "In transit",
            Self::Customs => "Customs",
            Self::Delivered => "Delivered",
            Self::Returned => "Returned",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Preparing => BadgeTone::Neutral,
            Self::InTransit => BadgeTone::Info,
            Self::Customs => BadgeTone::Warning,
            Self::Delivered => BadgeTone::Success,
            Self::Returned => BadgeTone::Danger,
        }
    }
}

/// A shipment as returned by `GET /api/shipments`.
#[derive(Clone, Debug, Deserialize)]
pub struct Shipment {
    pub id: u64,
    pub tracking_number: String,
    pub carrier: String,
    /// Sales order this shipment fulfills.
    pub order_reference: String,
    pub destination_city: String,
    pub destination_country: String,
    pub status: ShipmentStatus,
    pub shipped_at: Option<String>,
    /// Estimated arrival date, if the carrier provides one.
    pub eta: Option<String>,
}

impl TextFilter for Shipment {
    fn filter_fields(&self) -> Vec<&str> {
        vec![
            &self.tracking_number,
            &self.carrier,
            &self.order_reference,
            &self.destination_city,
            &self.destination_country,
            self.status.label(),
        ]
    }
}
