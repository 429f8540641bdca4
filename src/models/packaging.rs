//! Packaging run types.

use serde::Deserialize;

use super::BadgeTone;
use crate::core::TextFilter;

/// Progress of a packaging run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagingStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl PackagingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Neutral,
            Self::InProgress => BadgeTone::Info,
            Self::Completed => BadgeTone::Success,
        }
    }
}

/// A packaging run as returned by `GET /api/packaging/runs`.
#[derive(Clone, Debug, Deserialize)]
pub struct PackagingRun {
    pub id: u64,
    /// Display code, e.g. "PK-0088".
    pub code: String,
    /// Sales order this run packages.
    pub order_reference: String,
    pub status: PackagingStatus,
    pub package_count: u32,
    pub pallet_count: u32,
    pub packed_at: Option<String>,
}

impl TextFilter for PackagingRun {
    fn filter_fields(&self) -> Vec<&str> {
        vec![&self.code, &self.order_reference, self.status.label()]
    }
}
