//! Production job types.

use serde::Deserialize;

use super::BadgeTone;
use crate::core::TextFilter;

/// Shop-floor status of a production job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Queued,
    Running,
    Paused,
    QualityCheck,
    Done,
}

impl JobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::QualityCheck => "Quality check",
            Self::Done => "Done",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Queued => BadgeTone::Neutral,
            Self::Running => BadgeTone::Info,
            Self::Paused => BadgeTone::Warning,
            Self::QualityCheck => BadgeTone::Warning,
            Self::Done => BadgeTone::Success,
        }
    }
}

/// A production job as returned by `GET /api/production/jobs`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProductionJob {
    pub id: u64,
    /// Display code, e.g. "PJ-0310".
    pub code: String,
    pub product_name: String,
    pub quantity: u32,
    /// Unit of measure for the quantity ("pcs", "kg", ...).
    pub unit: String,
    pub status: JobStatus,
    /// Work center the job is assigned to.
    pub work_center: String,
    pub started_at: Option<String>,
    pub due_date: Option<String>,
}

impl TextFilter for ProductionJob {
    fn filter_fields(&self) -> Vec<&str> {
        vec![
            &self.code,
            &self.product_name,
            &self.work_center,
            self.status.label(),
        ]
    }
}
