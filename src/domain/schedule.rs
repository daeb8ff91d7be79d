use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::LineItem;

/// Lifecycle states of a kitchen schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Pending,
    Progress,
    Cancelled,
    Finished,
}

/// A batch of line items the kitchen has been asked to prepare.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub id: Uuid,
    pub scheduled: DateTime<Utc>,
    pub status: ScheduleStatus,
    #[serde(rename = "order")]
    pub items: Vec<LineItem>,
}

/// Validated payload for creating or replacing a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDetails {
    pub items: Vec<LineItem>,
}

impl ScheduleDetails {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }
}
