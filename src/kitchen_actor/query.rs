use chrono::{DateTime, Utc};

use crate::domain::{Schedule, ScheduleStatus};
use crate::query::{at_or_after, flag_matches, QueryFilter};

/// Filters accepted when listing kitchen schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleQuery {
    /// `Some(true)` keeps schedules in `progress`, `Some(false)` everything else.
    pub progress: Option<bool>,
    /// Keeps schedules whose `scheduled` time is at or after this instant.
    pub since: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

impl QueryFilter<Schedule> for ScheduleQuery {
    fn matches(&self, schedule: &Schedule) -> bool {
        flag_matches(self.progress, schedule.status == ScheduleStatus::Progress)
            && at_or_after(self.since, &schedule.scheduled)
    }

    fn limit(&self) -> Option<usize> {
        self.limit
    }
}
