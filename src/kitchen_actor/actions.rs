use crate::domain::{Schedule, ScheduleStatus};

/// Custom actions for Schedule entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAction {
    /// Marks the schedule as `cancelled`.
    Cancel,
    /// Moves the schedule into `progress`.
    Start,
    /// Reads the current status without modifying it.
    Status,
}

/// Results from ScheduleActions.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleActionResult {
    /// Result from Cancel and Start - the schedule after the transition
    Updated(Schedule),
    /// Result from Status
    Status(ScheduleStatus),
}
