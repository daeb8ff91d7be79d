use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{ScheduleAction, ScheduleActionResult, ScheduleQuery};
use crate::actor_framework::Entity;
use crate::domain::{ensure_items, Schedule, ScheduleDetails, ScheduleStatus};

impl Entity for Schedule {
    const NAME: &'static str = "schedule";
    type Id = Uuid;
    type CreatePayload = ScheduleDetails;
    type Patch = ScheduleDetails;
    type Action = ScheduleAction;
    type ActionResult = ScheduleActionResult;
    type Query = ScheduleQuery;

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn from_create(id: Uuid, now: DateTime<Utc>, details: ScheduleDetails) -> Result<Self, String> {
        ensure_items(&details.items)?;
        Ok(Self {
            id,
            scheduled: now,
            status: ScheduleStatus::Pending,
            items: details.items,
        })
    }

    fn on_update(&mut self, details: ScheduleDetails) -> Result<(), String> {
        ensure_items(&details.items)?;
        self.items = details.items;
        Ok(())
    }

    /// # Actions
    /// - `Cancel`: status becomes `cancelled`
    /// - `Start`: status becomes `progress`
    /// - `Status`: returns the current status
    ///
    /// Transitions are not checked against the current status.
    fn handle_action(&mut self, action: ScheduleAction) -> Result<ScheduleActionResult, String> {
        match action {
            ScheduleAction::Cancel => {
                self.status = ScheduleStatus::Cancelled;
                Ok(ScheduleActionResult::Updated(self.clone()))
            }
            ScheduleAction::Start => {
                self.status = ScheduleStatus::Progress;
                Ok(ScheduleActionResult::Updated(self.clone()))
            }
            ScheduleAction::Status => Ok(ScheduleActionResult::Status(self.status)),
        }
    }
}
