use tracing::{debug, instrument};
use uuid::Uuid;

use crate::actor_framework::ResourceClient;
use crate::domain::{Schedule, ScheduleStatus};
use crate::kitchen_actor::{ScheduleAction, ScheduleActionResult, ScheduleError};

/// Client for interacting with the kitchen Schedule actor.
#[derive(Clone)]
pub struct ScheduleClient {
    inner: ResourceClient<Schedule>,
}

impl_basic_client!(ScheduleClient, Schedule, ScheduleError, schedule);

impl ScheduleClient {
    #[instrument(skip(self))]
    pub async fn cancel_schedule(&self, id: Uuid) -> Result<Schedule, ScheduleError> {
        self.transition(id, ScheduleAction::Cancel).await
    }

    #[instrument(skip(self))]
    pub async fn start_schedule(&self, id: Uuid) -> Result<Schedule, ScheduleError> {
        self.transition(id, ScheduleAction::Start).await
    }

    #[instrument(skip(self))]
    pub async fn schedule_status(&self, id: Uuid) -> Result<ScheduleStatus, ScheduleError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ScheduleAction::Status).await {
            Ok(ScheduleActionResult::Status(status)) => Ok(status),
            Ok(_) => Err(ScheduleError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn transition(&self, id: Uuid, action: ScheduleAction) -> Result<Schedule, ScheduleError> {
        debug!("Sending request");
        match self.inner.perform_action(id, action).await {
            Ok(ScheduleActionResult::Updated(schedule)) => Ok(schedule),
            Ok(_) => Err(ScheduleError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }
}
