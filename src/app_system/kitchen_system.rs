use tokio::task::{JoinError, JoinHandle};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::actor_framework::{ResourceActor, ResourceClient};
use crate::clients::ScheduleClient;
use crate::domain::Schedule;

/// Owns the schedule actor for the lifetime of the kitchen service.
pub struct KitchenSystem {
    pub schedule_client: ScheduleClient,
    handle: JoinHandle<()>,
}

impl KitchenSystem {
    #[instrument(name = "kitchen_system")]
    pub fn new(buffer_size: usize) -> Self {
        let (actor, resource_client) = ResourceActor::<Schedule>::new(buffer_size, Uuid::new_v4);
        Self::from_actor(actor, resource_client)
    }

    pub fn from_actor(actor: ResourceActor<Schedule>, resource_client: ResourceClient<Schedule>) -> Self {
        let handle = tokio::spawn(actor.run());
        info!("Kitchen system started");
        Self {
            schedule_client: ScheduleClient::new(resource_client),
            handle,
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down kitchen system");
        drop(self.schedule_client);
        self.handle.await?;
        info!("Kitchen system shutdown complete");
        Ok(())
    }
}
