use tokio::task::{JoinError, JoinHandle};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::actor_framework::{ResourceActor, ResourceClient};
use crate::clients::OrderClient;
use crate::domain::Order;

/// Owns the order actor for the lifetime of the orders service.
pub struct OrdersSystem {
    pub order_client: OrderClient,
    handle: JoinHandle<()>,
}

impl OrdersSystem {
    /// Starts the order actor with random UUID ids and the wall clock.
    #[instrument(name = "orders_system")]
    pub fn new(buffer_size: usize) -> Self {
        let (actor, resource_client) = ResourceActor::<Order>::new(buffer_size, Uuid::new_v4);
        Self::from_actor(actor, resource_client)
    }

    /// Starts an already configured actor, e.g. one with a custom clock.
    pub fn from_actor(actor: ResourceActor<Order>, resource_client: ResourceClient<Order>) -> Self {
        let handle = tokio::spawn(actor.run());
        info!("Orders system started");
        Self {
            order_client: OrderClient::new(resource_client),
            handle,
        }
    }

    /// Drops this handle's client and waits for the actor to drain.
    ///
    /// The actor stops once every clone of the client is gone, so callers
    /// must release any clones (e.g. router state) first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down orders system");
        drop(self.order_client);
        self.handle.await?;
        info!("Orders system shutdown complete");
        Ok(())
    }
}
