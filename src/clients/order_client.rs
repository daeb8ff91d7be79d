use tracing::{debug, instrument};
use uuid::Uuid;

use crate::actor_framework::ResourceClient;
use crate::domain::Order;
use crate::order_actor::{OrderAction, OrderError};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: Uuid) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Cancel)
            .await
            .map_err(OrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn pay_order(&self, id: Uuid) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::Pay)
            .await
            .map_err(OrderError::from)
    }
}
