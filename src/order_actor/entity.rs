use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{OrderAction, OrderQuery};
use crate::actor_framework::Entity;
use crate::domain::{ensure_items, Order, OrderDetails, OrderStatus};

impl Entity for Order {
    const NAME: &'static str = "order";
    type Id = Uuid;
    type CreatePayload = OrderDetails;
    type Patch = OrderDetails;
    type Action = OrderAction;
    type ActionResult = Order;
    type Query = OrderQuery;

    fn id(&self) -> &Uuid {
        &self.id
    }

    /// New orders always start out as `created`.
    fn from_create(id: Uuid, now: DateTime<Utc>, details: OrderDetails) -> Result<Self, String> {
        ensure_items(&details.items)?;
        Ok(Self {
            id,
            created: now,
            status: OrderStatus::Created,
            items: details.items,
        })
    }

    /// Replaces the line items; id, creation time and status are kept.
    fn on_update(&mut self, details: OrderDetails) -> Result<(), String> {
        ensure_items(&details.items)?;
        self.items = details.items;
        Ok(())
    }

    /// Applies a status transition and hands back the updated order.
    ///
    /// No legality check against the current status is made: a delivered
    /// order can still be cancelled.
    fn handle_action(&mut self, action: OrderAction) -> Result<Order, String> {
        self.status = match action {
            OrderAction::Cancel => OrderStatus::Cancelled,
            OrderAction::Pay => OrderStatus::Progress,
        };
        Ok(self.clone())
    }
}
