use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::LineItem;

/// Lifecycle states of a customer order.
///
/// Only `Created`, `Progress` and `Cancelled` are ever assigned by the
/// service; the rest are part of the published enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Paid,
    Progress,
    Cancelled,
    Dispatched,
    Delivered,
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(rename = "order")]
    pub items: Vec<LineItem>,
}

/// Validated payload for creating or replacing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub items: Vec<LineItem>,
}

impl OrderDetails {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }
}
