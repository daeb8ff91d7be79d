use crate::domain::{Order, OrderStatus};
use crate::query::{flag_matches, QueryFilter};

/// Filters accepted when listing orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderQuery {
    /// `Some(true)` keeps only cancelled orders, `Some(false)` everything else.
    pub cancelled: Option<bool>,
    pub limit: Option<usize>,
}

impl QueryFilter<Order> for OrderQuery {
    fn matches(&self, order: &Order) -> bool {
        flag_matches(self.cancelled, order.status == OrderStatus::Cancelled)
    }

    fn limit(&self) -> Option<usize> {
        self.limit
    }
}
