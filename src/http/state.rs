use crate::clients::{OrderClient, ScheduleClient};

/// State shared by the orders service handlers.
#[derive(Clone)]
pub struct OrdersState {
    pub orders: OrderClient,
}

impl OrdersState {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }
}

/// State shared by the kitchen service handlers.
#[derive(Clone)]
pub struct KitchenState {
    pub schedules: ScheduleClient,
    /// Re-check every stored schedule before answering a list request.
    pub revalidate_on_list: bool,
}

impl KitchenState {
    pub fn new(schedules: ScheduleClient) -> Self {
        Self {
            schedules,
            revalidate_on_list: false,
        }
    }

    pub fn with_revalidation(mut self, enabled: bool) -> Self {
        self.revalidate_on_list = enabled;
        self
    }
}
