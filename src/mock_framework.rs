//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client talks to a channel the test controls instead of a running
/// `ResourceActor`, so each reply (success, not found, rejection) is chosen by
/// the test itself.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::clients::{OrderClient, ScheduleClient};
    use crate::domain::{LineItem, Order, OrderDetails, OrderStatus, Schedule, ScheduleStatus, Size};
    use crate::kitchen_actor::{ScheduleAction, ScheduleActionResult, ScheduleError, ScheduleQuery};
    use crate::order_actor::{OrderAction, OrderError, OrderQuery};
    use chrono::Utc;
    use uuid::Uuid;

    fn order(id: Uuid, status: OrderStatus) -> Order {
        Order {
            id,
            created: Utc::now(),
            status,
            items: vec![LineItem::new("latte", Size::Small, 1)],
        }
    }

    fn schedule(id: Uuid, status: ScheduleStatus) -> Schedule {
        Schedule {
            id,
            scheduled: Utc::now(),
            status,
            items: vec![LineItem::new("croissant", Size::Medium, 2)],
        }
    }

    #[tokio::test]
    async fn test_create_order_forwards_payload() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);
        let id = Uuid::new_v4();

        let task = tokio::spawn(async move {
            let details = OrderDetails::new(vec![LineItem::new("latte", Size::Small, 1)]);
            client.create_order(details).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.items[0].product, "latte");
        responder.send(Ok(order(id, OrderStatus::Created))).unwrap();

        let created = task.await.unwrap().unwrap();
        assert_eq!(created.id, id);
        assert_eq!(created.status, OrderStatus::Created);
    }

    #[tokio::test]
    async fn test_cancel_order_sends_cancel_action() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);
        let id = Uuid::new_v4();

        let task = tokio::spawn(async move { client.cancel_order(id).await });

        let (sent_id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(sent_id, id);
        assert_eq!(action, OrderAction::Cancel);
        responder.send(Ok(order(id, OrderStatus::Cancelled))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_not_found_maps_to_order_error() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);
        let id = Uuid::new_v4();

        let task = tokio::spawn(async move { client.get_order(id).await });

        let (sent_id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        responder.send(Err(FrameworkError::NotFound(sent_id.to_string()))).unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::NotFound(id.to_string())));
    }

    #[tokio::test]
    async fn test_list_orders_passes_query_through() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .list_orders(OrderQuery {
                    cancelled: Some(true),
                    limit: Some(3),
                })
                .await
        });

        let (query, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(query.cancelled, Some(true));
        assert_eq!(query.limit, Some(3));
        responder.send(Ok(Vec::new())).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (inner, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move { client.pay_order(Uuid::new_v4()).await });

        let (_, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(action, OrderAction::Pay);
        drop(responder);

        assert!(matches!(
            task.await.unwrap(),
            Err(OrderError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_schedule_status_unwraps_status_result() {
        let (inner, mut receiver) = create_mock_client::<Schedule>(10);
        let client = ScheduleClient::new(inner);
        let id = Uuid::new_v4();

        let task = tokio::spawn(async move { client.schedule_status(id).await });

        let (_, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(action, ScheduleAction::Status);
        responder
            .send(Ok(ScheduleActionResult::Status(ScheduleStatus::Pending)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(ScheduleStatus::Pending));
    }

    #[tokio::test]
    async fn test_mismatched_action_result_is_reported() {
        let (inner, mut receiver) = create_mock_client::<Schedule>(10);
        let client = ScheduleClient::new(inner);
        let id = Uuid::new_v4();

        let task = tokio::spawn(async move { client.start_schedule(id).await });

        let (_, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(action, ScheduleAction::Start);
        responder
            .send(Ok(ScheduleActionResult::Status(ScheduleStatus::Progress)))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ScheduleError::ActorCommunicationError("Unexpected result".to_string()))
        );
    }

    #[tokio::test]
    async fn test_cancel_schedule_returns_updated_record() {
        let (inner, mut receiver) = create_mock_client::<Schedule>(10);
        let client = ScheduleClient::new(inner);
        let id = Uuid::new_v4();

        let task = tokio::spawn(async move { client.cancel_schedule(id).await });

        let (_, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(action, ScheduleAction::Cancel);
        responder
            .send(Ok(ScheduleActionResult::Updated(schedule(id, ScheduleStatus::Cancelled))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap().status, ScheduleStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_list_schedules_passes_since_filter() {
        let (inner, mut receiver) = create_mock_client::<Schedule>(10);
        let client = ScheduleClient::new(inner);
        let since = Utc::now();

        let task = tokio::spawn(async move {
            client
                .list_schedules(ScheduleQuery {
                    since: Some(since),
                    ..ScheduleQuery::default()
                })
                .await
        });

        let (query, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(query.since, Some(since));
        assert_eq!(query.progress, None);
        responder.send(Ok(vec![schedule(Uuid::new_v4(), ScheduleStatus::Pending)])).unwrap();

        assert_eq!(task.await.unwrap().unwrap().len(), 1);
    }
}
