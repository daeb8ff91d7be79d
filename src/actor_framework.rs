use chrono::{DateTime, Utc};
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::query::{self, QueryFilter};
use crate::store::EntityStore;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Payloads, Actions and Queries)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    /// Short lowercase name used in logs.
    const NAME: &'static str;

    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    // --- Listing ---
    type Query: QueryFilter<Self>;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from a fresh ID, the creation time and the payload
    fn from_create(id: Self::Id, now: DateTime<Utc>, payload: Self::CreatePayload) -> Result<Self, String>;

    /// Merge a replacement payload into the entity. Server-owned fields stay untouched.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Errors surfaced by the resource actor and its client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Replace {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Owns the entity store. Every request is handled to completion before the
/// next one is received, so the store never sees interleaved mutations.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
    next_id_fn: IdGenerator<T::Id>,
    clock: Clock,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::new(),
            next_id_fn: Box::new(next_id_fn),
            clock: Box::new(Utc::now),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Replace the wall clock used to stamp new records.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Runs until every client has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(entity = T::NAME))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    self.handle_create(payload, respond_to);
                }
                ResourceRequest::Get { id, respond_to } => {
                    self.handle_get(id, respond_to);
                }
                ResourceRequest::List { query, respond_to } => {
                    self.handle_list(query, respond_to);
                }
                ResourceRequest::Replace { id, patch, respond_to } => {
                    self.handle_replace(id, patch, respond_to);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    self.handle_delete(id, respond_to);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    self.handle_action(id, action, respond_to);
                }
            }
        }
        info!(remaining = self.store.len(), "Actor stopped");
    }

    #[instrument(skip(self, payload, respond_to))]
    fn handle_create(&mut self, payload: T::CreatePayload, respond_to: Response<T>) {
        debug!("Processing create request");
        let id = (self.next_id_fn)();
        let now = (self.clock)();
        let result = T::from_create(id, now, payload)
            .map(|item| self.store.insert(item).clone())
            .map_err(FrameworkError::Rejected);

        match &result {
            Ok(item) => info!(id = %item.id(), "Created"),
            Err(e) => warn!(error = %e, "Create rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(id = %id), skip(self, respond_to))]
    fn handle_get(&self, id: T::Id, respond_to: Response<T>) {
        debug!("Processing get request");
        let result = self.store.find(&id).cloned();
        if result.is_err() {
            debug!("Not found");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, query: T::Query, respond_to: Response<Vec<T>>) {
        debug!("Processing list request");
        let items = query::select(self.store.iter(), &query);
        debug!(total = self.store.len(), returned = items.len(), "Listed");
        let _ = respond_to.send(Ok(items));
    }

    #[instrument(fields(id = %id), skip(self, patch, respond_to))]
    fn handle_replace(&mut self, id: T::Id, patch: T::Patch, respond_to: Response<T>) {
        debug!("Processing replace request");
        let result = self.store.update(&id, patch).cloned();
        match &result {
            Ok(_) => info!("Replaced"),
            Err(e) => warn!(error = %e, "Replace failed"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(id = %id), skip(self, respond_to))]
    fn handle_delete(&mut self, id: T::Id, respond_to: Response<()>) {
        debug!("Processing delete request");
        let result = self.store.remove(&id).map(|_| ());
        match &result {
            Ok(()) => info!("Deleted"),
            Err(e) => warn!(error = %e, "Delete failed"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(id = %id), skip(self, respond_to))]
    fn handle_action(&mut self, id: T::Id, action: T::Action, respond_to: Response<T::ActionResult>) {
        debug!("Processing action request");
        let result = self
            .store
            .find_mut(&id)
            .and_then(|item| item.handle_action(action).map_err(FrameworkError::Rejected));
        if let Err(e) = &result {
            warn!(error = %e, "Action failed");
        }
        let _ = respond_to.send(result);
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Debug)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self, query: T::Query) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List { query, respond_to }).await
    }

    pub async fn replace(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Replace { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: String,
        title: String,
        opened: DateTime<Utc>,
        closed: bool,
    }

    #[derive(Debug)]
    struct TicketCreate {
        title: String,
    }

    #[derive(Debug)]
    struct TicketPatch {
        title: String,
    }

    // Custom Actions
    #[derive(Debug)]
    enum TicketAction {
        Close,
        Peek,
    }

    #[derive(Debug, Default)]
    struct TicketQuery {
        closed: Option<bool>,
        limit: Option<usize>,
    }

    impl QueryFilter<Ticket> for TicketQuery {
        fn matches(&self, item: &Ticket) -> bool {
            query::flag_matches(self.closed, item.closed)
        }

        fn limit(&self) -> Option<usize> {
            self.limit
        }
    }

    impl Entity for Ticket {
        const NAME: &'static str = "ticket";
        type Id = String;
        type CreatePayload = TicketCreate;
        type Patch = TicketPatch;
        type Action = TicketAction;
        type ActionResult = bool;
        type Query = TicketQuery;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create(id: String, now: DateTime<Utc>, payload: TicketCreate) -> Result<Self, String> {
            if payload.title.is_empty() {
                return Err("title required".to_string());
            }
            Ok(Self {
                id,
                title: payload.title,
                opened: now,
                closed: false,
            })
        }

        fn on_update(&mut self, patch: TicketPatch) -> Result<(), String> {
            self.title = patch.title;
            Ok(())
        }

        fn handle_action(&mut self, action: TicketAction) -> Result<bool, String> {
            match action {
                TicketAction::Close => {
                    self.closed = true;
                    Ok(true)
                }
                TicketAction::Peek => Ok(self.closed),
            }
        }
    }

    fn start() -> ResourceClient<Ticket> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("ticket_{}", counter.fetch_add(1, Ordering::SeqCst));

        let base = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let ticks = Arc::new(AtomicU64::new(0));
        let clock = move || base + Duration::seconds(ticks.fetch_add(1, Ordering::SeqCst) as i64);

        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.with_clock(clock).run());
        client
    }

    fn create(title: &str) -> TicketCreate {
        TicketCreate { title: title.into() }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let client = start();

        let first = client.create(create("Leaky tap")).await.unwrap();
        let second = client.create(create("Leaky tap")).await.unwrap();

        assert_eq!(first.id, "ticket_1");
        assert_eq!(second.id, "ticket_2");
        assert!(second.opened > first.opened);
        assert!(!first.closed);
    }

    #[tokio::test]
    async fn test_rejected_create_is_not_stored() {
        let client = start();

        let err = client.create(create("")).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("title required".to_string()));
        assert!(client.list(TicketQuery::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = start();
        let id = client.create(create("Broken window")).await.unwrap().id;

        assert!(!client.perform_action(id.clone(), TicketAction::Peek).await.unwrap());
        assert!(client.perform_action(id.clone(), TicketAction::Close).await.unwrap());

        let ticket = client.get(id.clone()).await.unwrap();
        assert!(ticket.closed);
        assert!(client.perform_action(id, TicketAction::Peek).await.unwrap());
    }

    #[tokio::test]
    async fn test_replace_and_delete() {
        let client = start();
        let original = client.create(create("Draft")).await.unwrap();

        let replaced = client
            .replace(original.id.clone(), TicketPatch { title: "Final".into() })
            .await
            .unwrap();
        assert_eq!(replaced.title, "Final");
        assert_eq!(replaced.opened, original.opened);

        client.delete(original.id.clone()).await.unwrap();
        assert_eq!(
            client.get(original.id.clone()).await,
            Err(FrameworkError::NotFound(original.id))
        );
    }

    #[tokio::test]
    async fn test_unknown_id_is_reported_and_store_untouched() {
        let client = start();
        client.create(create("Keep me")).await.unwrap();
        let missing = "ticket_99".to_string();
        let not_found = FrameworkError::NotFound(missing.clone());

        assert_eq!(client.get(missing.clone()).await.unwrap_err(), not_found);
        assert_eq!(
            client
                .replace(missing.clone(), TicketPatch { title: "x".into() })
                .await
                .unwrap_err(),
            not_found
        );
        assert_eq!(client.delete(missing.clone()).await.unwrap_err(), not_found);
        assert_eq!(
            client.perform_action(missing, TicketAction::Close).await.unwrap_err(),
            not_found
        );

        let all = client.list(TicketQuery::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Keep me");
        assert!(!all[0].closed);
    }

    #[tokio::test]
    async fn test_list_filters_and_limits() {
        let client = start();
        let mut ids = Vec::new();
        for title in ["a", "b", "c", "d"] {
            ids.push(client.create(create(title)).await.unwrap().id);
        }
        client.perform_action(ids[1].clone(), TicketAction::Close).await.unwrap();
        client.perform_action(ids[3].clone(), TicketAction::Close).await.unwrap();

        let closed = client
            .list(TicketQuery { closed: Some(true), limit: None })
            .await
            .unwrap();
        let titles: Vec<&str> = closed.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "d"]);

        let first_open = client
            .list(TicketQuery { closed: Some(false), limit: Some(1) })
            .await
            .unwrap();
        assert_eq!(first_open.len(), 1);
        assert_eq!(first_open[0].title, "a");
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Ticket>::new(1, || "ticket".to_string());
        drop(actor);

        assert_eq!(client.get("ticket".into()).await, Err(FrameworkError::ActorClosed));
    }
}
