use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> { Ok(()) }

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Failures reported by a [`ResourceActor`] or by the channel in front of it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
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
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    UpdateMany {
        patches: Vec<(T::Id, T::Patch)>,
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    }
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    /// Runs until every client handle has been dropped.
    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = ids.iter().filter_map(|id| self.store.get(id).cloned()).collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::UpdateMany { patches, respond_to } => {
                    let _ = respond_to.send(self.handle_update_many(patches));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.store.insert(id, item.clone());
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let item = self
            .store
            .get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(patch).map_err(FrameworkError::Rejected)?;
        Ok(item.clone())
    }

    /// Applies every patch or none of them. Hooks run on staged copies so a
    /// rejected patch leaves the store untouched.
    fn handle_update_many(&mut self, patches: Vec<(T::Id, T::Patch)>) -> Result<Vec<T>, FrameworkError> {
        let mut staged: Vec<T> = Vec::with_capacity(patches.len());
        for (id, patch) in patches {
            let current = staged
                .iter()
                .rev()
                .find(|item| *item.id() == id)
                .or_else(|| self.store.get(&id))
                .cloned()
                .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
            let mut next = current;
            next.on_update(patch).map_err(FrameworkError::Rejected)?;
            staged.push(next);
        }
        for item in &staged {
            self.store.insert(item.id().clone(), item.clone());
        }
        Ok(staged)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete().map_err(FrameworkError::Rejected)?;
        self.store.remove(&id);
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    #[cfg(test)]
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn update_many(&self, patches: Vec<(T::Id, T::Patch)>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::UpdateMany { patches, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: String,
        label: String,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        label: String,
    }

    #[derive(Debug)]
    struct CounterPatch {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Increment,
    }

    impl Entity for Counter {
        type Id = String;
        type CreatePayload = CounterCreate;
        type Patch = CounterPatch;
        type Action = CounterAction;
        type ActionResult = u32;

        fn id(&self) -> &String { &self.id }

        fn from_create(id: String, payload: CounterCreate) -> Result<Self, String> {
            if payload.label.is_empty() {
                return Err("label must not be empty".to_string());
            }
            Ok(Self { id, label: payload.label, value: 0 })
        }

        fn on_update(&mut self, patch: CounterPatch) -> Result<(), String> {
            if patch.value > 100 {
                return Err(format!("value {} out of range", patch.value));
            }
            self.value = patch.value;
            Ok(())
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, String> {
            match action {
                CounterAction::Increment => {
                    self.value += 1;
                    Ok(self.value)
                }
            }
        }
    }

    fn spawn_counters() -> ResourceClient<Counter> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("counter_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    async fn create(client: &ResourceClient<Counter>, label: &str) -> Counter {
        client.create(CounterCreate { label: label.into() }).await.unwrap()
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_create_returns_stored_entity() {
        let client = spawn_counters();

        let first = create(&client, "a").await;
        let second = create(&client, "b").await;
        assert_eq!(first.id, "counter_1");
        assert_eq!(second.id, "counter_2");

        let fetched = client.get(first.id.clone()).await.unwrap();
        assert_eq!(fetched, Some(first));
    }

    #[tokio::test]
    async fn test_create_rejected_by_entity() {
        let client = spawn_counters();
        let result = client.create(CounterCreate { label: String::new() }).await;
        assert!(matches!(result, Err(FrameworkError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_get_many_keeps_request_order_and_drops_unknown() {
        let client = spawn_counters();
        let a = create(&client, "a").await;
        let b = create(&client, "b").await;

        let items = client
            .get_many(vec![b.id.clone(), "missing".into(), a.id.clone()])
            .await
            .unwrap();
        let ids: Vec<_> = items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["counter_2", "counter_1"]);

        assert!(client.get_many(vec![]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_many_applies_all_patches() {
        let client = spawn_counters();
        let a = create(&client, "a").await;
        let b = create(&client, "b").await;

        let updated = client
            .update_many(vec![
                (a.id.clone(), CounterPatch { value: 7 }),
                (b.id.clone(), CounterPatch { value: 9 }),
            ])
            .await
            .unwrap();
        assert_eq!(updated.len(), 2);
        assert_eq!(client.get(a.id).await.unwrap().unwrap().value, 7);
        assert_eq!(client.get(b.id).await.unwrap().unwrap().value, 9);
    }

    #[tokio::test]
    async fn test_update_many_is_all_or_nothing() {
        let client = spawn_counters();
        let a = create(&client, "a").await;

        let result = client
            .update_many(vec![
                (a.id.clone(), CounterPatch { value: 3 }),
                ("missing".into(), CounterPatch { value: 4 }),
            ])
            .await;
        assert_eq!(result, Err(FrameworkError::NotFound("missing".into())));

        let rejected = client
            .update_many(vec![
                (a.id.clone(), CounterPatch { value: 3 }),
                (a.id.clone(), CounterPatch { value: 500 }),
            ])
            .await;
        assert!(matches!(rejected, Err(FrameworkError::Rejected(_))));

        assert_eq!(client.get(a.id).await.unwrap().unwrap().value, 0);
    }

    #[tokio::test]
    async fn test_update_many_last_patch_for_an_id_wins() {
        let client = spawn_counters();
        let a = create(&client, "a").await;

        client
            .update_many(vec![
                (a.id.clone(), CounterPatch { value: 2 }),
                (a.id.clone(), CounterPatch { value: 5 }),
            ])
            .await
            .unwrap();
        assert_eq!(client.get(a.id).await.unwrap().unwrap().value, 5);
    }

    #[tokio::test]
    async fn test_actions_update_delete() {
        let client = spawn_counters();
        let a = create(&client, "a").await;

        assert_eq!(client.perform_action(a.id.clone(), CounterAction::Increment).await, Ok(1));
        assert_eq!(client.perform_action(a.id.clone(), CounterAction::Increment).await, Ok(2));

        let updated = client.update(a.id.clone(), CounterPatch { value: 10 }).await.unwrap();
        assert_eq!(updated.value, 10);
        assert_eq!(updated.label, "a");

        client.delete(a.id.clone()).await.unwrap();
        assert_eq!(client.get(a.id.clone()).await.unwrap(), None);
        assert_eq!(client.delete(a.id.clone()).await, Err(FrameworkError::NotFound(a.id.clone())));
        assert!(matches!(
            client.perform_action(a.id, CounterAction::Increment).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Counter>::new(1, || "counter".to_string());
        drop(actor);
        assert_eq!(client.get("counter".into()).await, Err(FrameworkError::ActorClosed));
    }
}
