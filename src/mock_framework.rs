//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_get_many`] to assert behavior
//! and answer on the actor's behalf.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

pub type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test owns, so the test sees every
/// request in order and decides each reply (success, failure, or silence).
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreatePayload, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetMany request
pub async fn expect_get_many<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Vec<T::Id>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateMany request
pub async fn expect_update_many<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<(T::Id, T::Patch)>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::UpdateMany { patches, respond_to }) => Some((patches, respond_to)),
        _ => None,
    }
}

/// Asserts that nothing is queued and every client handle is gone.
pub fn expect_closed<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> bool {
    matches!(receiver.try_recv(), Err(mpsc::error::TryRecvError::Disconnected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CustomerClient;
    use crate::customer_actor::CustomerError;
    use crate::domain::{Customer, CustomerCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Customer>(10);
        let client = CustomerClient::new(inner);

        let create_task = tokio::spawn(async move {
            client.create_customer(CustomerCreate::new("Test", "test@example.com")).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        let stored = Customer {
            id: "customer_1".to_string(),
            name: payload.name,
            email: payload.email,
        };
        responder.send(Ok(stored.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(stored));
    }

    #[tokio::test]
    async fn test_framework_errors_map_onto_client_errors() {
        let (inner, mut receiver) = create_mock_client::<Customer>(10);
        let client = CustomerClient::new(inner);

        let task = tokio::spawn(async move { client.delete_customer("customer_9".to_string()).await });

        match receiver.recv().await {
            Some(ResourceRequest::Delete { id, respond_to }) => {
                respond_to.send(Err(FrameworkError::NotFound(id))).unwrap();
            }
            _ => panic!("Expected Delete request"),
        }
        assert_eq!(task.await.unwrap(), Err(CustomerError::NotFound("customer_9".to_string())));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (inner, mut receiver) = create_mock_client::<Customer>(10);
        let client = CustomerClient::new(inner);

        let task = tokio::spawn(async move { client.get_customer("customer_1".to_string()).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);
        assert_eq!(
            task.await.unwrap(),
            Err(CustomerError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }
}
