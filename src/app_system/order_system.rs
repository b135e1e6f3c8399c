use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{error, info, instrument};

use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::domain::{Customer, Order, OrderCreationRequest, Product};
use crate::order_actor::OrderError;
use crate::services::CreateOrderService;

use super::{AppError, SystemConfig};

pub type ActorOrderService = CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub order_service: ActorOrderService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

/// Id generator yielding `<prefix>_1`, `<prefix>_2`, ...
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

fn spawn_actor<T: Entity<Id = String>>(
    buffer_size: usize,
    prefix: &'static str,
) -> (ResourceClient<T>, tokio::task::JoinHandle<()>) {
    let (actor, client) = ResourceActor::<T>::new(buffer_size, sequential_ids(prefix));
    (client, tokio::spawn(actor.run()))
}

impl OrderSystem {
    /// Starts the customer, product and order actors. Must be called from
    /// within a tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        info!(buffer_size = config.channel_buffer_size, "Starting order system");

        let (customers, customer_handle) = spawn_actor::<Customer>(config.channel_buffer_size, "customer");
        let (products, product_handle) = spawn_actor::<Product>(config.channel_buffer_size, "product");
        let (orders, order_handle) = spawn_actor::<Order>(config.channel_buffer_size, "order");

        let customer_client = CustomerClient::new(customers);
        let product_client = ProductClient::new(products);
        let order_client = OrderClient::new(orders);

        let order_service = CreateOrderService::new(
            Arc::new(customer_client.clone()),
            Arc::new(product_client.clone()),
            Arc::new(order_client.clone()),
        );

        Self {
            customer_client,
            product_client,
            order_client,
            order_service,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    /// Places an order through [`CreateOrderService`].
    pub async fn create_order(&self, request: OrderCreationRequest) -> Result<Order, OrderError> {
        self.order_service.execute(request).await
    }

    /// Drops every client so the actors see their channels close, then waits
    /// for the actor tasks to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");

        drop(self.order_service);
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(AppError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
