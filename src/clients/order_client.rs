use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Customer, NewLineItem, Order, OrderCreate};
use crate::order_actor::OrderError;
use crate::ports::OrderRepository;

/// Client for interacting with the Order actor.
///
/// This is the storage side only. Validation against customers and stock
/// lives in [`crate::services::CreateOrderService`].
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

crate::impl_basic_client!(OrderClient, Order, OrderError, order);

impl OrderClient {
    #[instrument(skip(self, customer, line_items), fields(customer_id = %customer.id, lines = line_items.len()))]
    pub async fn create_order(&self, customer: Customer, line_items: Vec<NewLineItem>) -> Result<Order, OrderError> {
        debug!("Sending request");
        let payload = OrderCreate { customer, line_items };
        Ok(self.inner.create(payload).await?)
    }
}

#[async_trait]
impl OrderRepository for OrderClient {
    async fn create(&self, customer: Customer, line_items: Vec<NewLineItem>) -> Result<Order, OrderError> {
        self.create_order(customer, line_items).await
    }
}
