use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::customer_actor::CustomerError;
use crate::domain::{Customer, CustomerCreate, CustomerPatch};
use crate::ports::CustomerRepository;

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

crate::impl_basic_client!(CustomerClient, Customer, CustomerError, customer);

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(&self, customer: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        Ok(self.inner.create(customer).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(&self, id: String, patch: CustomerPatch) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }
}

#[async_trait]
impl CustomerRepository for CustomerClient {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, CustomerError> {
        self.get_customer(id.to_string()).await
    }
}
