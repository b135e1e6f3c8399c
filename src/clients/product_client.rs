use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductPatch, StockUpdate};
use crate::ports::ProductRepository;
use crate::product_actor::ProductError;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

crate::impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(product).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Fetches every known product among `ids`, in the order given.
    #[instrument(skip(self))]
    pub async fn get_products(&self, ids: Vec<String>) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.get_many(ids).await?)
    }

    /// Writes absolute stock levels in a single actor turn.
    #[instrument(skip(self))]
    pub async fn set_stock_levels(&self, updates: Vec<StockUpdate>) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        let patches = updates
            .into_iter()
            .map(|update| {
                let patch = ProductPatch { price: None, quantity: Some(update.quantity) };
                (update.id, patch)
            })
            .collect();
        Ok(self.inner.update_many(patches).await?)
    }
}

#[async_trait]
impl ProductRepository for ProductClient {
    async fn find_all_by_ids(&self, ids: &[String]) -> Result<Vec<Product>, ProductError> {
        self.get_products(ids.to_vec()).await
    }

    async fn update_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), ProductError> {
        self.set_stock_levels(updates).await.map(|_| ())
    }
}
