use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects a negative price.
    fn from_create(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.price < Decimal::ZERO {
            return Err(format!("Invalid price: {}", params.price));
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            quantity: params.quantity,
        })
    }

    /// Updates the product's price and/or stock level.
    ///
    /// A `quantity` in the patch is written as-is; it is not a delta.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(price) = patch.price {
            if price < Decimal::ZERO {
                return Err(format!("Invalid price: {}", price));
            }
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
