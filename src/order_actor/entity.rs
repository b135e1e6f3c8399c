use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderLineItem};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Patch = (); // Orders are immutable once placed
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// Line item ids are derived from the order id and the line's position,
    /// so they are unique within the store.
    fn from_create(id: String, params: OrderCreate) -> Result<Self, String> {
        let line_items = params
            .line_items
            .into_iter()
            .enumerate()
            .map(|(index, item)| OrderLineItem {
                id: format!("{}_item_{}", id, index + 1),
                order_id: id.clone(),
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
            })
            .collect();

        Ok(Self {
            id,
            customer: params.customer,
            line_items,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Err(format!("Order {} cannot be modified", self.id))
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
