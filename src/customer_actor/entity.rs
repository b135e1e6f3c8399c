use crate::actor_framework::Entity;
use crate::domain::{Customer, CustomerCreate, CustomerPatch};

impl Entity for Customer {
    type Id = String;
    type CreatePayload = CustomerCreate;
    type Patch = CustomerPatch;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Customer from creation parameters.
    ///
    /// # Errors
    /// Rejects an email address without an `@`.
    fn from_create(id: String, params: CustomerCreate) -> Result<Self, String> {
        if !params.email.contains('@') {
            return Err(format!("Invalid email address: {}", params.email));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    fn on_update(&mut self, patch: CustomerPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            if !email.contains('@') {
                return Err(format!("Invalid email address: {}", email));
            }
            self.email = email;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
