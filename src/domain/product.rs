use rust_decimal::Decimal;

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Units currently in stock.
    pub quantity: u32,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Partial update. `quantity` replaces the stored stock level outright.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}

/// Absolute stock level to write for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpdate {
    pub id: String,
    pub quantity: u32,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}
