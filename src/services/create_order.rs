//! Order placement: validate the customer and requested stock, store the
//! order, then write the new stock levels.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::{NewLineItem, Order, OrderCreationRequest, OrderLineRequest, Product, StockUpdate};
use crate::order_actor::OrderError;
use crate::ports::{CustomerRepository, OrderRepository, ProductRepository};

/// Places an order for an existing customer and takes the ordered units out
/// of stock.
///
/// Stock is read once, before the order is stored, and the new levels are
/// written back as absolute values. Two concurrent orders for the same
/// product can therefore overwrite each other's decrement; nothing here
/// serializes them. The order write and the stock write are independent, so
/// a failed stock write leaves the stored order in place.
pub struct CreateOrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    customers: Arc<C>,
    products: Arc<P>,
    orders: Arc<O>,
}

impl<C, P, O> Clone for CreateOrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    fn clone(&self) -> Self {
        Self {
            customers: Arc::clone(&self.customers),
            products: Arc::clone(&self.products),
            orders: Arc::clone(&self.orders),
        }
    }
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: Arc<C>, products: Arc<P>, orders: Arc<O>) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Validates the request, stores the order and overwrites stock levels.
    ///
    /// # Errors
    /// - [`OrderError::CustomerNotFound`] if the customer does not exist
    /// - [`OrderError::NoProductsFound`] if none of the requested products exist
    /// - [`OrderError::ProductNotFound`] naming the first unknown product, in request order
    /// - [`OrderError::InsufficientStock`] naming the first line asking for more than is stocked
    ///
    /// Store failures are returned as they come back from the store.
    #[instrument(skip(self, request), fields(customer_id = %request.customer_id, lines = request.products.len()))]
    pub async fn execute(&self, request: OrderCreationRequest) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        // Step 1: Resolve customer
        let customer = match self.customers.find_by_id(&request.customer_id).await? {
            Some(customer) => customer,
            None => {
                warn!("Customer not found");
                return Err(OrderError::CustomerNotFound);
            }
        };

        // Step 2: Resolve products
        let ids = distinct_product_ids(&request.products);
        let stored = self.products.find_all_by_ids(&ids).await?;
        if stored.is_empty() {
            warn!("None of the requested products exist");
            return Err(OrderError::NoProductsFound);
        }
        let catalog = index_by_id(&stored);

        // Steps 3 and 4: Existence, then stock
        let lines = check_availability(&request.products, &catalog)?;

        // Step 5: Price every line at the stored price
        let line_items: Vec<NewLineItem> = lines
            .iter()
            .map(|(line, product)| NewLineItem {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
                price: product.price,
            })
            .collect();

        // Step 6: Persist order
        let order = self.orders.create(customer, line_items).await?;
        info!(order_id = %order.id, "Order stored");

        // Steps 7 and 8: Write new stock levels computed from the stock read above
        let updates = stock_after(&order, &catalog)?;
        self.products.update_quantities(updates).await?;

        info!(order_id = %order.id, total = %order.total(), "Order created successfully");
        Ok(order)
    }
}

/// Requested product ids without repeats, in first-seen order.
fn distinct_product_ids(lines: &[OrderLineRequest]) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .iter()
        .filter(|line| seen.insert(line.product_id.as_str()))
        .map(|line| line.product_id.clone())
        .collect()
}

/// Indexes products by id. If the store returned an id twice the first record wins.
fn index_by_id(products: &[Product]) -> HashMap<&str, &Product> {
    let mut index = HashMap::with_capacity(products.len());
    for product in products {
        index.entry(product.id.as_str()).or_insert(product);
    }
    index
}

/// Pairs each requested line with its product, failing on the first unknown
/// id and only then on the first line that exceeds stock.
fn check_availability<'a, 'p>(
    lines: &'a [OrderLineRequest],
    catalog: &HashMap<&str, &'p Product>,
) -> Result<Vec<(&'a OrderLineRequest, &'p Product)>, OrderError> {
    if let Some(missing) = lines
        .iter()
        .find(|line| !catalog.contains_key(line.product_id.as_str()))
    {
        warn!(product_id = %missing.product_id, "Product not found");
        return Err(OrderError::ProductNotFound(missing.product_id.clone()));
    }

    let paired: Vec<_> = lines
        .iter()
        .filter_map(|line| catalog.get(line.product_id.as_str()).map(|product| (line, *product)))
        .collect();

    if let Some((line, product)) = paired.iter().find(|(line, product)| line.quantity > product.quantity) {
        warn!(
            product_id = %line.product_id,
            requested = line.quantity,
            available = product.quantity,
            "Insufficient stock"
        );
        return Err(OrderError::InsufficientStock(line.product_id.clone()));
    }

    Ok(paired)
}

/// One absolute stock level per stored line item: the stock read before the
/// order minus that line's quantity.
///
/// The order is already stored here, so a line item that does not match the
/// stock read is a store failure, not a validation failure.
fn stock_after(order: &Order, catalog: &HashMap<&str, &Product>) -> Result<Vec<StockUpdate>, OrderError> {
    order
        .line_items
        .iter()
        .map(|item| {
            let product = catalog.get(item.product_id.as_str()).ok_or_else(|| {
                OrderError::StoreInconsistency(format!(
                    "order {} has line item {} for unrequested product {}",
                    order.id, item.id, item.product_id
                ))
            })?;
            let quantity = product.quantity.checked_sub(item.quantity).ok_or_else(|| {
                OrderError::StoreInconsistency(format!(
                    "order {} line item {} takes {} units of product {} with {} in stock",
                    order.id, item.id, item.quantity, item.product_id, product.quantity
                ))
            })?;
            Ok(StockUpdate {
                id: item.product_id.clone(),
                quantity,
            })
        })
        .collect()
}
