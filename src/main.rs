use rust_decimal_macros::dec;
use tracing::{error, info, warn, Instrument};

use order_system::app_system::{setup_tracing, AppError, OrderSystem, SystemConfig};
use order_system::domain::{CustomerCreate, OrderCreationRequest, OrderLineRequest, ProductCreate};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(?config, "Starting application with complete order system");

    let system = OrderSystem::new(&config);

    let customer = system
        .customer_client
        .create_customer(CustomerCreate::new("Alice", "alice@example.com"))
        .instrument(tracing::info_span!("customer_creation"))
        .await?;
    info!(customer_id = %customer.id, "Customer created successfully");

    let keyboard = system
        .product_client
        .create_product(ProductCreate::new("Mechanical Keyboard", dec!(89.90), 10))
        .await?;
    let cable = system
        .product_client
        .create_product(ProductCreate::new("USB-C Cable", dec!(7.50), 3))
        .await?;
    info!(keyboard = %keyboard.id, cable = %cable.id, "Products created successfully");

    let request = OrderCreationRequest::new(
        customer.id.clone(),
        vec![
            OrderLineRequest::new(keyboard.id.clone(), 2),
            OrderLineRequest::new(cable.id.clone(), 3),
        ],
    );
    let order = system
        .create_order(request)
        .instrument(tracing::info_span!("order_processing"))
        .await?;
    info!(order_id = %order.id, total = %order.total(), "Order processed successfully");

    // The cable is now out of stock, so this one is refused.
    let retry = OrderCreationRequest::new(customer.id, vec![OrderLineRequest::new(cable.id.clone(), 1)]);
    match system
        .create_order(retry)
        .instrument(tracing::info_span!("order_processing"))
        .await
    {
        Ok(order) => warn!(order_id = %order.id, "Order unexpectedly accepted"),
        Err(e) if e.is_domain() => info!(reason = %e, "Order rejected"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    if let Some(cable) = system.product_client.get_product(cable.id).await? {
        info!(product_id = %cable.id, stock = cable.quantity, "Remaining stock");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
