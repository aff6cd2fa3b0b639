use rust_decimal::Decimal;
use uuid::Uuid;

use food_ordering_domain::common::{serialize_event, CustomerId, Entity, Money, ProductId, RestaurantId};
use food_ordering_domain::config::{init_tracing, LoggingConfig};
use food_ordering_domain::domain::order::{
    Order, OrderDomainService, OrderEvent, OrderItem, OrderItemParams, OrderParams, StreetAddress,
};
use food_ordering_domain::domain::restaurant::{Product, Restaurant, RestaurantParams};

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    init_tracing(&LoggingConfig::from_env())?;

    tracing::info!("🚀 Starting order domain demo");

    let burger_id = ProductId::generate();
    let fries_id = ProductId::generate();
    let restaurant = Restaurant::new(RestaurantParams {
        restaurant_id: RestaurantId::generate(),
        products: vec![
            Product::new(burger_id, "Burger", Money::new(Decimal::new(950, 2))?),
            Product::new(fries_id, "Fries", Money::new(Decimal::new(350, 2))?),
        ],
        active: true,
    });

    let service = OrderDomainService::new();

    // === 1. Happy path: PENDING -> PAID -> APPROVED ===
    let mut order = place_order(&restaurant, burger_id, fries_id)?;
    let created = service.validate_and_initiate_order(&mut order, &restaurant)?;
    log_event(OrderEvent::Created(created))?;

    let paid = service.pay_order(&mut order)?;
    log_event(OrderEvent::Paid(paid))?;

    service.approve_order(&mut order)?;
    tracing::info!(
        order_id = %id_or_unassigned(order.id()),
        tracking_id = %id_or_unassigned(order.tracking_id()),
        "✅ Order approved"
    );

    // === 2. Compensation: PAID -> CANCELLING -> CANCELLED ===
    let mut order = place_order(&restaurant, burger_id, fries_id)?;
    service.validate_and_initiate_order(&mut order, &restaurant)?;
    service.pay_order(&mut order)?;

    let cancelled = service.cancel_order_payment(
        &mut order,
        vec!["Restaurant could not accept the order".to_string()],
    )?;
    log_event(OrderEvent::Cancelled(cancelled))?;

    service.cancel_order(&mut order, vec!["Payment refunded".to_string()])?;
    tracing::info!(
        order_id = %id_or_unassigned(order.id()),
        failure_messages = ?order.failure_messages(),
        "✅ Order cancelled"
    );

    // === 3. Rejected transition ===
    if let Err(error) = service.approve_order(&mut order) {
        tracing::warn!(%error, "Approval rejected as expected");
    }

    tracing::info!("🎉 Demo complete!");
    Ok(())
}

/// Two burgers and one portion of fries.
fn place_order(restaurant: &Restaurant, burger_id: ProductId, fries_id: ProductId) -> anyhow::Result<Order> {
    let burger_price = Money::new(Decimal::new(950, 2))?;
    let fries_price = Money::new(Decimal::new(350, 2))?;

    let order = Order::new(OrderParams {
        customer_id: CustomerId::generate(),
        restaurant_id: restaurant.restaurant_id(),
        delivery_address: StreetAddress::new(Uuid::new_v4(), "221B Baker Street", "NW1 6XE", "London"),
        price: burger_price.multiply(2)?.add(fries_price)?,
        items: vec![
            OrderItem::new(OrderItemParams {
                product: Product::with_id(burger_id),
                quantity: 2,
                price: burger_price,
                subtotal: burger_price.multiply(2)?,
            }),
            OrderItem::new(OrderItemParams {
                product: Product::with_id(fries_id),
                quantity: 1,
                price: fries_price,
                subtotal: fries_price,
            }),
        ],
    })?;

    Ok(order)
}

fn id_or_unassigned<T: std::fmt::Display>(id: Option<T>) -> String {
    id.map_or_else(|| "unassigned".to_string(), |id| id.to_string())
}

fn log_event(event: OrderEvent) -> anyhow::Result<()> {
    let payload = serialize_event(&event)?;
    tracing::info!(
        event_type = event.event_type(),
        status = ?event.order().status(),
        payload = %payload,
        "📤 Domain event raised"
    );
    Ok(())
}
