use chrono::Utc;

use crate::common::Entity;
use crate::domain::restaurant::Restaurant;
use super::aggregate::Order;
use super::errors::OrderDomainError;
use super::events::{OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};

// ============================================================================
// Order Domain Service
// ============================================================================
//
// Orchestrates: Aggregate operation → Domain event
//
// Operations that span the Order and Restaurant aggregates, or that raise an
// event, go through here. Publishing the returned events is the caller's job.
//
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct OrderDomainService;

impl OrderDomainService {
    pub fn new() -> Self {
        Self
    }

    /// Confirms item products against the restaurant catalog, validates the
    /// order and initializes it as PENDING.
    pub fn validate_and_initiate_order(
        &self,
        order: &mut Order,
        restaurant: &Restaurant,
    ) -> Result<OrderCreatedEvent, OrderDomainError> {
        if !restaurant.is_active() {
            return Err(OrderDomainError::RestaurantNotActive(restaurant.restaurant_id()));
        }

        Self::set_order_product_information(order, restaurant);
        order.validate_order()?;
        order.initialize_order()?;

        tracing::info!(
            order_id = %order_label(order),
            restaurant_id = %restaurant.restaurant_id(),
            "Order is initiated"
        );

        Ok(OrderCreatedEvent {
            order: order.clone(),
            created_at: Utc::now(),
        })
    }

    // Items referencing a product the restaurant does not sell keep their
    // unconfirmed product and fail price validation.
    fn set_order_product_information(order: &mut Order, restaurant: &Restaurant) {
        for item in order.items_mut() {
            let product_id = item.product().product_id();
            match restaurant.find_product(product_id) {
                Some(catalog) => item
                    .product_mut()
                    .update_with_confirmed_name_and_price(catalog.name(), catalog.price()),
                None => tracing::debug!(%product_id, "Product not found in restaurant catalog"),
            }
        }
    }

    pub fn pay_order(&self, order: &mut Order) -> Result<OrderPaidEvent, OrderDomainError> {
        order.pay()?;
        tracing::info!(order_id = %order_label(order), "Order is paid");

        Ok(OrderPaidEvent {
            order: order.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn approve_order(&self, order: &mut Order) -> Result<(), OrderDomainError> {
        order.approve()?;
        tracing::info!(order_id = %order_label(order), "Order is approved");
        Ok(())
    }

    /// Moves a paid order to CANCELLING so its payment can be compensated.
    pub fn cancel_order_payment(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> Result<OrderCancelledEvent, OrderDomainError> {
        order.init_cancel(failure_messages)?;
        tracing::info!(order_id = %order_label(order), "Order payment is cancelling");

        Ok(OrderCancelledEvent {
            order: order.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn cancel_order(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> Result<(), OrderDomainError> {
        order.cancel(failure_messages)?;
        tracing::info!(order_id = %order_label(order), "Order is cancelled");
        Ok(())
    }
}

// Identifier used in log lines; orders get their id on initialization.
fn order_label(order: &Order) -> String {
    order
        .id()
        .map_or_else(|| "unassigned".to_string(), ToString::to_string)
}

// ============================================================================
// Unit Tests
// ============================================================================
