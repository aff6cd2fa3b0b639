use serde::{Deserialize, Serialize};

use crate::common::{AggregateRoot, CustomerId, Entity, Money, OrderId, OrderStatus, RestaurantId};
use super::errors::OrderDomainError;
use super::order_item::OrderItem;
use super::value_objects::{OrderItemId, StreetAddress, TrackingId};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================
//
// Lifecycle:
//   (uninitialized) -> PENDING -> PAID -> APPROVED
//                                   \-> CANCELLING -> CANCELLED
//                      PENDING ----------------------> CANCELLED
//
// Identity, tracking id and item ids are assigned exactly once by
// `initialize_order`; afterwards only the status and failure messages change.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    // Identity
    id: Option<OrderId>,
    tracking_id: Option<TrackingId>,

    // References
    customer_id: CustomerId,
    restaurant_id: RestaurantId,

    // Contents
    delivery_address: StreetAddress,
    price: Money,
    items: Vec<OrderItem>,

    // Lifecycle
    status: Option<OrderStatus>,
    failure_messages: Option<Vec<String>>,
}

/// Fields every order is constructed with.
#[derive(Debug, Clone)]
pub struct OrderParams {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub delivery_address: StreetAddress,
    pub price: Money,
    pub items: Vec<OrderItem>,
}

/// Lifecycle state of an order that already exists, e.g. when it is
/// reloaded from storage. The default is a brand new, uninitialized order.
#[derive(Debug, Clone, Default)]
pub struct OrderState {
    pub id: Option<OrderId>,
    pub tracking_id: Option<TrackingId>,
    pub status: Option<OrderStatus>,
    pub failure_messages: Option<Vec<String>>,
}

/// Serialized shape of an [`Order`]. Deserialization goes through
/// `Order::restore` so stored payloads obey the same invariants.
#[derive(Deserialize)]
struct OrderRecord {
    id: Option<OrderId>,
    tracking_id: Option<TrackingId>,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    delivery_address: StreetAddress,
    price: Money,
    items: Vec<OrderItem>,
    status: Option<OrderStatus>,
    failure_messages: Option<Vec<String>>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = OrderDomainError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        Order::restore(
            OrderParams {
                customer_id: record.customer_id,
                restaurant_id: record.restaurant_id,
                delivery_address: record.delivery_address,
                price: record.price,
                items: record.items,
            },
            OrderState {
                id: record.id,
                tracking_id: record.tracking_id,
                status: record.status,
                failure_messages: record.failure_messages,
            },
        )
    }
}

impl Order {
    /// New, uninitialized order.
    pub fn new(params: OrderParams) -> Result<Self, OrderDomainError> {
        Self::restore(params, OrderState::default())
    }

    /// Order with an existing lifecycle state.
    pub fn restore(params: OrderParams, state: OrderState) -> Result<Self, OrderDomainError> {
        if params.items.is_empty() {
            return Err(OrderDomainError::EmptyItems);
        }

        Ok(Self {
            id: state.id,
            tracking_id: state.tracking_id,
            customer_id: params.customer_id,
            restaurant_id: params.restaurant_id,
            delivery_address: params.delivery_address,
            price: params.price,
            items: params.items,
            status: state.status,
            failure_messages: state.failure_messages,
        })
    }

    // ========================================================================
    // Initialization & Validation
    // ========================================================================

    pub fn initialize_order(&mut self) -> Result<(), OrderDomainError> {
        self.validate_initial_order()?;

        let order_id = OrderId::generate();
        self.id = Some(order_id);
        self.tracking_id = Some(TrackingId::generate());
        self.status = Some(OrderStatus::Pending);
        self.initialize_order_items(order_id);

        tracing::debug!(%order_id, items = self.items.len(), "Order initialized");
        Ok(())
    }

    fn initialize_order_items(&mut self, order_id: OrderId) {
        for (item_id, item) in (1..).zip(self.items.iter_mut()) {
            item.initialize_order_item(order_id, OrderItemId::new(item_id));
        }
    }

    /// Checks a not yet initialized order: positive total, valid item
    /// prices, and a total equal to the sum of item subtotals.
    pub fn validate_order(&self) -> Result<(), OrderDomainError> {
        self.validate_initial_order()?;
        self.validate_total_price()?;
        self.validate_items_price()
    }

    fn validate_initial_order(&self) -> Result<(), OrderDomainError> {
        if self.status.is_some() || self.has_identity() {
            return Err(OrderDomainError::AlreadyInitialized);
        }
        Ok(())
    }

    fn validate_total_price(&self) -> Result<(), OrderDomainError> {
        if !self.price.is_greater_than_zero() {
            return Err(OrderDomainError::NonPositiveTotalPrice(self.price));
        }
        Ok(())
    }

    fn validate_items_price(&self) -> Result<(), OrderDomainError> {
        let mut items_total = Money::ZERO;
        for item in &self.items {
            Self::validate_item_price(item)?;
            items_total = items_total.add(item.subtotal())?;
        }

        if self.price != items_total {
            return Err(OrderDomainError::TotalPriceMismatch {
                total: self.price,
                items_total,
            });
        }

        tracing::debug!(total = %self.price, "Order items match total price");
        Ok(())
    }

    fn validate_item_price(item: &OrderItem) -> Result<(), OrderDomainError> {
        if !item.is_price_valid() {
            return Err(OrderDomainError::InvalidItemPrice {
                price: item.price(),
                product_id: item.product().product_id(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // State Machine
    // ========================================================================

    pub fn pay(&mut self) -> Result<(), OrderDomainError> {
        self.require_status("pay", &[OrderStatus::Pending])?;
        self.status = Some(OrderStatus::Paid);
        Ok(())
    }

    pub fn approve(&mut self) -> Result<(), OrderDomainError> {
        self.require_status("approve", &[OrderStatus::Paid])?;
        self.status = Some(OrderStatus::Approved);
        Ok(())
    }

    /// Starts compensating a paid order.
    pub fn init_cancel(&mut self, failure_messages: Vec<String>) -> Result<(), OrderDomainError> {
        self.require_status("init cancel", &[OrderStatus::Paid])?;
        self.status = Some(OrderStatus::Cancelling);
        self.update_failure_messages(failure_messages);
        Ok(())
    }

    pub fn cancel(&mut self, failure_messages: Vec<String>) -> Result<(), OrderDomainError> {
        self.require_status("cancel", &[OrderStatus::Cancelling, OrderStatus::Pending])?;
        self.status = Some(OrderStatus::Cancelled);
        self.update_failure_messages(failure_messages);
        Ok(())
    }

    fn require_status(
        &self,
        operation: &'static str,
        allowed: &[OrderStatus],
    ) -> Result<(), OrderDomainError> {
        match self.status {
            Some(status) if allowed.contains(&status) => Ok(()),
            status => Err(OrderDomainError::InvalidStatusTransition { operation, status }),
        }
    }

    // The first list is taken as-is; later lists only contribute their
    // non-empty messages.
    fn update_failure_messages(&mut self, failure_messages: Vec<String>) {
        match self.failure_messages.as_mut() {
            Some(existing) => {
                existing.extend(failure_messages.into_iter().filter(|message| !message.is_empty()));
            }
            None => self.failure_messages = Some(failure_messages),
        }
    }

    pub(crate) fn items_mut(&mut self) -> &mut [OrderItem] {
        &mut self.items
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn delivery_address(&self) -> &StreetAddress {
        &self.delivery_address
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    pub fn failure_messages(&self) -> Option<&[String]> {
        self.failure_messages.as_deref()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Option<&OrderId> {
        self.id.as_ref()
    }
}

impl AggregateRoot for Order {}

// ============================================================================
// Unit Tests
// ============================================================================
