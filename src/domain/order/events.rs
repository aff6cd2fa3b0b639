use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::DomainEvent;
use super::aggregate::Order;

// ============================================================================
// Order Events - Domain Events for Order Aggregate
// ============================================================================

/// Order Event - Union type for all order events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    Created(OrderCreatedEvent),
    Paid(OrderPaidEvent),
    Cancelled(OrderCancelledEvent),
}

impl OrderEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Created(_) => OrderCreatedEvent::event_type(),
            OrderEvent::Paid(_) => OrderPaidEvent::event_type(),
            OrderEvent::Cancelled(_) => OrderCancelledEvent::event_type(),
        }
    }

    pub fn order(&self) -> &Order {
        match self {
            OrderEvent::Created(e) => &e.order,
            OrderEvent::Paid(e) => &e.order,
            OrderEvent::Cancelled(e) => &e.order,
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Order Created - order validated and initialized as PENDING
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderCreatedEvent {
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent for OrderCreatedEvent {
    fn event_type() -> &'static str { "OrderCreated" }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Order Paid - payment confirmed for the order
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderPaidEvent {
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent for OrderPaidEvent {
    fn event_type() -> &'static str { "OrderPaid" }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Order Cancelled - payment needs to be compensated
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderCancelledEvent {
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent for OrderCancelledEvent {
    fn event_type() -> &'static str { "OrderCancelled" }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
