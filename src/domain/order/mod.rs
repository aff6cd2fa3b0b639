// ============================================================================
// Order Domain - Business Logic for Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (StreetAddress, TrackingId, OrderItemId)
// - Order items and their price validation
// - Aggregate (Order with its lifecycle state machine)
// - Events (OrderCreated, OrderPaid, OrderCancelled)
// - Errors (OrderDomainError enum)
// - Domain service orchestrating aggregate operations into events
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod order_item;
pub mod aggregate;
pub mod events;
pub mod domain_service;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use order_item::*;
pub use aggregate::*;
pub use events::*;
pub use domain_service::*;
