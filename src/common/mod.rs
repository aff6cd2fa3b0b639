// ============================================================================
// Shared Kernel
// ============================================================================
//
// Building blocks reused by every aggregate in the ordering system.
// Nothing in here knows about a specific aggregate.
//
// ============================================================================

pub mod entity;
pub mod event;
pub mod money;
pub mod value_objects;

pub use entity::{AggregateRoot, Entity};
pub use event::{deserialize_event, serialize_event, DomainEvent};
pub use money::{Money, MoneyError};
pub use value_objects::{CustomerId, OrderId, OrderStatus, ProductId, RestaurantId};
