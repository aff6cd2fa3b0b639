use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::value_objects::uuid_identifier;

// ============================================================================
// Order Value Objects
// ============================================================================

uuid_identifier!(
    /// Externally shareable identifier of an order, distinct from its id.
    TrackingId
);

/// Position of an item within its order, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(u64);

impl OrderItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery address of an order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreetAddress {
    pub id: Uuid,
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl StreetAddress {
    pub fn new(
        id: Uuid,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_address_equality_covers_all_fields() {
        let id = Uuid::new_v4();
        let address = StreetAddress::new(id, "1 Main St", "10115", "Berlin");

        assert_eq!(address, StreetAddress::new(id, "1 Main St", "10115", "Berlin"));
        assert_ne!(address, StreetAddress::new(id, "1 Main St", "10117", "Berlin"));
        assert_ne!(address, StreetAddress::new(Uuid::new_v4(), "1 Main St", "10115", "Berlin"));
    }

    #[test]
    fn test_order_item_id_ordering() {
        assert!(OrderItemId::new(1) < OrderItemId::new(2));
        assert_eq!(OrderItemId::new(3).value(), 3);
    }

    #[test]
    fn test_tracking_id_is_unique() {
        assert_ne!(TrackingId::generate(), TrackingId::generate());
    }
}
