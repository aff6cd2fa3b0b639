use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Shared Identifiers
// ============================================================================

/// Declares a UUID-backed identifier newtype.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            pub fn new(value: ::uuid::Uuid) -> Self {
                Self(value)
            }

            /// Fresh random identifier.
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

pub(crate) use uuid_identifier;

uuid_identifier!(
    /// Primary identity of an order, assigned when the order is initialized.
    OrderId
);
uuid_identifier!(CustomerId);
uuid_identifier!(RestaurantId);
uuid_identifier!(ProductId);

// ============================================================================
// Order Status
// ============================================================================

/// Lifecycle of an order:
///
/// ```text
/// PENDING -> PAID -> APPROVED
///              \-> CANCELLING -> CANCELLED
/// PENDING ------------------------^
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Approved,
    Cancelling,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Approved => "APPROVED",
            Self::Cancelling => "CANCELLING",
            Self::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
