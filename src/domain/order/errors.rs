use crate::common::{Money, MoneyError, OrderStatus, ProductId, RestaurantId};

// ============================================================================
// Order Business Rule Errors
// ============================================================================

/// A violated order domain invariant. The caller decides how to react
/// (reject the command, report to the user); nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum OrderDomainError {
    #[error("Order is not in correct state for initialization")]
    AlreadyInitialized,

    #[error("Total price must be greater than zero, got {0}")]
    NonPositiveTotalPrice(Money),

    #[error("Total price {total} is not equal to order items total {items_total}")]
    TotalPriceMismatch { total: Money, items_total: Money },

    #[error("Order item price {price} is not valid for product {product_id}")]
    InvalidItemPrice { price: Money, product_id: ProductId },

    #[error("Order is not in correct state for {operation} operation (status: {status:?})")]
    InvalidStatusTransition {
        operation: &'static str,
        status: Option<OrderStatus>,
    },

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Restaurant {0} is currently not active")]
    RestaurantNotActive(RestaurantId),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
