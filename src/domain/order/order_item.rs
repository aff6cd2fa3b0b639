use serde::{Deserialize, Serialize};

use crate::common::{Money, OrderId};
use crate::domain::restaurant::Product;
use super::value_objects::OrderItemId;

// ============================================================================
// Order Item - Line of an order
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    id: Option<OrderItemId>,
    order_id: Option<OrderId>,
    product: Product,
    quantity: u32,
    price: Money,
    subtotal: Money,
}

/// Fields needed to construct an [`OrderItem`].
#[derive(Debug, Clone)]
pub struct OrderItemParams {
    pub product: Product,
    pub quantity: u32,
    pub price: Money,
    pub subtotal: Money,
}

impl OrderItem {
    pub fn new(params: OrderItemParams) -> Self {
        Self {
            id: None,
            order_id: None,
            product: params.product,
            quantity: params.quantity,
            price: params.price,
            subtotal: params.subtotal,
        }
    }

    /// Stamps the item with its parent order and position. Only the owning
    /// order calls this, during its own initialization.
    pub(crate) fn initialize_order_item(&mut self, order_id: OrderId, item_id: OrderItemId) {
        self.order_id = Some(order_id);
        self.id = Some(item_id);
    }

    /// Price is positive, matches the product's catalog price, and the
    /// subtotal is price x quantity. A product too large for `Money` never
    /// matches a subtotal.
    pub fn is_price_valid(&self) -> bool {
        self.price.is_greater_than_zero()
            && self.price == self.product.price()
            && self.price.multiply(self.quantity) == Ok(self.subtotal)
    }

    pub(crate) fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }

    pub fn id(&self) -> Option<OrderItemId> {
        self.id
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ProductId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn money(amount: Decimal) -> Money {
        Money::new(amount).unwrap()
    }

    fn create_test_item(catalog_price: Decimal, price: Decimal, quantity: u32, subtotal: Decimal) -> OrderItem {
        OrderItem::new(OrderItemParams {
            product: Product::new(ProductId::generate(), "Burger", money(catalog_price)),
            quantity,
            price: money(price),
            subtotal: money(subtotal),
        })
    }

    #[test]
    fn test_valid_item_price() {
        let item = create_test_item(dec!(7.50), dec!(7.50), 2, dec!(15.00));
        assert!(item.is_price_valid());
    }

    #[test]
    fn test_item_price_differs_from_catalog() {
        let item = create_test_item(dec!(8.00), dec!(7.50), 2, dec!(15.00));
        assert!(!item.is_price_valid());
    }

    #[test]
    fn test_item_subtotal_mismatch() {
        let item = create_test_item(dec!(7.50), dec!(7.50), 2, dec!(7.50));
        assert!(!item.is_price_valid());
    }

    #[test]
    fn test_zero_price_is_invalid() {
        let item = create_test_item(dec!(0), dec!(0), 1, dec!(0));
        assert!(!item.is_price_valid());
    }

    #[test]
    fn test_unconfirmed_product_is_invalid() {
        let item = OrderItem::new(OrderItemParams {
            product: Product::with_id(ProductId::generate()),
            quantity: 1,
            price: money(dec!(5.00)),
            subtotal: money(dec!(5.00)),
        });
        assert!(!item.is_price_valid());
    }

    #[test]
    fn test_subtotal_beyond_money_maximum_is_invalid() {
        let item = OrderItem::new(OrderItemParams {
            product: Product::new(ProductId::generate(), "Banquet", Money::MAX),
            quantity: u32::MAX,
            price: Money::MAX,
            subtotal: Money::MAX,
        });
        assert!(!item.is_price_valid());
    }

    #[test]
    fn test_initialize_order_item() {
        let mut item = create_test_item(dec!(3.00), dec!(3.00), 1, dec!(3.00));
        assert!(item.id().is_none());
        assert!(item.order_id().is_none());

        let order_id = OrderId::generate();
        item.initialize_order_item(order_id, OrderItemId::new(4));

        assert_eq!(item.id(), Some(OrderItemId::new(4)));
        assert_eq!(item.order_id(), Some(order_id));
    }
}
