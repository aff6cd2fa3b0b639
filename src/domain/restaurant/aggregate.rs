use serde::{Deserialize, Serialize};

use crate::common::{AggregateRoot, Entity, ProductId, RestaurantId};
use super::product::Product;

// ============================================================================
// Restaurant Aggregate
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    products: Vec<Product>,
    active: bool,
}

/// Fields needed to construct a [`Restaurant`].
#[derive(Debug, Clone)]
pub struct RestaurantParams {
    pub restaurant_id: RestaurantId,
    pub products: Vec<Product>,
    pub active: bool,
}

impl Restaurant {
    pub fn new(params: RestaurantParams) -> Self {
        Self {
            id: params.restaurant_id,
            products: params.products,
            active: params.active,
        }
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Catalog entry for `product_id`, if the restaurant sells it.
    pub fn find_product(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.product_id() == product_id)
    }
}

impl Entity for Restaurant {
    type Id = RestaurantId;

    fn id(&self) -> Option<&RestaurantId> {
        Some(&self.id)
    }
}

impl AggregateRoot for Restaurant {}
