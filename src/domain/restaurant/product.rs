use serde::{Deserialize, Serialize};

use crate::common::{Entity, Money, ProductId};

// ============================================================================
// Product Entity
// ============================================================================

/// A catalog product. Two products are the same product when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Reference to a product whose name and price are not confirmed yet.
    ///
    /// The price stays at zero until the restaurant catalog confirms it, so an
    /// unconfirmed product never passes price validation.
    pub fn with_id(id: ProductId) -> Self {
        Self::new(id, String::new(), Money::ZERO)
    }

    pub fn product_id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn update_with_confirmed_name_and_price(&mut self, name: impl Into<String>, price: Money) {
        self.name = name.into();
        self.price = price;
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&ProductId> {
        Some(&self.id)
    }
}
