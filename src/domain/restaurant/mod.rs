// ============================================================================
// Restaurant Domain
// ============================================================================
//
// The restaurant as seen by the order service: whether it is accepting
// orders, and the catalog of products with their authoritative prices.
//
// ============================================================================

pub mod aggregate;
pub mod product;

pub use aggregate::*;
pub use product::*;
