// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory:
// - order: Order aggregate, order items, events, errors and domain service
// - restaurant: Restaurant aggregate and its product catalog
//
// ============================================================================

pub mod order;
pub mod restaurant;
