// ============================================================================
// Food Ordering - Order Domain Core
// ============================================================================
//
// Pure domain model for the order service:
// - common: shared kernel (entity traits, domain events, money, identifiers)
// - domain: Order and Restaurant aggregates plus the order domain service
// - config: logging configuration for binaries embedding this crate
//
// No I/O happens here. Persistence, messaging and HTTP adapters live outside
// and call into this model.
//
// ============================================================================

pub mod common;
pub mod config;
pub mod domain;
