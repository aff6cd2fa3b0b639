use std::fmt;

// ============================================================================
// Entity & Aggregate Root
// ============================================================================
//
// An entity is defined by its identity rather than its attributes.
// Some entities only receive their identity once they are initialized
// (an Order gets its id when it is placed), so the id is optional.
//
// ============================================================================

/// Anything with a strongly typed identity.
pub trait Entity {
    type Id: Clone + PartialEq + fmt::Debug;

    /// Identity of the entity, `None` until one has been assigned.
    fn id(&self) -> Option<&Self::Id>;

    fn has_identity(&self) -> bool {
        self.id().is_some()
    }
}

/// Marker for entities that form a consistency boundary.
///
/// Objects inside the boundary (e.g. order items) are only reachable and
/// modifiable through the root.
pub trait AggregateRoot: Entity {}
