//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity keeps its identity while every other attribute changes. Two
/// entities with equal ids refer to the same thing even if their fields differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same entity (compares ids only).
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
