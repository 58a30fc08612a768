//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Customers and products are entities: two records with the same id are the
/// same customer/product even when their attributes (price, stock) differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
