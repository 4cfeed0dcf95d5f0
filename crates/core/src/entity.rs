//! Entity traits: identity + continuity across state changes.

use crate::id::RecordId;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// A form-backed entity kept in an ordered, id-assigning collection.
///
/// `Fields` is everything an operator can submit through a form; the id is
/// never part of it. Implementations decide which derived values are
/// recomputed when fields are (re)applied.
pub trait Record: Entity<Id = RecordId> + Clone + core::fmt::Debug {
    type Fields: Clone + core::fmt::Debug;

    /// Human-readable entity kind, used in errors and logs.
    const KIND: &'static str;

    /// Build a new record from submitted fields under an already-assigned id.
    fn from_fields(id: RecordId, fields: Self::Fields) -> Self;

    /// Replace every field except the id.
    fn apply_fields(&mut self, fields: Self::Fields);
}
