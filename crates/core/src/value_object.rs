//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by
/// value** - they have no identity of their own. `Cpf` is a value object: two
/// `Cpf` instances holding the same eleven digits are the same CPF, regardless
/// of where they were parsed. A citizen record, by contrast, is an entity:
/// identified by its ID even when its attributes change.
///
/// The trait requires:
/// - **Clone**: value objects should be cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
