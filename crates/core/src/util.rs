//! Exact-variant helpers used by every `same_value_as` implementation.

use crate::value_object::ValueObject;

/// Returns `true` iff `a` and `b` are instances of the exact same concrete type.
///
/// Two types implementing [`ValueObject`] are never considered the same variant
/// just because they share the trait, or because their native representations
/// coincide.
pub fn class_equals(a: &dyn ValueObject, b: &dyn ValueObject) -> bool {
    a.as_any().type_id() == b.as_any().type_id()
}

/// Downcasts `other` to the concrete type of `this` when [`class_equals`] holds.
pub fn same_variant<'a, T: ValueObject>(this: &T, other: &'a dyn ValueObject) -> Option<&'a T> {
    if !class_equals(this, other) {
        return None;
    }
    other.as_any().downcast_ref::<T>()
}
