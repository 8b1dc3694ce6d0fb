//! The `ValueObject` capability: structural comparison across any two value
//! objects via `same_value_as`, gated on the exact concrete type exposed by
//! `as_any`.

use core::any::Any;
use core::fmt::{Debug, Display};

/// Capability shared by every value object.
///
/// Value objects are **immutable** and **compared by value**. Every concrete type
/// keeps its fields private and exposes no `&mut self` methods, so the state
/// fixed at construction is the state for the object's whole lifetime.
///
/// ## Contract
///
/// - **Construction** validates once (see [`crate::FromNative`]); invalid values
///   never exist.
/// - **`same_value_as`** compares against *any* value object. It returns `false`
///   unless both sides are the exact same concrete type (see
///   [`crate::class_equals`]), and otherwise compares contents structurally.
///   It never panics.
/// - **`Display`** is the canonical string representation.
///
/// The trait is object safe so heterogeneous value objects can be compared
/// through `&dyn ValueObject`.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money { amount: i64 }
///
/// impl ValueObject for Money {
///     fn same_value_as(&self, other: &dyn ValueObject) -> bool {
///         same_variant(self, other).is_some_and(|other| self.amount == other.amount)
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
/// ```
pub trait ValueObject: Any + Debug + Display + Send + Sync {
    /// Structural equality against another value object.
    fn same_value_as(&self, other: &dyn ValueObject) -> bool;

    /// Upcast used for exact-variant checks and downcasting.
    fn as_any(&self) -> &dyn Any;
}
