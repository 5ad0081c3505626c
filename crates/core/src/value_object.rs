//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two instances with the same
/// attribute values are the same value. They are never mutated; an operation
/// that "changes" one returns a new instance instead.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Quantity(u32);
///
/// impl ValueObject for Quantity {}
///
/// assert_eq!(Quantity(3), Quantity(3));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
