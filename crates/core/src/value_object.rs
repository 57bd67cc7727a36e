//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, and two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (a `Product` built twice from the same
///   fields is the same product)
/// - **Entity**: Has identity (two employees with the same id are the same
///   employee)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(i64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(100), Price(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
