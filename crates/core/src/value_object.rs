//! Value object trait: equality by value, not identity.
//!
//! Inputs and generated listings have **no identity**: they are defined
//! entirely by their attribute values and exist only for the call that
//! produced them.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two listings
/// built from the same text with the same price draw are equal.
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u32);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(25), Price(25));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
