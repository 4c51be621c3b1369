#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Value primitives for runtime property reflection.
//!
//! This crate provides:
//! - [`Value`]: the boxed integer-or-text carrier used by dynamic property access
//! - [`ValueKind`]: the discriminant of a [`Value`]
//! - [`PropertyType`]: the bridge between statically typed property values and [`Value`]

/// Statically typed property values and their mapping onto [`Value`].
pub mod property_type;
/// The dynamic value carrier.
pub mod value;

pub use property_type::PropertyType;
pub use value::{Value, ValueKind};
