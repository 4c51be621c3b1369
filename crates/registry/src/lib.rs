#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Runtime property reflection.
//!
//! A concrete type publishes a table of named, typed properties that callers
//! can discover and invoke by name without knowing the type at compile time.
//! This crate provides:
//! - [`PropertyDescriptor`]: one name bound to a type-erased getter/setter pair
//! - [`PropertyRegistry`]: the immutable, ordered table for one object family
//! - [`RegistryBuilder`]: declaration-time construction with duplicate checks
//! - [`Reflectable`] and [`PropertyAccess`]: property access on the object itself
//! - [`RegistryCell`]: one-time process-wide registry storage
//! - Declaration macros ([`properties!`], [`impl_reflectable!`])
//!
//! Two access paths with deliberately different error regimes:
//! - **Strict** (`get_strict`, `set_strict`, `get_property`, `set_property`):
//!   typed, and any mismatch is a programming error that panics.
//! - **Dynamic** (`get_dynamic`, `set_dynamic`, `get_value`, `set_value`):
//!   boxed [`Value`], unknown names are recoverable errors and kind mismatches
//!   silently store the kind's sentinel.

mod builder;
#[cfg(test)]
mod capture;
mod cell;
mod descriptor;
mod error;
mod macros;
mod object;
mod registry;

pub use builder::{DuplicatePolicy, RegistryBuilder};
pub use cell::RegistryCell;
pub use descriptor::{Getter, PropertyDescriptor, Setter, make_property};
pub use error::{PropertyError, RegistryError};
pub use object::{PropertyAccess, Reflectable};
pub use proptab_primitives::{PropertyType, Value, ValueKind};
pub use registry::PropertyRegistry;
