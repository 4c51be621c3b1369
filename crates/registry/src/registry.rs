//! The per-family property table.
//!
//! # Mental Model
//!
//! 1. **Build Phase:** a [`RegistryBuilder`] collects descriptors in declaration
//!    order and rejects duplicate names.
//! 2. **Publication:** the finished [`PropertyRegistry`] is stored once in a
//!    `static` (`LazyLock` or [`crate::RegistryCell`]) and never mutated.
//! 3. **Consumption:** callers look properties up by exact name and invoke them
//!    through the strict or the dynamic path.
//!
//! # Error Regimes
//!
//! | Path | Unknown name | Wrong type / kind | Foreign object | Read-only write |
//! |------|--------------|-------------------|----------------|-----------------|
//! | strict | fault | fault | fault | fault |
//! | dynamic | `Err(NotFound)` | sentinel stored | `Err(IncompatibleObject)` | `Err(ReadOnly)` |
//!
//! # Concurrency
//!
//! The registry is `Send + Sync` and immutable; reads need no locking. Writes
//! take `&mut` to the object, so exclusive access to an instance is the
//! caller's concern.

use std::any::Any;

use proptab_primitives::{PropertyType, Value};
use rustc_hash::FxHashMap as HashMap;

use crate::builder::RegistryBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::error::{PropertyError, fault};


/// Immutable, ordered table of property descriptors for one object family.
pub struct PropertyRegistry {
	label: &'static str,
	properties: Vec<PropertyDescriptor>,
	by_name: HashMap<&'static str, usize>,
}

impl PropertyRegistry {
	/// Starts building a registry.
	pub fn builder(label: &'static str) -> RegistryBuilder {
		RegistryBuilder::new(label)
	}

	pub(crate) fn from_parts(label: &'static str, properties: Vec<PropertyDescriptor>, by_name: HashMap<&'static str, usize>) -> Self {
		Self { label, properties, by_name }
	}

	/// Returns the label given at construction.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the number of declared properties.
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	/// Returns true if no properties are declared.
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	/// Returns true if a property with this exact name is declared.
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// Finds a descriptor by exact name.
	pub fn find(&self, name: &str) -> Option<&PropertyDescriptor> {
		self.by_name.get(name).map(|&idx| &self.properties[idx])
	}

	/// Finds a descriptor by exact name, faulting if it is not declared.
	#[track_caller]
	pub fn property(&self, name: &str) -> &PropertyDescriptor {
		match self.lookup(name) {
			Ok(descriptor) => descriptor,
			Err(err) => fault(err),
		}
	}

	/// Iterates descriptors in declaration order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = &PropertyDescriptor> + '_ {
		self.properties.iter()
	}

	/// Returns declared names in declaration order.
	pub fn describe_all(&self) -> Vec<&'static str> {
		self.properties.iter().map(PropertyDescriptor::name).collect()
	}

	/// Reads a property with its declared type.
	///
	/// # Panics
	///
	/// Faults on an unknown name, a foreign object, or a type other than the
	/// declared one.
	#[track_caller]
	pub fn get_strict<T: PropertyType>(&self, object: &dyn Any, name: &str) -> T {
		match self.lookup(name).and_then(|d| d.try_get(object)) {
			Ok(value) => value,
			Err(err) => fault(err),
		}
	}

	/// Writes a property with its declared type.
	///
	/// # Panics
	///
	/// Faults on an unknown name, a foreign object, a type other than the
	/// declared one, or a read-only property.
	#[track_caller]
	pub fn set_strict<T: PropertyType>(&self, object: &mut dyn Any, name: &str, value: T) {
		if let Err(err) = self.lookup(name).and_then(|d| d.try_set(object, value)) {
			fault(err);
		}
	}

	/// Reads a property as a boxed [`Value`].
	pub fn get_dynamic(&self, object: &dyn Any, name: &str) -> Result<Value, PropertyError> {
		self.lookup(name)?.get_value(object)
	}

	/// Writes a property from a boxed [`Value`].
	///
	/// A value of the wrong kind stores the sentinel of the property's kind.
	/// Writing a read-only property is rejected with [`PropertyError::ReadOnly`]
	/// and leaves the object untouched.
	pub fn set_dynamic(&self, object: &mut dyn Any, name: &str, value: Value) -> Result<(), PropertyError> {
		self.lookup(name)?.set_value(object, value)
	}

	fn lookup(&self, name: &str) -> Result<&PropertyDescriptor, PropertyError> {
		self.find(name).ok_or_else(|| PropertyError::NotFound {
			registry: self.label,
			name: name.to_owned(),
		})
	}
}

impl core::fmt::Debug for PropertyRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("PropertyRegistry")
			.field("label", &self.label)
			.field("properties", &self.properties)
			.finish()
	}
}

impl<'a> IntoIterator for &'a PropertyRegistry {
	type Item = &'a PropertyDescriptor;
	type IntoIter = std::slice::Iter<'a, PropertyDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}
