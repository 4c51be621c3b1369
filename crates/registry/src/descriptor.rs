//! Type-erased property descriptors.
//!
//! # Role
//!
//! A [`PropertyDescriptor`] binds one name to one getter (and optional setter)
//! for one concrete object type `O` and one value type `T`, and erases both so
//! descriptors for unrelated object types can live in the same registry.
//!
//! # Invariants
//!
//! - The compatibility check ([`PropertyDescriptor::accepts`]) runs before every
//!   erased invocation, on both the strict and the dynamic path.
//! - Strict access checks the requested type against `T` before touching the
//!   accessor; a mismatch never reaches the getter or setter.
//! - Only types with a [`PropertyType::KIND`] are reachable through [`Value`].
//!   Once the object check has passed, a missing conversion is reported as
//!   [`PropertyError::NotDynamic`], never as an incompatible object.

use std::any::{Any, TypeId};

use proptab_primitives::{PropertyType, Value, ValueKind};

use crate::error::{PropertyError, fault};


/// Boxed getter over a concrete object type.
pub type Getter<O, T> = Box<dyn Fn(&O) -> T + Send + Sync>;

/// Boxed setter over a concrete object type.
pub type Setter<O, T> = Box<dyn Fn(&mut O, T) + Send + Sync>;

/// Outcome of a dynamic write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stored {
	/// The value was stored as given.
	Exact,
	/// The value did not fit the property type and its sentinel was stored.
	Coerced,
}

/// Accessor pair with both the object and value types erased.
///
/// Strict reads and writes pass the value through an `Option<T>` slot so the
/// typed value never needs boxing.
trait Accessor: Send + Sync {
	fn read(&self, object: &dyn Any, slot: &mut dyn Any) -> bool;
	fn write(&self, object: &mut dyn Any, slot: &mut dyn Any) -> bool;
	fn read_value(&self, object: &dyn Any) -> Option<Value>;
	fn write_value(&self, object: &mut dyn Any, value: &Value) -> Option<Stored>;
}

struct TypedAccessor<O, T> {
	get: Getter<O, T>,
	set: Option<Setter<O, T>>,
}

impl<O: Any, T: PropertyType> Accessor for TypedAccessor<O, T> {
	fn read(&self, object: &dyn Any, slot: &mut dyn Any) -> bool {
		let (Some(object), Some(slot)) = (object.downcast_ref::<O>(), slot.downcast_mut::<Option<T>>()) else {
			return false;
		};
		*slot = Some((self.get)(object));
		true
	}

	fn write(&self, object: &mut dyn Any, slot: &mut dyn Any) -> bool {
		let Some(set) = &self.set else {
			return false;
		};
		let (Some(object), Some(value)) = (object.downcast_mut::<O>(), slot.downcast_mut::<Option<T>>().and_then(Option::take)) else {
			return false;
		};
		set(object, value);
		true
	}

	fn read_value(&self, object: &dyn Any) -> Option<Value> {
		object.downcast_ref::<O>().and_then(|object| (self.get)(object).to_value())
	}

	fn write_value(&self, object: &mut dyn Any, value: &Value) -> Option<Stored> {
		let set = self.set.as_ref()?;
		let object = object.downcast_mut::<O>()?;
		let converted = T::from_value(value)?;
		let stored = if converted.to_value().as_ref() == Some(value) {
			Stored::Exact
		} else {
			Stored::Coerced
		};
		set(object, converted);
		Some(stored)
	}
}

fn accepts_object<O: Any>(object: &dyn Any) -> bool {
	object.is::<O>()
}

/// A named, type-erased accessor pair bound to one concrete object type.
pub struct PropertyDescriptor {
	name: &'static str,
	object_type: TypeId,
	object_type_name: &'static str,
	value_type: TypeId,
	value_type_name: &'static str,
	kind: Option<ValueKind>,
	writable: bool,
	accepts: fn(&dyn Any) -> bool,
	accessor: Box<dyn Accessor>,
}

impl PropertyDescriptor {
	/// Creates a property that can only be read.
	pub fn read_only<O, T, G>(name: &'static str, get: G) -> Self
	where
		O: Any,
		T: PropertyType,
		G: Fn(&O) -> T + Send + Sync + 'static,
	{
		Self::from_boxed::<O, T>(name, Box::new(get), None)
	}

	/// Creates a property that can be read and written.
	pub fn read_write<O, T, G, S>(name: &'static str, get: G, set: S) -> Self
	where
		O: Any,
		T: PropertyType,
		G: Fn(&O) -> T + Send + Sync + 'static,
		S: Fn(&mut O, T) + Send + Sync + 'static,
	{
		Self::from_boxed::<O, T>(name, Box::new(get), Some(Box::new(set) as Setter<O, T>))
	}

	/// Creates a descriptor from already boxed accessors.
	pub fn from_boxed<O: Any, T: PropertyType>(name: &'static str, get: Getter<O, T>, set: Option<Setter<O, T>>) -> Self {
		Self {
			name,
			object_type: TypeId::of::<O>(),
			object_type_name: std::any::type_name::<O>(),
			value_type: TypeId::of::<T>(),
			value_type_name: T::type_name(),
			kind: T::KIND,
			writable: set.is_some(),
			accepts: accepts_object::<O>,
			accessor: Box::new(TypedAccessor { get, set }),
		}
	}

	/// Returns the property name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns true if the property has a setter.
	pub fn is_writable(&self) -> bool {
		self.writable
	}

	/// Returns true if `object` is of the concrete type this property is bound to.
	pub fn accepts(&self, object: &dyn Any) -> bool {
		(self.accepts)(object)
	}

	/// Returns the `TypeId` of the bound object type.
	pub fn object_type(&self) -> TypeId {
		self.object_type
	}

	/// Returns the name of the bound object type.
	pub fn object_type_name(&self) -> &'static str {
		self.object_type_name
	}

	/// Returns the `TypeId` of the value type.
	pub fn value_type(&self) -> TypeId {
		self.value_type
	}

	/// Returns the name of the value type.
	pub fn value_type_name(&self) -> &'static str {
		self.value_type_name
	}

	/// Returns the dynamic kind, or `None` if the property is strict-only.
	pub fn value_kind(&self) -> Option<ValueKind> {
		self.kind
	}

	/// Reads the property with its declared type.
	///
	/// # Panics
	///
	/// Faults if `object` is not of the bound type or `T` is not the declared
	/// value type.
	#[track_caller]
	pub fn get<T: PropertyType>(&self, object: &dyn Any) -> T {
		match self.try_get(object) {
			Ok(value) => value,
			Err(err) => fault(err),
		}
	}

	/// Writes the property with its declared type.
	///
	/// # Panics
	///
	/// Faults if `object` is not of the bound type, `T` is not the declared
	/// value type, or the property is read-only.
	#[track_caller]
	pub fn set<T: PropertyType>(&self, object: &mut dyn Any, value: T) {
		if let Err(err) = self.try_set(object, value) {
			fault(err);
		}
	}

	/// Reads the property as a boxed [`Value`].
	pub fn get_value(&self, object: &dyn Any) -> Result<Value, PropertyError> {
		self.check_object(object)?;
		self.check_dynamic()?;
		self.accessor.read_value(object).ok_or_else(|| self.not_dynamic())
	}

	/// Writes the property from a boxed [`Value`].
	///
	/// A value of the wrong kind is not an error: it degrades to the sentinel of
	/// the property's kind and the sentinel is stored.
	pub fn set_value(&self, object: &mut dyn Any, value: Value) -> Result<(), PropertyError> {
		self.check_object(object)?;
		let kind = self.check_dynamic()?;
		if !self.writable {
			tracing::warn!(
				domain = "properties",
				name = self.name,
				value = %value,
				"dynamic write to read-only property rejected",
			);
			return Err(PropertyError::ReadOnly { name: self.name });
		}

		match self.accessor.write_value(object, &value) {
			Some(Stored::Exact) => Ok(()),
			Some(Stored::Coerced) => {
				tracing::warn!(
					domain = "properties",
					name = self.name,
					expected = %kind,
					got = %value,
					"property value mismatch; stored sentinel",
				);
				Ok(())
			}
			None => Err(self.not_dynamic()),
		}
	}

	pub(crate) fn try_get<T: PropertyType>(&self, object: &dyn Any) -> Result<T, PropertyError> {
		self.check_object(object)?;
		self.check_type::<T>()?;
		let mut slot: Option<T> = None;
		if !self.accessor.read(object, &mut slot) {
			return Err(self.incompatible());
		}
		slot.ok_or_else(|| self.incompatible())
	}

	pub(crate) fn try_set<T: PropertyType>(&self, object: &mut dyn Any, value: T) -> Result<(), PropertyError> {
		self.check_object(object)?;
		self.check_type::<T>()?;
		if !self.writable {
			return Err(PropertyError::ReadOnly { name: self.name });
		}
		let mut slot = Some(value);
		if !self.accessor.write(object, &mut slot) {
			return Err(self.incompatible());
		}
		Ok(())
	}

	fn check_object(&self, object: &dyn Any) -> Result<(), PropertyError> {
		if self.accepts(object) { Ok(()) } else { Err(self.incompatible()) }
	}

	fn check_type<T: PropertyType>(&self) -> Result<(), PropertyError> {
		if TypeId::of::<T>() == self.value_type {
			Ok(())
		} else {
			Err(PropertyError::TypeMismatch {
				name: self.name,
				declared: self.value_type_name,
				requested: T::type_name(),
			})
		}
	}

	fn check_dynamic(&self) -> Result<ValueKind, PropertyError> {
		self.kind.ok_or_else(|| self.not_dynamic())
	}

	fn not_dynamic(&self) -> PropertyError {
		PropertyError::NotDynamic {
			name: self.name,
			value_type: self.value_type_name,
		}
	}

	fn incompatible(&self) -> PropertyError {
		PropertyError::IncompatibleObject {
			name: self.name,
			expected: self.object_type_name,
		}
	}
}

impl core::fmt::Debug for PropertyDescriptor {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("PropertyDescriptor")
			.field("name", &self.name)
			.field("object_type", &self.object_type_name)
			.field("value_type", &self.value_type_name)
			.field("kind", &self.kind)
			.field("writable", &self.writable)
			.finish()
	}
}

/// Builds a descriptor from a getter and an optional setter.
///
/// `None` needs a concrete setter type; [`PropertyDescriptor::read_only`] avoids that.
///
/// ```
/// use proptab_registry::make_property;
///
/// struct Counter {
///     count: i64,
/// }
///
/// let prop = make_property("count", |c: &Counter| c.count, Some(|c: &mut Counter, v: i64| c.count = v));
/// let fixed = make_property("fixed", |_: &Counter| 4i64, None::<fn(&mut Counter, i64)>);
/// assert!(prop.is_writable());
/// assert!(!fixed.is_writable());
/// ```
pub fn make_property<O, T, G, S>(name: &'static str, get: G, set: Option<S>) -> PropertyDescriptor
where
	O: Any,
	T: PropertyType,
	G: Fn(&O) -> T + Send + Sync + 'static,
	S: Fn(&mut O, T) + Send + Sync + 'static,
{
	PropertyDescriptor::from_boxed::<O, T>(name, Box::new(get), set.map(|s| Box::new(s) as Setter<O, T>))
}
