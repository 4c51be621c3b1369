use std::any::Any;

use proptab_primitives::{PropertyType, Value};

use crate::error::PropertyError;
use crate::registry::PropertyRegistry;

#[cfg(test)]
mod tests;

/// A concrete type that publishes properties through a shared registry.
///
/// Implementors only point at their family registry and expose themselves as
/// [`Any`]; [`PropertyAccess`] supplies the property operations. The
/// [`impl_reflectable!`](crate::impl_reflectable) macro writes this impl.
pub trait Reflectable: Any {
	/// Returns the registry for this object's family.
	fn properties(&self) -> &'static PropertyRegistry;

	/// Returns `self` as the concrete type's [`Any`].
	fn as_any(&self) -> &dyn Any;

	/// Returns `self` as the concrete type's mutable [`Any`].
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Property access forwarded to an object's registry with the object as target.
///
/// Implemented for every [`Reflectable`], including `dyn Reflectable`.
pub trait PropertyAccess {
	/// Reads a property with its declared type, faulting on any mismatch.
	fn get_property<T: PropertyType>(&self, name: &str) -> T;

	/// Writes a property with its declared type, faulting on any mismatch.
	fn set_property<T: PropertyType>(&mut self, name: &str, value: T);

	/// Reads a property as a boxed [`Value`].
	fn get_value(&self, name: &str) -> Result<Value, PropertyError>;

	/// Writes a property from a boxed [`Value`].
	fn set_value(&mut self, name: &str, value: Value) -> Result<(), PropertyError>;

	/// Returns the declared property names in declaration order.
	fn property_names(&self) -> Vec<&'static str>;
}

impl<R: Reflectable + ?Sized> PropertyAccess for R {
	#[track_caller]
	fn get_property<T: PropertyType>(&self, name: &str) -> T {
		self.properties().get_strict(self.as_any(), name)
	}

	#[track_caller]
	fn set_property<T: PropertyType>(&mut self, name: &str, value: T) {
		let registry = self.properties();
		registry.set_strict(self.as_any_mut(), name, value);
	}

	fn get_value(&self, name: &str) -> Result<Value, PropertyError> {
		self.properties().get_dynamic(self.as_any(), name)
	}

	fn set_value(&mut self, name: &str, value: Value) -> Result<(), PropertyError> {
		let registry = self.properties();
		registry.set_dynamic(self.as_any_mut(), name, value)
	}

	fn property_names(&self) -> Vec<&'static str> {
		self.properties().describe_all()
	}
}

/// Implements [`Reflectable`] for a type whose registry lives in a `static`.
///
/// The static may be a `LazyLock<PropertyRegistry>` or a
/// [`RegistryCell`](crate::RegistryCell).
///
/// ```
/// use std::sync::LazyLock;
///
/// use proptab_registry::{PropertyAccess, PropertyRegistry, impl_reflectable, properties};
///
/// struct Lamp {
///     lit: bool,
/// }
///
/// static LAMP_PROPERTIES: LazyLock<PropertyRegistry> = LazyLock::new(|| {
///     PropertyRegistry::builder("lamp")
///         .extend(properties![
///             "lit" => (|l: &Lamp| l.lit, |l: &mut Lamp, v| l.lit = v),
///         ])
///         .build()
///         .expect("lamp properties")
/// });
///
/// impl_reflectable!(Lamp => LAMP_PROPERTIES);
///
/// let mut lamp = Lamp { lit: false };
/// lamp.set_property("lit", true);
/// assert!(lamp.get_property::<bool>("lit"));
/// ```
#[macro_export]
macro_rules! impl_reflectable {
	($type:ty => $registry:path) => {
		impl $crate::Reflectable for $type {
			fn properties(&self) -> &'static $crate::PropertyRegistry {
				&$registry
			}

			fn as_any(&self) -> &dyn ::std::any::Any {
				self
			}

			fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
				self
			}
		}
	};
}
