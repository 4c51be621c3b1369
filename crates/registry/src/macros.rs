//! Declaration macros for property tables.

/// Selects the descriptor constructor by whether a setter is present.
#[doc(hidden)]
#[macro_export]
macro_rules! __property {
	($name:literal, $get:expr) => {
		$crate::PropertyDescriptor::read_only($name, $get)
	};
	($name:literal, $get:expr, $set:expr) => {
		$crate::PropertyDescriptor::read_write($name, $get, $set)
	};
}

/// Declares an ordered list of property descriptors.
///
/// Each entry names a property and gives its getter, optionally followed by a
/// setter. Entries without a setter are read-only. The result is a
/// `Vec<PropertyDescriptor>` in declaration order, ready for
/// [`RegistryBuilder::extend`](crate::RegistryBuilder::extend).
///
/// # Example
///
/// ```
/// use proptab_registry::{PropertyRegistry, properties};
///
/// struct Thing {
///     message: String,
/// }
///
/// impl Thing {
///     fn message(&self) -> String {
///         self.message.clone()
///     }
///
///     fn set_message(&mut self, value: String) {
///         self.message = value;
///     }
///
///     fn unchanged(&self) -> i64 {
///         4
///     }
/// }
///
/// let registry = PropertyRegistry::builder("thing")
///     .extend(properties![
///         "message" => (Thing::message, Thing::set_message),
///         "unchanged" => (Thing::unchanged),
///     ])
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.describe_all(), ["message", "unchanged"]);
/// assert!(!registry.property("unchanged").is_writable());
/// ```
#[macro_export]
macro_rules! properties {
	($($name:literal => ($get:expr $(, $set:expr)?)),* $(,)?) => {
		::std::vec![$($crate::__property!($name, $get $(, $set)?)),*]
	};
}
