/// Errors from property access.
///
/// The dynamic path returns these to the caller. The strict path treats every
/// one of them as a programming error and panics with it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
	/// No property with this name is declared in the registry.
	#[error("registry {registry}: no property named {name:?}")]
	NotFound { registry: &'static str, name: String },
	/// The object is not of the concrete type the property is bound to.
	#[error("property {name:?} is bound to {expected}, object is not")]
	IncompatibleObject { name: &'static str, expected: &'static str },
	/// Strict access requested a value type other than the declared one.
	#[error("property {name:?} holds {declared}, requested {requested}")]
	TypeMismatch {
		name: &'static str,
		declared: &'static str,
		requested: &'static str,
	},
	/// The property has no setter.
	#[error("property {name:?} is read-only")]
	ReadOnly { name: &'static str },
	/// The property's value type does not map onto a dynamic value, either
	/// because it declares no kind or because it lacks the conversions.
	#[error("property {name:?} holds {value_type}, which has no dynamic value conversion")]
	NotDynamic { name: &'static str, value_type: &'static str },
}

/// Errors from registry construction and initialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two descriptors share a name.
	#[error("registry {registry}: duplicate property name {name:?}")]
	DuplicateName { registry: &'static str, name: &'static str },
	/// A registry cell was initialized more than once.
	#[error("registry {registry}: already initialized")]
	AlreadyInitialized { registry: &'static str },
}

/// Raises a strict-path contract violation.
///
/// Strict access is only called with names and types that match a declared
/// property, so any failure is a defect in the calling code.
#[cold]
#[track_caller]
pub(crate) fn fault(err: PropertyError) -> ! {
	tracing::error!(domain = "properties", error = %err, "strict property access fault");
	panic!("property fault: {err}")
}

