use std::ops::Deref;
use std::sync::OnceLock;

use crate::error::RegistryError;
use crate::registry::PropertyRegistry;


/// Process-wide slot for a family registry, set exactly once.
///
/// Meant for `static` items. The registry is installed during a setup phase
/// with [`RegistryCell::init`] (or lazily with [`RegistryCell::get_or_init`])
/// and is read-only afterwards. The first registry wins; later
/// initializations are refused.
///
/// ```
/// use proptab_registry::{PropertyRegistry, RegistryCell};
///
/// static WIDGETS: RegistryCell = RegistryCell::new("widgets");
///
/// assert!(WIDGETS.get().is_none());
/// WIDGETS.init(PropertyRegistry::builder("widgets").build().unwrap()).unwrap();
/// assert!(WIDGETS.init(PropertyRegistry::builder("widgets").build().unwrap()).is_err());
/// assert!(WIDGETS.is_empty());
/// ```
pub struct RegistryCell {
	label: &'static str,
	cell: OnceLock<PropertyRegistry>,
}

impl RegistryCell {
	/// Creates an empty cell.
	pub const fn new(label: &'static str) -> Self {
		Self {
			label,
			cell: OnceLock::new(),
		}
	}

	/// Installs the registry.
	///
	/// Returns [`RegistryError::AlreadyInitialized`] if a registry is already
	/// installed; the installed one is kept.
	pub fn init(&self, registry: PropertyRegistry) -> Result<&PropertyRegistry, RegistryError> {
		if self.cell.set(registry).is_err() {
			tracing::warn!(domain = "properties", registry = self.label, "registry already initialized");
			return Err(RegistryError::AlreadyInitialized { registry: self.label });
		}
		tracing::debug!(domain = "properties", registry = self.label, "registry initialized");
		Ok(self.registry())
	}

	/// Returns the installed registry, building it with `f` on first use.
	pub fn get_or_init(&self, f: impl FnOnce() -> PropertyRegistry) -> &PropertyRegistry {
		self.cell.get_or_init(f)
	}

	/// Returns the installed registry, if any.
	pub fn get(&self) -> Option<&PropertyRegistry> {
		self.cell.get()
	}

	/// Returns true once a registry is installed.
	pub fn is_initialized(&self) -> bool {
		self.cell.get().is_some()
	}

	/// Returns the installed registry.
	///
	/// # Panics
	///
	/// Panics if used before initialization.
	#[track_caller]
	pub fn registry(&self) -> &PropertyRegistry {
		match self.cell.get() {
			Some(registry) => registry,
			None => {
				tracing::error!(domain = "properties", registry = self.label, "registry used before initialization");
				panic!("registry {}: used before initialization", self.label)
			}
		}
	}
}

impl Deref for RegistryCell {
	type Target = PropertyRegistry;

	#[track_caller]
	fn deref(&self) -> &PropertyRegistry {
		self.registry()
	}
}

impl core::fmt::Debug for RegistryCell {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("RegistryCell")
			.field("label", &self.label)
			.field("initialized", &self.is_initialized())
			.finish()
	}
}
