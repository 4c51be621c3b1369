use rustc_hash::FxHashMap as HashMap;

use crate::descriptor::PropertyDescriptor;
use crate::error::RegistryError;
use crate::registry::PropertyRegistry;


/// How a builder reacts to two descriptors with the same name.
///
/// Neither policy produces a registry with duplicate names; they differ only
/// in how the configuration error surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Panic with the offending name.
	Panic,
	/// Return [`RegistryError::DuplicateName`] from [`RegistryBuilder::build`].
	#[default]
	Reject,
}

impl DuplicatePolicy {
	/// Returns the appropriate policy based on build configuration.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::Reject
		}
	}
}

/// Builder for constructing a [`PropertyRegistry`].
///
/// Descriptors keep the order they are added in.
pub struct RegistryBuilder {
	label: &'static str,
	properties: Vec<PropertyDescriptor>,
	policy: DuplicatePolicy,
}

impl RegistryBuilder {
	/// Creates a new builder with the given label for error messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			properties: Vec::new(),
			policy: DuplicatePolicy::for_build(),
		}
	}

	/// Returns the number of descriptors added so far.
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	/// Returns true if no descriptors have been added.
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	/// Sets the duplicate name handling policy.
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Adds a descriptor.
	pub fn property(mut self, descriptor: PropertyDescriptor) -> Self {
		self.properties.push(descriptor);
		self
	}

	/// Adds descriptors in iteration order.
	pub fn extend<I: IntoIterator<Item = PropertyDescriptor>>(mut self, descriptors: I) -> Self {
		self.properties.extend(descriptors);
		self
	}

	/// Builds the registry, rejecting duplicate names.
	///
	/// # Panics
	///
	/// Panics on a duplicate name under [`DuplicatePolicy::Panic`].
	pub fn build(self) -> Result<PropertyRegistry, RegistryError> {
		let mut by_name: HashMap<&'static str, usize> = HashMap::with_capacity_and_hasher(self.properties.len(), Default::default());

		for (idx, descriptor) in self.properties.iter().enumerate() {
			if by_name.insert(descriptor.name(), idx).is_some() {
				let err = RegistryError::DuplicateName {
					registry: self.label,
					name: descriptor.name(),
				};
				match self.policy {
					DuplicatePolicy::Panic => panic!("{err}"),
					DuplicatePolicy::Reject => return Err(err),
				}
			}
		}

		tracing::debug!(
			domain = "properties",
			registry = self.label,
			count = self.properties.len(),
			"property registry built",
		);

		Ok(PropertyRegistry::from_parts(self.label, self.properties, by_name))
	}
}
