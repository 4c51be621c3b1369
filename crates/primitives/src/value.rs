use std::fmt;
use std::sync::Arc;


/// A boxed property value for name-based access.
///
/// Exactly two kinds exist. Reading a value as the other kind never fails:
/// integer requests on text yield `0` and text requests on an integer yield
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
	/// Integer value.
	Integer(i64),
	/// Text value. Shared and immutable, so clones are cheap.
	Text(Arc<str>),
}

impl Value {
	/// Integer sentinel returned for integer requests on a text value.
	pub const INTEGER_SENTINEL: i64 = 0;

	/// Text stored into a text property written from a non-text value.
	pub const TEXT_SENTINEL: &'static str = "";

	/// Creates a text value.
	pub fn text(value: impl Into<Arc<str>>) -> Self {
		Value::Text(value.into())
	}

	/// Returns the integer payload, or [`Value::INTEGER_SENTINEL`] for text.
	pub fn as_integer(&self) -> i64 {
		match self {
			Value::Integer(v) => *v,
			Value::Text(_) => Self::INTEGER_SENTINEL,
		}
	}

	/// Returns the text payload, or `None` for an integer.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v),
			Value::Integer(_) => None,
		}
	}

	/// Returns which variant is active.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Integer(_) => ValueKind::Integer,
			Value::Text(_) => ValueKind::Text,
		}
	}

	/// Returns true if this value is of the given kind.
	pub fn matches_kind(&self, kind: ValueKind) -> bool {
		self.kind() == kind
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		self.kind().name()
	}

	/// Debug rendering for diagnostics, e.g. `integer(4)` or `text("hi")`.
	pub fn describe(&self) -> String {
		match self {
			Value::Integer(v) => format!("integer({v})"),
			Value::Text(v) => format!("text({v:?})"),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe())
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Integer(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(Arc::from(v))
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(Arc::from(v))
	}
}

impl From<Arc<str>> for Value {
	fn from(v: Arc<str>) -> Self {
		Value::Text(v)
	}
}

/// The kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Integer kind.
	Integer,
	/// Text kind.
	Text,
}

impl ValueKind {
	/// Returns the lowercase name of this kind.
	pub fn name(self) -> &'static str {
		match self {
			ValueKind::Integer => "integer",
			ValueKind::Text => "text",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
