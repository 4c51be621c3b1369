use crate::value::{Value, ValueKind};


/// A type that property getters may return and setters may accept.
///
/// Every implementor participates in strict (statically typed) access. Only
/// types with a [`PropertyType::KIND`] also participate in dynamic access,
/// where they are boxed into and unboxed from [`Value`].
///
/// Applications expose their own strict-only types with an empty impl:
///
/// ```
/// use proptab_primitives::PropertyType;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Rgb(u8, u8, u8);
///
/// impl PropertyType for Rgb {}
///
/// assert!(Rgb::KIND.is_none());
/// ```
pub trait PropertyType: Sized + 'static {
	/// The dynamic kind, or `None` for strict-only types.
	///
	/// A type that sets a kind must also override [`to_value`](Self::to_value)
	/// and [`from_value`](Self::from_value); otherwise dynamic access to it
	/// fails as if it were strict-only.
	const KIND: Option<ValueKind> = None;

	/// Boxes this value. Returns `None` for strict-only types.
	fn to_value(&self) -> Option<Value> {
		None
	}

	/// Unboxes a value. Returns `None` for strict-only types.
	///
	/// Dynamic types never fail here: a value of the wrong kind (or an
	/// integer outside this type's range) yields the kind's sentinel.
	fn from_value(_value: &Value) -> Option<Self> {
		None
	}

	/// Human-readable type name for diagnostics.
	fn type_name() -> &'static str {
		std::any::type_name::<Self>()
	}
}

impl PropertyType for i64 {
	const KIND: Option<ValueKind> = Some(ValueKind::Integer);

	fn to_value(&self) -> Option<Value> {
		Some(Value::Integer(*self))
	}

	fn from_value(value: &Value) -> Option<Self> {
		Some(value.as_integer())
	}
}

impl PropertyType for String {
	const KIND: Option<ValueKind> = Some(ValueKind::Text);

	fn to_value(&self) -> Option<Value> {
		Some(Value::from(self.as_str()))
	}

	fn from_value(value: &Value) -> Option<Self> {
		Some(value.as_text().unwrap_or(Value::TEXT_SENTINEL).to_owned())
	}
}

/// Integers that widen losslessly into `i64`.
macro_rules! narrow_integer_property {
	($($ty:ty),* $(,)?) => {
		$(
			impl PropertyType for $ty {
				const KIND: Option<ValueKind> = Some(ValueKind::Integer);

				fn to_value(&self) -> Option<Value> {
					Some(Value::Integer(i64::from(*self)))
				}

				fn from_value(value: &Value) -> Option<Self> {
					Some(<$ty>::try_from(value.as_integer()).unwrap_or_default())
				}
			}
		)*
	};
}

narrow_integer_property!(i8, i16, i32, u8, u16, u32);

/// Types reachable only through strict access.
macro_rules! strict_only_property {
	($($ty:ty),* $(,)?) => {
		$( impl PropertyType for $ty {} )*
	};
}

strict_only_property!(bool, f32, f64, char, u64, usize);
