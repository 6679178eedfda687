/*!
# Tartan: Values

Raw CLI strings are converted in two steps: a [`ValueKind`] turns the text
into a loosely-typed [`Value`], then the field's [`FieldValue`] type claims
that value for itself.

Most kinds are handled inline. The structured ones (characters, guids,
date/times, custom types) go through a [`Converter`], a named function with
a fixed `(&str) -> Result<Value, ConvertError>` signature.
*/

mod num;
mod structured;

use chrono::NaiveDateTime;
use crate::ConvertError;
pub use num::Width;
use std::any::Any;
use uuid::Uuid;



#[derive(Debug)]
/// # Value.
///
/// The intermediate result of a conversion.
pub enum Value {
	/// # Boolean.
	Bool(bool),

	/// # Character.
	Char(char),

	/// # Signed Integer.
	Signed(i64),

	/// # Unsigned Integer.
	Unsigned(u64),

	/// # Float.
	Float(f64),

	/// # String.
	Str(String),

	/// # Choice (Index into the Names).
	Choice(usize),

	/// # Guid.
	Guid(Uuid),

	/// # Date/Time.
	DateTime(NaiveDateTime),

	/// # Anything Else.
	Custom(Box<dyn Any + Send>),
}

impl Value {
	#[must_use]
	/// # Custom Value.
	pub fn custom<T: Any + Send>(value: T) -> Self { Self::Custom(Box::new(value)) }

	#[must_use]
	/// # Downcast Custom Value.
	///
	/// Returns `None` for non-custom values or type mismatches.
	pub fn downcast<T: Any>(self) -> Option<T> {
		if let Self::Custom(b) = self { b.downcast::<T>().ok().map(|b| *b) }
		else { None }
	}
}



#[derive(Debug, Clone, Copy)]
/// # Converter.
///
/// A named conversion function. Custom field types plug into parsing by
/// returning a [`ValueKind::Custom`] with one of these.
///
/// ## Examples
///
/// ```
/// use tartan::{Converter, ConvertError, Value};
///
/// fn percent(raw: &str) -> Result<Value, ConvertError> {
///     let num: u8 = raw.trim().trim_end_matches('%').parse()?;
///     Ok(Value::custom(num))
/// }
///
/// let conv = Converter::new("percent", percent);
/// assert_eq!(conv.convert("50%").ok().and_then(Value::downcast::<u8>), Some(50));
/// ```
pub struct Converter {
	/// # Name.
	name: &'static str,

	/// # Callback.
	cb: fn(&str) -> Result<Value, ConvertError>,
}

impl Converter {
	/// # Character.
	pub const CHAR: Self = Self::new("char", structured::char);

	/// # Guid.
	pub const GUID: Self = Self::new("guid", structured::guid);

	/// # Date/Time.
	pub const DATETIME: Self = Self::new("datetime", structured::datetime);

	#[must_use]
	/// # New.
	pub const fn new(name: &'static str, cb: fn(&str) -> Result<Value, ConvertError>)
	-> Self {
		Self { name, cb }
	}

	#[must_use]
	/// # Name.
	pub const fn name(&self) -> &'static str { self.name }

	/// # Convert.
	///
	/// ## Errors
	///
	/// Whatever the callback returns.
	pub fn convert(&self, raw: &str) -> Result<Value, ConvertError> { (self.cb)(raw) }
}



#[derive(Debug, Clone, Copy)]
/// # Value Kind.
pub enum ValueKind {
	/// # String (No Trimming).
	String,

	/// # Boolean.
	Bool,

	/// # Character.
	Char,

	/// # Signed Integer.
	Signed(Width),

	/// # Unsigned Integer.
	Unsigned(Width),

	/// # Float.
	Float,

	/// # Enum-Like Choice.
	///
	/// This holds the variant names, in order.
	Choice(&'static [&'static str]),

	/// # Guid.
	Guid,

	/// # Date/Time.
	DateTime,

	/// # Custom.
	Custom(Converter),
}

impl ValueKind {
	#[must_use]
	/// # Name.
	///
	/// This is used in error messages.
	pub const fn name(self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Bool => "bool",
			Self::Signed(Width::W8) => "i8",
			Self::Signed(Width::W16) => "i16",
			Self::Signed(Width::W32) => "i32",
			Self::Signed(Width::W64) => "i64",
			Self::Unsigned(Width::W8) => "u8",
			Self::Unsigned(Width::W16) => "u16",
			Self::Unsigned(Width::W32) => "u32",
			Self::Unsigned(Width::W64) => "u64",
			Self::Float => "float",
			Self::Choice(_) => "enum",
			Self::Char | Self::Guid | Self::DateTime | Self::Custom(_) =>
				match self.converter() {
					Some(c) => c.name(),
					None => "unknown",
				},
		}
	}

	#[must_use]
	/// # Choice Names.
	pub const fn choices(self) -> Option<&'static [&'static str]> {
		if let Self::Choice(names) = self { Some(names) }
		else { None }
	}

	#[must_use]
	/// # Converter.
	///
	/// Return the structured converter for this kind, if it has one.
	pub const fn converter(self) -> Option<Converter> {
		match self {
			Self::Char => Some(Converter::CHAR),
			Self::Guid => Some(Converter::GUID),
			Self::DateTime => Some(Converter::DATETIME),
			Self::Custom(c) => Some(c),
			_ => None,
		}
	}

	/// # Convert.
	///
	/// Convert a raw string into a [`Value`] of this kind.
	///
	/// Strings are passed through as-are; everything else has surrounding
	/// whitespace trimmed first.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::{Value, ValueKind, Width};
	///
	/// assert!(matches!(
	///     ValueKind::Unsigned(Width::W8).convert("0x4"),
	///     Ok(Value::Unsigned(4)),
	/// ));
	/// assert!(ValueKind::Unsigned(Width::W8).convert("257").is_err());
	///
	/// assert!(matches!(
	///     ValueKind::Choice(&["Bar"]).convert("BAR"),
	///     Ok(Value::Choice(0)),
	/// ));
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if the string is not a valid literal for the kind.
	pub fn convert(self, raw: &str) -> Result<Value, ConvertError> {
		match self {
			Self::String => Ok(Value::Str(raw.to_owned())),
			Self::Bool => {
				let src = raw.trim();
				if src.eq_ignore_ascii_case("true") { Ok(Value::Bool(true)) }
				else if src.eq_ignore_ascii_case("false") { Ok(Value::Bool(false)) }
				else { Err(ConvertError::Bool) }
			},
			Self::Signed(w) => num::signed(raw, w).map(Value::Signed),
			Self::Unsigned(w) => num::unsigned(raw, w).map(Value::Unsigned),
			Self::Float => raw.trim().parse::<f64>()
				.map(Value::Float)
				.map_err(ConvertError::from),
			Self::Choice(names) => {
				let src = raw.trim();
				names.iter()
					.position(|n| n.eq_ignore_ascii_case(src))
					.map(Value::Choice)
					.ok_or_else(|| ConvertError::Choice(names.join("|").to_lowercase()))
			},
			Self::Char | Self::Guid | Self::DateTime | Self::Custom(_) =>
				match self.converter() {
					Some(c) => c.convert(raw),
					None => Err(ConvertError::Mismatch),
				},
		}
	}
}



/// # Field Value.
///
/// This trait connects a Rust type to the parser: which [`ValueKind`] to
/// convert raw strings with, how to claim the resulting [`Value`], and how
/// to describe and judge the current value for help screens and
/// required-field checks.
///
/// It is implemented for `String`, `bool`, `char`, the 8- through 64-bit
/// integers, `f32`, `f64`, [`Uuid`], [`NaiveDateTime`], and `Option<T>`.
/// Fieldless enums can use the [`choices!`](crate::choices) macro.
pub trait FieldValue: Sized + 'static {
	/// # Value Kind.
	fn kind() -> ValueKind;

	/// # From Value.
	///
	/// Return `None` if the value is the wrong type or doesn't fit.
	fn from_value(value: Value) -> Option<Self>;

	/// # Display Text.
	///
	/// `None` means null.
	fn text(&self) -> Option<String>;

	/// # Unset?
	///
	/// Whether or not this is the type's zero/null/default value. Enums
	/// built with [`choices!`](crate::choices) are never unset.
	fn is_unset(&self) -> bool;
}

impl FieldValue for String {
	fn kind() -> ValueKind { ValueKind::String }
	fn from_value(value: Value) -> Option<Self> {
		if let Value::Str(s) = value { Some(s) } else { None }
	}
	fn text(&self) -> Option<String> { Some(self.clone()) }
	fn is_unset(&self) -> bool { self.is_empty() }
}

impl FieldValue for bool {
	fn kind() -> ValueKind { ValueKind::Bool }
	fn from_value(value: Value) -> Option<Self> {
		if let Value::Bool(b) = value { Some(b) } else { None }
	}
	fn text(&self) -> Option<String> { Some(self.to_string()) }
	fn is_unset(&self) -> bool { ! *self }
}

impl FieldValue for char {
	fn kind() -> ValueKind { ValueKind::Char }
	fn from_value(value: Value) -> Option<Self> {
		if let Value::Char(c) = value { Some(c) } else { None }
	}
	fn text(&self) -> Option<String> { Some(self.to_string()) }
	fn is_unset(&self) -> bool { *self == '\0' }
}

/// # Helper: Integer Impls.
macro_rules! int {
	($var:ident, $($ty:ty => $w:ident),+ $(,)?) => ($(
		impl FieldValue for $ty {
			fn kind() -> ValueKind { ValueKind::$var(Width::$w) }
			fn from_value(value: Value) -> Option<Self> {
				if let Value::$var(n) = value { Self::try_from(n).ok() } else { None }
			}
			fn text(&self) -> Option<String> { Some(self.to_string()) }
			fn is_unset(&self) -> bool { *self == 0 }
		}
	)+);
}

int!(Signed, i8 => W8, i16 => W16, i32 => W32, i64 => W64);
int!(Unsigned, u8 => W8, u16 => W16, u32 => W32, u64 => W64);

impl FieldValue for f64 {
	fn kind() -> ValueKind { ValueKind::Float }
	fn from_value(value: Value) -> Option<Self> {
		if let Value::Float(n) = value { Some(n) } else { None }
	}
	fn text(&self) -> Option<String> { Some(self.to_string()) }
	fn is_unset(&self) -> bool { *self == 0.0 }
}

impl FieldValue for f32 {
	fn kind() -> ValueKind { ValueKind::Float }

	#[expect(clippy::cast_possible_truncation, reason = "Floats narrow by design.")]
	fn from_value(value: Value) -> Option<Self> {
		if let Value::Float(n) = value { Some(n as Self) } else { None }
	}
	fn text(&self) -> Option<String> { Some(self.to_string()) }
	fn is_unset(&self) -> bool { *self == 0.0 }
}

impl FieldValue for Uuid {
	fn kind() -> ValueKind { ValueKind::Guid }
	fn from_value(value: Value) -> Option<Self> {
		if let Value::Guid(g) = value { Some(g) } else { None }
	}
	fn text(&self) -> Option<String> { Some(self.hyphenated().to_string()) }
	fn is_unset(&self) -> bool { self.is_nil() }
}

impl FieldValue for NaiveDateTime {
	fn kind() -> ValueKind { ValueKind::DateTime }
	fn from_value(value: Value) -> Option<Self> {
		if let Value::DateTime(dt) = value { Some(dt) } else { None }
	}
	fn text(&self) -> Option<String> { Some(self.to_string()) }
	fn is_unset(&self) -> bool { *self == Self::default() }
}

impl<T: FieldValue> FieldValue for Option<T> {
	fn kind() -> ValueKind { T::kind() }
	fn from_value(value: Value) -> Option<Self> { T::from_value(value).map(Some) }
	fn text(&self) -> Option<String> { self.as_ref().and_then(T::text) }
	fn is_unset(&self) -> bool { self.is_none() }
}



#[macro_export]
/// # Choices.
///
/// Implement [`FieldValue`](crate::FieldValue) for a fieldless enum so it
/// can be used as an option or parameter. Matching is case-insensitive
/// against the variant names, and the first variant is considered "unset".
///
/// ## Examples
///
/// ```
/// #[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// enum Foo {
///     #[default]
///     Bar,
///     Baz,
/// }
///
/// tartan::choices!(Foo { Bar, Baz });
///
/// use tartan::FieldValue;
/// let value = Foo::kind().convert("BAZ").unwrap();
/// assert_eq!(Foo::from_value(value), Some(Foo::Baz));
/// ```
macro_rules! choices {
	($ty:ident { $first:ident $(, $rest:ident)* $(,)? }) => {
		impl $crate::FieldValue for $ty {
			fn kind() -> $crate::ValueKind {
				$crate::ValueKind::Choice(&[stringify!($first) $(, stringify!($rest))*])
			}

			fn from_value(value: $crate::Value) -> ::std::option::Option<Self> {
				if let $crate::Value::Choice(idx) = value {
					[$ty::$first $(, $ty::$rest)*].into_iter().nth(idx)
				}
				else { ::std::option::Option::None }
			}

			fn text(&self) -> ::std::option::Option<::std::string::String> {
				let name = match self {
					$ty::$first => stringify!($first),
					$($ty::$rest => stringify!($rest),)*
				};
				::std::option::Option::Some(::std::borrow::ToOwned::to_owned(name))
			}

			// Every variant is a real selection; use `Option<T>` for null.
			fn is_unset(&self) -> bool { false }
		}
	};
}
