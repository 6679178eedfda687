/*!
# Tartan: Errors

There are three error types here, one per stage:
* [`SchemaError`] is returned while a [`Schema`](crate::Schema) is being declared;
* [`ConvertError`] is the low-level reason a raw string failed to become a value;
* [`ParseError`] is what a parse run reports back to the caller;

Every parse failure is fatal; the first one ends the run.
*/

use crate::FieldKind;
use std::num::{
	ParseFloatError,
	ParseIntError,
};
use thiserror::Error;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Error Kind.
///
/// A fieldless tag for [`ParseError`], handy for matching and testing.
pub enum ErrorKind {
	/// # Key-like token that cannot be split into prefix/name/value.
	InvalidKeyToken,

	/// # Well-formed key with no matching field.
	UnknownKey,

	/// # Option without a value.
	MissingOptionValue,

	/// # More positional values than declared parameters.
	UnexpectedParameter,

	/// # Value conversion failed.
	Conversion,

	/// # Required option or parameter left unset.
	MissingRequiredField,
}

impl ErrorKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidKeyToken => "Invalid key.",
			Self::UnknownKey => "Unknown key.",
			Self::MissingOptionValue => "Missing option value.",
			Self::UnexpectedParameter => "Unexpected parameter.",
			Self::Conversion => "Conversion failed.",
			Self::MissingRequiredField => "Missing required field.",
		}
	}
}



#[derive(Debug, Error)]
/// # Parse Error.
///
/// This is returned alongside the partially-populated configuration inside
/// [`Outcome::Error`](crate::Outcome::Error).
pub enum ParseError {
	#[error("Invalid key '{0}'.")]
	/// # Invalid Key Token.
	///
	/// The raw token started with `-`, `--`, or `/` but had no name.
	InvalidKeyToken(String),

	#[error("Unknown key '{0}'.")]
	/// # Unknown Key.
	///
	/// The raw token is included as-was.
	UnknownKey(String),

	#[error("Missing value for option '{0}'.")]
	/// # Missing Option Value.
	///
	/// The key (with prefix) is included.
	MissingOptionValue(String),

	#[error("Unexpected parameter '{0}'.")]
	/// # Unexpected Parameter.
	UnexpectedParameter(String),

	#[error("Failed to convert '{raw}' as {kind}.")]
	/// # Conversion Error.
	Conversion {
		/// # Value Kind Name.
		kind: &'static str,

		/// # Raw Input.
		raw: String,

		#[source]
		/// # Cause.
		source: ConvertError,
	},

	#[error("Value for {kind} '{name}' is required.")]
	/// # Missing Required Field.
	MissingRequiredField {
		/// # Field Kind.
		kind: FieldKind,

		/// # Field Name.
		name: &'static str,
	},
}

impl ParseError {
	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> ErrorKind {
		match self {
			Self::InvalidKeyToken(_) => ErrorKind::InvalidKeyToken,
			Self::UnknownKey(_) => ErrorKind::UnknownKey,
			Self::MissingOptionValue(_) => ErrorKind::MissingOptionValue,
			Self::UnexpectedParameter(_) => ErrorKind::UnexpectedParameter,
			Self::Conversion { .. } => ErrorKind::Conversion,
			Self::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
		}
	}

	#[must_use]
	/// # Exit Code.
	///
	/// Parse errors of every kind share the same process exit code.
	pub const fn exit_code(&self) -> i32 { crate::EXIT_PARSE_ERROR }

	/// # Conversion Wrapper.
	pub(crate) fn conversion(kind: &'static str, raw: &str, source: ConvertError)
	-> Self {
		Self::Conversion {
			kind,
			raw: raw.to_owned(),
			source,
		}
	}
}



#[derive(Debug, Error)]
/// # Conversion Error.
///
/// The underlying reason a raw string could not be converted.
pub enum ConvertError {
	#[error("expected 'true' or 'false'")]
	/// # Not a Boolean.
	Bool,

	#[error("expected exactly one character")]
	/// # Not a Single Character.
	Char,

	#[error(transparent)]
	/// # Bad Integer.
	Int(#[from] ParseIntError),

	#[error("sign must appear only once")]
	/// # Doubled Sign.
	Sign,

	#[error("value must be between {min} and {max}")]
	/// # Integer Out of Range.
	Range {
		/// # Minimum.
		min: i128,

		/// # Maximum.
		max: i128,
	},

	#[error(transparent)]
	/// # Bad Float.
	Float(#[from] ParseFloatError),

	#[error("expected one of {0}")]
	/// # Unknown Choice.
	///
	/// This holds the pipe-separated list of valid names.
	Choice(String),

	#[error(transparent)]
	/// # Bad Guid.
	Guid(#[from] uuid::Error),

	#[error(transparent)]
	/// # Bad Date/Time.
	DateTime(#[from] chrono::ParseError),

	#[error("value does not fit the field type")]
	/// # Type Mismatch.
	///
	/// A value was produced but the field could not store it.
	Mismatch,

	#[error(transparent)]
	/// # Custom Converter Failure.
	Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl ConvertError {
	#[must_use]
	/// # Custom.
	///
	/// Box up an arbitrary error from a custom converter.
	pub fn custom<E>(err: E) -> Self
	where E: std::error::Error + Send + Sync + 'static {
		Self::Custom(Box::new(err))
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Schema Error.
///
/// Declaration-time mistakes. These are bugs in the host program rather
/// than user input problems.
pub enum SchemaError {
	#[error("Duplicate key: {0}")]
	/// # Duplicate Key.
	DuplicateKey(String),

	#[error("Invalid key: {0}")]
	/// # Invalid Key.
	InvalidKey(String),

	#[error("Field '{0}' needs a short or long key.")]
	/// # Flag/Option Without Keys.
	MissingKey(&'static str),

	#[error("Parameter '{0}' cannot have keys.")]
	/// # Parameter With Keys.
	ParameterKey(&'static str),

	#[error("Only flags can be breakers ({0}).")]
	/// # Non-Flag Breaker.
	BreakerNotFlag(&'static str),
}



#[cfg(test)]
mod test {
	use super::*;
	use std::error::Error;

	#[test]
	fn t_kind() {
		let err = ParseError::UnknownKey("--nope".to_owned());
		assert_eq!(err.kind(), ErrorKind::UnknownKey);
		assert_eq!(err.to_string(), "Unknown key '--nope'.");

		let err = ParseError::MissingRequiredField {
			kind: FieldKind::Parameter,
			name: "p1",
		};
		assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
		assert_eq!(err.to_string(), "Value for parameter 'p1' is required.");
	}

	#[test]
	fn t_conversion_source() {
		let cause = "x".parse::<u8>().expect_err("x is not a number");
		let err = ParseError::conversion("u8", "x", ConvertError::from(cause));
		assert_eq!(err.kind(), ErrorKind::Conversion);
		assert_eq!(err.to_string(), "Failed to convert 'x' as u8.");
		assert!(
			err.source().is_some_and(|s| s.to_string() == "invalid digit found in string"),
			"Conversion errors should expose their cause.",
		);
	}
}
