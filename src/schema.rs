/*!
# Tartan: Schema
*/

use crate::{
	Field,
	FieldKind,
	key,
	lookup::KeyLookup,
	Prefix,
	SchemaError,
};
use std::fmt;



/// # Schema.
///
/// An immutable, validated list of [`Field`]s for the configuration type
/// `C`, along with the key lookup tables used while parsing.
///
/// Build it once, typically in a `static` [`OnceLock`](std::sync::OnceLock),
/// and share it by reference; parsing never mutates it.
///
/// ## Examples
///
/// ```
/// use tartan::{Field, Schema};
///
/// #[derive(Default)]
/// struct Config {
///     help: bool,
///     format: String,
///     path: String,
/// }
///
/// let schema = Schema::new()
///     .with_field(
///         Field::flag("help", tartan::lens!(Config, help))
///             .with_short('h')
///             .with_long("help")
///             .with_breaker(true)
///     )
///     .and_then(|s| s.with_field(
///         Field::option("format", tartan::lens!(Config, format))
///             .with_short('f')
///             .with_required(false)
///     ))
///     .and_then(|s| s.with_field(
///         Field::parameter("path", tartan::lens!(Config, path))
///     ))
///     .unwrap();
///
/// let config = schema.parse(["-f", "%Y", "tmp"]).into_config();
/// assert_eq!(config.format, "%Y");
/// assert_eq!(config.path, "tmp");
/// ```
pub struct Schema<C> {
	/// # Fields (Declaration Order).
	fields: Vec<Field<C>>,

	/// # Parameter Indices (Binding Order).
	parameters: Vec<usize>,

	/// # Key Lookups.
	keys: KeyLookup,
}

impl<C> Default for Schema<C> {
	#[inline]
	fn default() -> Self { Self::new() }
}

impl<C> fmt::Debug for Schema<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Schema")
			.field("fields", &self.fields)
			.field("parameters", &self.parameters)
			.finish_non_exhaustive()
	}
}

impl<C> Schema<C> {
	#[must_use]
	/// # New (Empty).
	pub const fn new() -> Self {
		Self {
			fields: Vec::new(),
			parameters: Vec::new(),
			keys: KeyLookup::new(),
		}
	}

	/// # With Field.
	///
	/// ## Errors
	///
	/// This will return an error if the field's keys are malformed or
	/// already taken, if a flag/option has no keys, if a parameter has any,
	/// or if a non-flag is marked as a breaker.
	pub fn with_field(mut self, field: Field<C>) -> Result<Self, SchemaError> {
		let name = field.name();
		let short = field.short();
		let long = field.long();

		// Shape first.
		match field.kind() {
			FieldKind::Parameter => if short.is_some() || long.is_some() {
				return Err(SchemaError::ParameterKey(name));
			},
			FieldKind::Flag | FieldKind::Option => if short.is_none() && long.is_none() {
				return Err(SchemaError::MissingKey(name));
			},
		}

		if field.is_breaker() && field.kind() != FieldKind::Flag {
			return Err(SchemaError::BreakerNotFlag(name));
		}

		// Key syntax.
		if let Some(k) = short {
			if ! key::valid_short(k) { return Err(SchemaError::InvalidKey(format!("-{k}"))); }
		}
		if let Some(k) = long {
			if ! key::valid_long(k) { return Err(SchemaError::InvalidKey(format!("--{k}"))); }
		}

		// Uniqueness.
		let idx = self.fields.len();
		if let Some(k) = short { self.keys.insert_short(k, idx)?; }
		if let Some(k) = long { self.keys.insert_long(k, idx)?; }

		if field.kind() == FieldKind::Parameter {
			self.parameters.push(idx);
		}
		self.fields.push(field);

		// Parameters bind by order, ties broken by declaration.
		let fields = &self.fields;
		self.parameters.sort_by_key(|&i| fields[i].order());

		Ok(self)
	}

	/// # With Fields.
	///
	/// Add each field in turn, stopping at the first problem.
	///
	/// ## Errors
	///
	/// See [`Schema::with_field`].
	pub fn with_fields<I>(self, fields: I) -> Result<Self, SchemaError>
	where I: IntoIterator<Item=Field<C>> {
		fields.into_iter().try_fold(self, Self::with_field)
	}

	#[must_use]
	/// # Fields.
	///
	/// Return all fields in declaration order.
	pub fn fields(&self) -> &[Field<C>] { self.fields.as_slice() }

	/// # Parameters.
	///
	/// Return the parameters in binding order.
	pub fn parameters(&self) -> impl Iterator<Item=&Field<C>> {
		self.parameters.iter().filter_map(|&i| self.fields.get(i))
	}

	#[must_use]
	/// # Resolve Key.
	///
	/// Find the flag or option answering to a given prefix/name pair.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::{Field, Prefix, Schema};
	///
	/// #[derive(Default)]
	/// struct Config {
	///     quiet: bool,
	/// }
	///
	/// let schema = Schema::new()
	///     .with_field(
	///         Field::flag("quiet", tartan::lens!(Config, quiet))
	///             .with_short('q')
	///             .with_long("quiet")
	///     )
	///     .unwrap();
	///
	/// assert!(schema.resolve(Prefix::Short, "q").is_some());
	/// assert!(schema.resolve(Prefix::Slash, "quiet").is_some());
	/// assert!(schema.resolve(Prefix::Long, "q").is_none());
	/// ```
	pub fn resolve(&self, prefix: Prefix, name: &str) -> Option<&Field<C>> {
		self.keys.resolve(prefix, name).and_then(|i| self.fields.get(i))
	}

	/// # Parameter by Position.
	pub(crate) fn parameter(&self, pos: usize) -> Option<&Field<C>> {
		self.parameters.get(pos).and_then(|&i| self.fields.get(i))
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[derive(Debug, Default)]
	struct Config {
		a: bool,
		b: bool,
		o: String,
		p1: String,
		p2: String,
		p3: String,
	}

	#[test]
	fn t_errors() {
		let err = Schema::new()
			.with_field(Field::flag("a", crate::lens!(Config, a)).with_short('a'))
			.and_then(|s| s.with_field(Field::flag("b", crate::lens!(Config, b)).with_short('a')))
			.expect_err("Duplicate short keys should fail.");
		assert_eq!(err, SchemaError::DuplicateKey("-a".to_owned()));

		let err = Schema::new()
			.with_field(Field::flag("a", crate::lens!(Config, a)).with_long("same"))
			.and_then(|s| s.with_field(Field::option("o", crate::lens!(Config, o)).with_long("same")))
			.expect_err("Duplicate long keys should fail.");
		assert_eq!(err, SchemaError::DuplicateKey("--same".to_owned()));

		for (field, expected) in [
			(
				Field::flag("a", crate::lens!(Config, a)),
				SchemaError::MissingKey("a"),
			),
			(
				Field::flag("a", crate::lens!(Config, a)).with_short('!'),
				SchemaError::InvalidKey("-!".to_owned()),
			),
			(
				Field::flag("a", crate::lens!(Config, a)).with_long("-a"),
				SchemaError::InvalidKey("---a".to_owned()),
			),
			(
				Field::parameter("p1", crate::lens!(Config, p1)).with_short('p'),
				SchemaError::ParameterKey("p1"),
			),
			(
				Field::option("o", crate::lens!(Config, o)).with_short('o').with_breaker(true),
				SchemaError::BreakerNotFlag("o"),
			),
		] {
			assert_eq!(Schema::new().with_field(field).err(), Some(expected));
		}
	}

	#[test]
	fn t_parameter_order() {
		let schema = Schema::new()
			.with_fields([
				Field::parameter("p1", crate::lens!(Config, p1)).with_order(2),
				Field::flag("a", crate::lens!(Config, a)).with_short('a'),
				Field::parameter("p2", crate::lens!(Config, p2)).with_order(1),
				Field::parameter("p3", crate::lens!(Config, p3)).with_order(2),
			])
			.expect("Schema failed.");

		let names: Vec<&str> = schema.parameters().map(Field::name).collect();
		assert_eq!(names, ["p2", "p1", "p3"]);
		assert_eq!(schema.parameter(0).map(Field::name), Some("p2"));
		assert!(schema.parameter(3).is_none());

		// Declaration order is untouched.
		let names: Vec<&str> = schema.fields().iter().map(Field::name).collect();
		assert_eq!(names, ["p1", "a", "p2", "p3"]);
	}

	#[test]
	fn t_send_sync() {
		/// # Assert Traits.
		const fn is_shareable<T: Send + Sync>() {}
		is_shareable::<Schema<Config>>();
	}
}
