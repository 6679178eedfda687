/*!
# Tartan: Fields
*/

use crate::{
	ConvertError,
	FieldValue,
	ParseError,
	Value,
	ValueKind,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Field Kind.
pub enum FieldKind {
	/// # Boolean Switch.
	Flag,

	/// # Key With a Value.
	Option,

	/// # Positional Value.
	Parameter,
}

impl fmt::Display for FieldKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FieldKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Flag => "flag",
			Self::Option => "option",
			Self::Parameter => "parameter",
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Section.
///
/// Sections group fields on the help screen. They have no bearing on
/// parsing.
///
/// Expandable sections with three or fewer flags or parameters have their
/// members spelled out in the synopsis line; everything else collapses to a
/// `[name...]` placeholder.
pub struct Section {
	/// # Sort Order.
	order: i32,

	/// # Name.
	name: &'static str,

	/// # Expandable?
	expandable: bool,
}

impl Section {
	/// # Help.
	pub const HELP: Self = Self::new(1, "Help", true);

	/// # Flags.
	pub const FLAGS: Self = Self::new(2, "Flags", true);

	/// # Options.
	pub const OPTIONS: Self = Self::new(3, "Options", false);

	/// # Parameters.
	pub const PARAMETERS: Self = Self::new(4, "Parameters", true);

	#[must_use]
	/// # New.
	pub const fn new(order: i32, name: &'static str, expandable: bool) -> Self {
		Self { order, name, expandable }
	}

	#[must_use]
	/// # Sort Order.
	pub const fn order(self) -> i32 { self.order }

	#[must_use]
	/// # Name.
	pub const fn name(self) -> &'static str { self.name }

	#[must_use]
	/// # Expandable?
	pub const fn is_expandable(self) -> bool { self.expandable }
}



/// # Field Access.
///
/// This is the type-erased connection between a [`Field`] and the
/// configuration struct it writes to. [`Lens`] is the stock implementation.
pub trait Access<C>: Send + Sync {
	/// # Store a Value.
	///
	/// ## Errors
	///
	/// Return [`ConvertError::Mismatch`] if the value can't be stored.
	fn set(&self, config: &mut C, value: Value) -> Result<(), ConvertError>;

	/// # Current Value as Text.
	fn text(&self, config: &C) -> Option<String>;

	/// # Unset?
	fn is_unset(&self, config: &C) -> bool;
}



/// # Lens.
///
/// A pair of plain accessor functions pointing at one field of a
/// configuration struct. The [`lens!`](crate::lens) macro writes these for
/// you.
///
/// ## Examples
///
/// ```
/// use tartan::Lens;
///
/// #[derive(Default)]
/// struct Config {
///     format: String,
/// }
///
/// let a = Lens::new(|c: &Config| &c.format, |c: &mut Config| &mut c.format);
/// let b = tartan::lens!(Config, format);
/// ```
pub struct Lens<C, T> {
	/// # Getter.
	get: fn(&C) -> &T,

	/// # Mutable Getter.
	get_mut: fn(&mut C) -> &mut T,
}

impl<C, T> Clone for Lens<C, T> {
	#[inline]
	fn clone(&self) -> Self { *self }
}

impl<C, T> Copy for Lens<C, T> {}

impl<C, T> fmt::Debug for Lens<C, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Lens").finish_non_exhaustive()
	}
}

impl<C, T> Lens<C, T> {
	#[must_use]
	/// # New.
	pub const fn new(get: fn(&C) -> &T, get_mut: fn(&mut C) -> &mut T) -> Self {
		Self { get, get_mut }
	}
}

impl<C, T: FieldValue> Access<C> for Lens<C, T> {
	fn set(&self, config: &mut C, value: Value) -> Result<(), ConvertError> {
		let value = T::from_value(value).ok_or(ConvertError::Mismatch)?;
		*(self.get_mut)(config) = value;
		Ok(())
	}

	fn text(&self, config: &C) -> Option<String> { (self.get)(config).text() }

	fn is_unset(&self, config: &C) -> bool { (self.get)(config).is_unset() }
}

#[macro_export]
/// # Lens.
///
/// Build a [`Lens`](crate::Lens) for `$ty.$field`.
///
/// ## Examples
///
/// ```
/// #[derive(Default)]
/// struct Config {
///     verbose: bool,
/// }
///
/// let flag = tartan::Field::flag("verbose", tartan::lens!(Config, verbose))
///     .with_long("verbose");
/// assert_eq!(flag.long(), Some("verbose"));
/// ```
macro_rules! lens {
	($ty:ty, $field:ident) => (
		$crate::Lens::<$ty, _>::new(
			|c: &$ty| &c.$field,
			|c: &mut $ty| &mut c.$field,
		)
	);
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Runner Role.
///
/// A few fields mean something to the [`App`](crate::App) runner.
pub(crate) enum Role {
	/// # Show Help.
	Help,

	/// # Show Version.
	Version,

	/// # Show Hidden Fields Too.
	All,

	/// # Raise the Output Level.
	Verbose,

	/// # Silence Output.
	Quiet,

	/// # Output Level.
	Verbosity,
}



/// # Field.
///
/// One flag, option, or parameter, bound to a field of the configuration
/// type `C`.
///
/// Options and parameters are required by default; flags never are.
///
/// ## Examples
///
/// ```
/// use tartan::{Field, FieldKind, Section};
///
/// #[derive(Default)]
/// struct Config {
///     format: String,
/// }
///
/// let field = Field::option("format", tartan::lens!(Config, format))
///     .with_short('f')
///     .with_long("format")
///     .with_description("Date format.")
///     .with_required(false);
///
/// assert_eq!(field.kind(), FieldKind::Option);
/// assert_eq!(field.section(), Section::OPTIONS);
/// assert!(! field.is_required());
/// ```
pub struct Field<C> {
	/// # Kind.
	kind: FieldKind,

	/// # Name.
	name: &'static str,

	/// # Short Key.
	short: Option<char>,

	/// # Long Key.
	long: Option<&'static str>,

	/// # Value Name.
	value_name: &'static str,

	/// # Description.
	description: &'static str,

	/// # Required?
	required: bool,

	/// # Sort Order.
	order: i32,

	/// # Breaker?
	breaker: bool,

	/// # Hidden?
	hidden: bool,

	/// # Section.
	section: Section,

	/// # Value Kind.
	value_kind: ValueKind,

	/// # Runner Role.
	role: Option<Role>,

	/// # Accessor.
	access: Box<dyn Access<C>>,
}

impl<C> fmt::Debug for Field<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("kind", &self.kind)
			.field("name", &self.name)
			.field("short", &self.short)
			.field("long", &self.long)
			.field("value_name", &self.value_name)
			.field("required", &self.required)
			.field("order", &self.order)
			.field("breaker", &self.breaker)
			.field("hidden", &self.hidden)
			.field("section", &self.section)
			.field("value_kind", &self.value_kind)
			.finish_non_exhaustive()
	}
}

impl<C: 'static> Field<C> {
	#[must_use]
	/// # New Flag.
	pub fn flag(name: &'static str, lens: Lens<C, bool>) -> Self {
		Self::new(FieldKind::Flag, name, lens)
	}

	#[must_use]
	/// # New Option.
	pub fn option<T: FieldValue>(name: &'static str, lens: Lens<C, T>) -> Self {
		Self::new(FieldKind::Option, name, lens)
	}

	#[must_use]
	/// # New Parameter.
	pub fn parameter<T: FieldValue>(name: &'static str, lens: Lens<C, T>) -> Self {
		Self::new(FieldKind::Parameter, name, lens)
	}

	/// # New.
	fn new<T: FieldValue>(kind: FieldKind, name: &'static str, lens: Lens<C, T>) -> Self {
		let section = match kind {
			FieldKind::Flag => Section::FLAGS,
			FieldKind::Option => Section::OPTIONS,
			FieldKind::Parameter => Section::PARAMETERS,
		};

		Self {
			kind,
			name,
			short: None,
			long: None,
			value_name: name,
			description: "",
			required: ! matches!(kind, FieldKind::Flag),
			order: 0,
			breaker: false,
			hidden: false,
			section,
			value_kind: T::kind(),
			role: None,
			access: Box::new(lens),
		}
	}
}

/// ## Builder.
impl<C> Field<C> {
	#[must_use]
	/// # With Short Key.
	///
	/// Set the single-character key, without its `-` prefix.
	pub const fn with_short(mut self, key: char) -> Self {
		self.short = Some(key);
		self
	}

	#[must_use]
	/// # With Long Key.
	///
	/// Set the long key, without its `--` prefix.
	pub const fn with_long(mut self, key: &'static str) -> Self {
		self.long = Some(key);
		self
	}

	#[must_use]
	/// # With Description.
	///
	/// Line breaks are fine; the help screen will re-indent them.
	pub const fn with_description(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	#[must_use]
	/// # With Value Name.
	///
	/// This is the `<name>` shown after an option's keys, or as a
	/// parameter's placeholder. It defaults to the field name.
	pub const fn with_value_name(mut self, value_name: &'static str) -> Self {
		self.value_name = value_name;
		self
	}

	#[must_use]
	/// # With Sort Order.
	///
	/// For parameters, this is also binding order.
	pub const fn with_order(mut self, order: i32) -> Self {
		self.order = order;
		self
	}

	#[must_use]
	/// # With Section.
	pub const fn with_section(mut self, section: Section) -> Self {
		self.section = section;
		self
	}

	#[must_use]
	/// # With Required.
	///
	/// This has no effect on flags.
	pub const fn with_required(mut self, required: bool) -> Self {
		self.required = required && ! matches!(self.kind, FieldKind::Flag);
		self
	}

	#[must_use]
	/// # With Breaker.
	///
	/// A breaker flag stops parsing as soon as it is seen, skipping the
	/// required-field checks.
	pub const fn with_breaker(mut self, breaker: bool) -> Self {
		self.breaker = breaker;
		self
	}

	#[must_use]
	/// # With Hidden.
	pub const fn with_hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	#[must_use]
	/// # With Role.
	pub(crate) const fn with_role(mut self, role: Role) -> Self {
		self.role = Some(role);
		self
	}
}

/// ## Getters.
impl<C> Field<C> {
	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> FieldKind { self.kind }

	#[must_use]
	/// # Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Short Key.
	pub const fn short(&self) -> Option<char> { self.short }

	#[must_use]
	/// # Long Key.
	pub const fn long(&self) -> Option<&'static str> { self.long }

	#[must_use]
	/// # Value Name.
	pub const fn value_name(&self) -> &'static str { self.value_name }

	#[must_use]
	/// # Description.
	pub const fn description(&self) -> &'static str { self.description }

	#[must_use]
	/// # Required?
	pub const fn is_required(&self) -> bool { self.required }

	#[must_use]
	/// # Sort Order.
	pub const fn order(&self) -> i32 { self.order }

	#[must_use]
	/// # Breaker?
	pub const fn is_breaker(&self) -> bool { self.breaker }

	#[must_use]
	/// # Hidden?
	pub const fn is_hidden(&self) -> bool { self.hidden }

	#[must_use]
	/// # Section.
	pub const fn section(&self) -> Section { self.section }

	#[must_use]
	/// # Value Kind.
	pub const fn value_kind(&self) -> ValueKind { self.value_kind }

	#[must_use]
	/// # Runner Role.
	pub(crate) const fn role(&self) -> Option<Role> { self.role }

	#[must_use]
	/// # Current Value as Text.
	pub fn text(&self, config: &C) -> Option<String> { self.access.text(config) }

	#[must_use]
	/// # Unset?
	///
	/// Returns `true` if the bound value is still its type's zero, null, or
	/// default.
	pub fn is_unset(&self, config: &C) -> bool { self.access.is_unset(config) }
}

/// ## Binding.
impl<C> Field<C> {
	/// # Set Flag.
	pub(crate) fn set_flag(&self, config: &mut C) -> Result<(), ParseError> {
		self.access.set(config, Value::Bool(true))
			.map_err(|e| ParseError::conversion(self.value_kind.name(), "true", e))
	}

	/// # Convert and Set.
	///
	/// ## Errors
	///
	/// Conversion failures, including values the lens refuses, come back as
	/// [`ParseError::Conversion`].
	pub(crate) fn set(&self, config: &mut C, raw: &str) -> Result<(), ParseError> {
		let kind = self.value_kind;
		kind.convert(raw)
			.and_then(|v| self.access.set(config, v))
			.map_err(|e| ParseError::conversion(kind.name(), raw, e))
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Width;

	#[derive(Debug, Default)]
	struct Config {
		flag: bool,
		byte: u8,
		name: Option<String>,
	}

	#[test]
	fn t_defaults() {
		let flag = Field::flag("flag", crate::lens!(Config, flag));
		assert_eq!(flag.kind(), FieldKind::Flag);
		assert_eq!(flag.section(), Section::FLAGS);
		assert!(! flag.is_required());
		assert!(! flag.with_required(true).is_required(), "Flags are never required.");

		let opt = Field::option("byte", crate::lens!(Config, byte));
		assert_eq!(opt.section(), Section::OPTIONS);
		assert_eq!(opt.value_name(), "byte");
		assert!(opt.is_required());
		assert!(matches!(opt.value_kind(), ValueKind::Unsigned(Width::W8)));

		let param = Field::parameter("name", crate::lens!(Config, name))
			.with_value_name("who");
		assert_eq!(param.section(), Section::PARAMETERS);
		assert_eq!(param.value_name(), "who");
		assert!(param.is_required());
	}

	#[test]
	fn t_set() {
		let mut config = Config::default();

		let flag = Field::flag("flag", crate::lens!(Config, flag));
		assert!(flag.is_unset(&config));
		assert!(flag.set_flag(&mut config).is_ok());
		assert!(config.flag);
		assert!(! flag.is_unset(&config));

		let byte = Field::option("byte", crate::lens!(Config, byte));
		assert!(byte.set(&mut config, " 0x10 ").is_ok());
		assert_eq!(config.byte, 16);
		assert_eq!(byte.text(&config).as_deref(), Some("16"));

		let err = byte.set(&mut config, "257").expect_err("257 is not a byte.");
		assert_eq!(err.to_string(), "Failed to convert '257' as u8.");
		assert_eq!(config.byte, 16, "Failed conversions should leave the value alone.");

		let name = Field::parameter("name", crate::lens!(Config, name));
		assert!(name.is_unset(&config));
		assert_eq!(name.text(&config), None);
		assert!(name.set(&mut config, "Björk").is_ok());
		assert_eq!(config.name.as_deref(), Some("Björk"));
	}

	#[test]
	fn t_section() {
		assert!(Section::HELP.order() < Section::FLAGS.order());
		assert!(Section::FLAGS.order() < Section::OPTIONS.order());
		assert!(Section::OPTIONS.order() < Section::PARAMETERS.order());
		assert!(! Section::OPTIONS.is_expandable());
		assert_eq!(Section::new(9, "Extra", false).name(), "Extra");
		assert_eq!(FieldKind::Parameter.to_string(), "parameter");
	}
}
