/*!
# Tartan: Predefined Fields

Ready-made fields for the switches most programs end up wanting.
*/

use crate::{
	Field,
	field::Role,
	FieldValue,
	Lens,
	Section,
};
use tracing::level_filters::LevelFilter;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Verbosity.
///
/// A logging level for [`Field::verbosity`], convertible to a `tracing`
/// [`LevelFilter`] for whatever subscriber the program installs.
pub enum Verbosity {
	/// # Nothing.
	Quiet,

	/// # Errors Only.
	Minimal,

	#[default]
	/// # Info.
	Normal,

	/// # Debug.
	Detailed,

	/// # Everything.
	Debug,
}

crate::choices!(Verbosity { Quiet, Minimal, Normal, Detailed, Debug });

impl From<Verbosity> for LevelFilter {
	#[inline]
	fn from(src: Verbosity) -> Self { src.level_filter() }
}

impl Verbosity {
	#[must_use]
	/// # Level Filter.
	pub const fn level_filter(self) -> LevelFilter {
		match self {
			Self::Quiet => LevelFilter::OFF,
			Self::Minimal => LevelFilter::ERROR,
			Self::Normal => LevelFilter::INFO,
			Self::Detailed => LevelFilter::DEBUG,
			Self::Debug => LevelFilter::TRACE,
		}
	}

	#[must_use]
	/// # Adjust for Flags.
	///
	/// `--quiet` wins outright; `--verbose` raises the level to at least
	/// [`Verbosity::Detailed`].
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::Verbosity;
	///
	/// assert_eq!(Verbosity::Normal.adjust(true, false), Verbosity::Detailed);
	/// assert_eq!(Verbosity::Debug.adjust(true, false), Verbosity::Debug);
	/// assert_eq!(Verbosity::Debug.adjust(true, true), Verbosity::Quiet);
	/// ```
	pub fn adjust(self, verbose: bool, quiet: bool) -> Self {
		if quiet { Self::Quiet }
		else if verbose { self.max(Self::Detailed) }
		else { self }
	}

	/// # From Text.
	///
	/// Match a level by name, case-insensitively.
	pub(crate) fn from_text(raw: &str) -> Option<Self> {
		Self::kind().convert(raw).ok().and_then(Self::from_value)
	}
}



/// ## Predefined Fields.
impl<C: 'static> Field<C> {
	#[must_use]
	/// # Help Flag.
	///
	/// `-h`/`--help`. This is a breaker; [`App`](crate::App) responds to it
	/// by printing the usage.
	pub fn help(lens: Lens<C, bool>) -> Self {
		Self::flag("help", lens)
			.with_short('h')
			.with_long("help")
			.with_description("Display help.")
			.with_section(Section::HELP)
			.with_breaker(true)
			.with_role(Role::Help)
	}

	#[must_use]
	/// # Version Flag.
	///
	/// `-v`/`--version`. This is a breaker; [`App`](crate::App) responds to
	/// it by printing the version.
	pub fn version(lens: Lens<C, bool>) -> Self {
		Self::flag("version", lens)
			.with_short('v')
			.with_long("version")
			.with_description("Display version information.")
			.with_section(Section::HELP)
			.with_breaker(true)
			.with_role(Role::Version)
	}

	#[must_use]
	/// # All Flag.
	///
	/// `--all`. This is a breaker; [`App`](crate::App) includes hidden
	/// fields in the usage when it is set.
	pub fn all(lens: Lens<C, bool>) -> Self {
		Self::flag("all", lens)
			.with_long("all")
			.with_description("Display all options.")
			.with_breaker(true)
			.with_role(Role::All)
	}

	#[must_use]
	/// # Verbose Flag.
	///
	/// Raises [`App`](crate::App) output to at least [`Verbosity::Detailed`].
	pub fn verbose(lens: Lens<C, bool>) -> Self {
		Self::flag("verbose", lens)
			.with_long("verbose")
			.with_description("Turn on verbose logging.")
			.with_role(Role::Verbose)
	}

	#[must_use]
	/// # Quiet Flag.
	///
	/// Silences [`App`](crate::App) output entirely, errors included.
	pub fn quiet(lens: Lens<C, bool>) -> Self {
		Self::flag("quiet", lens)
			.with_long("quiet")
			.with_description("Turn off logging.")
			.with_role(Role::Quiet)
	}

	#[must_use]
	/// # Verbosity Option.
	///
	/// `--verbosity <level>`, optional.
	pub fn verbosity(lens: Lens<C, Verbosity>) -> Self {
		Self::option("verbosity", lens)
			.with_long("verbosity")
			.with_value_name("level")
			.with_description("Logging level.")
			.with_required(false)
			.with_role(Role::Verbosity)
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		FieldKind,
		Schema,
	};

	#[derive(Debug, Default)]
	struct Config {
		help: bool,
		version: bool,
		all: bool,
		verbose: bool,
		quiet: bool,
		verbosity: Verbosity,
	}

	#[test]
	fn t_predefined() {
		let schema = Schema::new()
			.with_fields([
				Field::help(crate::lens!(Config, help)),
				Field::version(crate::lens!(Config, version)),
				Field::all(crate::lens!(Config, all)),
				Field::verbose(crate::lens!(Config, verbose)),
				Field::quiet(crate::lens!(Config, quiet)),
				Field::verbosity(crate::lens!(Config, verbosity)),
			])
			.expect("Predefined fields should not conflict.");

		let roles: Vec<Option<Role>> = schema.fields().iter().map(Field::role).collect();
		assert_eq!(roles, [
			Some(Role::Help),
			Some(Role::Version),
			Some(Role::All),
			Some(Role::Verbose),
			Some(Role::Quiet),
			Some(Role::Verbosity),
		]);

		let out = schema.parse(["--verbose", "--verbosity", "DEBUG"]);
		assert!(out.is_success(), "Parse failed: {:?}", out.error());
		assert!(out.config().verbose);
		assert_eq!(out.config().verbosity, Verbosity::Debug);

		let field = &schema.fields()[5];
		assert_eq!(field.kind(), FieldKind::Option);
		assert!(! field.is_required());
		assert_eq!(field.value_kind().choices().map(<[&str]>::len), Some(5));

		// Breakers.
		assert!(schema.parse(["--all", "--nope"]).is_help());
		assert!(schema.parse(["-v"]).config().version);
	}

	#[test]
	fn t_level_filter() {
		assert_eq!(Verbosity::default(), Verbosity::Normal);
		assert_eq!(LevelFilter::from(Verbosity::Quiet), LevelFilter::OFF);
		assert_eq!(Verbosity::Minimal.level_filter(), LevelFilter::ERROR);
		assert_eq!(Verbosity::Detailed.level_filter(), LevelFilter::DEBUG);
		assert_eq!(Verbosity::Debug.level_filter(), LevelFilter::TRACE);
		assert_eq!(Verbosity::Quiet.adjust(false, false), Verbosity::Quiet);

		assert_eq!(Verbosity::from_text(" DETAILED "), Some(Verbosity::Detailed));
		assert_eq!(Verbosity::from_text("Debug"), Some(Verbosity::Debug));
		assert_eq!(Verbosity::from_text("loud"), None);
	}
}
