/*!
# Tartan: App Runner

[`App::run`] is the glue between a parse and the program proper: it prints
help, version, or error screens as the outcome dictates, and otherwise
hands the configuration off to your handler, translating everything into a
process exit code.

Everything the runner writes is gated by a [`Verbosity`]. Errors need
[`Verbosity::Minimal`]; help, version, and usage need [`Verbosity::Normal`];
the header and parsed values shown before a successful run need
[`Verbosity::Debug`]. Whatever your handler writes is up to it.

The level comes from the schema's [`Field::verbosity`](crate::Field::verbosity)
field when there is one, falling back to [`App::with_verbosity`], and is
then adjusted by [`Field::verbose`](crate::Field::verbose) and
[`Field::quiet`](crate::Field::quiet).
*/

use crate::{
	field::Role,
	Outcome,
	Schema,
	Settings,
	Sink,
	Style,
	Usage,
	Verbosity,
};
use std::error::Error;
use tracing::debug;



/// # Exit Code: Success.
///
/// This is also used for help and version screens.
pub const EXIT_SUCCESS: i32 = 0;

/// # Exit Code: Handler Error.
pub const EXIT_HANDLER_ERROR: i32 = -1;

/// # Exit Code: Parse Error.
pub const EXIT_PARSE_ERROR: i32 = -2;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # App Info.
///
/// The [`app_info!`](crate::app_info) macro fills this in from your
/// package metadata.
pub struct AppInfo {
	/// # Name.
	name: &'static str,

	/// # Version.
	version: &'static str,

	/// # Description.
	description: &'static str,

	/// # Copyright.
	copyright: &'static str,
}

impl AppInfo {
	#[must_use]
	/// # New.
	pub const fn new(name: &'static str, version: &'static str) -> Self {
		Self {
			name,
			version,
			description: "",
			copyright: "",
		}
	}

	#[must_use]
	/// # With Description.
	pub const fn with_description(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	#[must_use]
	/// # With Copyright.
	pub const fn with_copyright(mut self, copyright: &'static str) -> Self {
		self.copyright = copyright;
		self
	}

	#[must_use]
	/// # Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Version.
	pub const fn version(&self) -> &'static str { self.version }

	#[must_use]
	/// # Description.
	pub const fn description(&self) -> &'static str { self.description }

	#[must_use]
	/// # Copyright.
	pub const fn copyright(&self) -> &'static str { self.copyright }
}

#[macro_export]
/// # App Info.
///
/// Build an [`AppInfo`](crate::AppInfo) from the calling crate's Cargo
/// package name, version, and description.
macro_rules! app_info {
	() => (
		$crate::AppInfo::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
			.with_description(env!("CARGO_PKG_DESCRIPTION"))
	);
}



/// # App.
///
/// ## Examples
///
/// ```
/// use tartan::{App, AppInfo, Buffer, Field, Schema, Sink};
///
/// #[derive(Default)]
/// struct Config {
///     help: bool,
///     name: String,
/// }
///
/// let schema = Schema::new()
///     .with_fields([
///         Field::help(tartan::lens!(Config, help)),
///         Field::parameter("name", tartan::lens!(Config, name)),
///     ])
///     .unwrap();
///
/// let app = App::new(&schema, AppInfo::new("hello", "1.0.0"));
/// let mut buf = Buffer::new();
/// let code = app.run(["Björk"], &mut buf, |c, out| {
///     out.write_line(&format!("Hello, {}!", c.name), None);
///     Ok::<i32, std::io::Error>(0)
/// });
///
/// assert_eq!(code, 0);
/// assert_eq!(buf.as_str(), "Hello, Björk!\n");
/// ```
pub struct App<'a, C> {
	/// # Schema.
	schema: &'a Schema<C>,

	/// # Info.
	info: AppInfo,

	/// # Usage Settings.
	settings: Settings,

	/// # Fallback Verbosity.
	verbosity: Verbosity,
}

impl<C> std::fmt::Debug for App<'_, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("App")
			.field("schema", self.schema)
			.field("info", &self.info)
			.field("settings", &self.settings)
			.field("verbosity", &self.verbosity)
			.finish()
	}
}

impl<'a, C> App<'a, C> {
	#[must_use]
	/// # New.
	pub const fn new(schema: &'a Schema<C>, info: AppInfo) -> Self {
		Self {
			schema,
			info,
			settings: Settings::new(),
			verbosity: Verbosity::Normal,
		}
	}

	#[must_use]
	/// # With Usage Settings.
	pub const fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	#[must_use]
	/// # With Verbosity.
	///
	/// Set the output level used when the schema has no verbosity field.
	/// The default is [`Verbosity::Normal`].
	pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
		self.verbosity = verbosity;
		self
	}

	#[must_use]
	/// # Info.
	pub const fn info(&self) -> &AppInfo { &self.info }

	#[must_use]
	/// # Usage Writer.
	pub const fn usage(&self) -> Usage<'_, C> { Usage::new(self.schema, &self.settings) }
}

impl<C: Default> App<'_, C> {
	/// # Run.
	///
	/// Parse the arguments and act on the outcome:
	///
	/// * Help: print the version, the usage, or the full intro, depending on which flags were given, and return [`EXIT_SUCCESS`];
	/// * Error: print the error chain and usage, and return [`EXIT_PARSE_ERROR`];
	/// * Success: call the handler, returning its code, or [`EXIT_HANDLER_ERROR`] if it fails;
	///
	/// Output is gated by [`App::verbosity`] as described in the module docs.
	pub fn run<I, S, K, F, E>(&self, args: I, sink: &mut K, handler: F) -> i32
	where
		I: IntoIterator<Item=S>,
		S: AsRef<str>,
		K: Sink + ?Sized,
		F: FnOnce(C, &mut K) -> Result<i32, E>,
		E: Error,
	{
		match self.schema.parse(args) {
			Outcome::Help(config) => {
				let level = self.verbosity(&config);
				if level < Verbosity::Normal {
					debug!(?level, "Help suppressed.");
					return EXIT_SUCCESS;
				}

				let all = self.has_role(Role::All, &config);
				if self.has_role(Role::Version, &config) {
					debug!("Showing version.");
					sink.write_line(self.info.version, None);
				}
				else if self.has_role(Role::Help, &config) {
					debug!(all, "Showing help.");
					self.usage().write_usage(sink, self.info.name, &config, all);
				}
				else {
					debug!(all, "Showing intro.");
					self.write_header(sink);
					self.write_description(sink);
					self.usage().write_usage(sink, self.info.name, &config, all);
				}
				EXIT_SUCCESS
			},
			Outcome::Error(config, err) => {
				let level = self.verbosity(&config);
				debug!(kind = err.kind().as_str(), ?level, "Showing parse error.");
				if Verbosity::Minimal <= level { write_error(sink, &err); }
				if Verbosity::Normal <= level {
					self.usage().write_usage(sink, self.info.name, &config, false);
				}
				err.exit_code()
			},
			Outcome::Success(config) => {
				let level = self.verbosity(&config);
				if Verbosity::Debug <= level {
					self.write_header(sink);
					let all = self.has_role(Role::All, &config);
					self.usage().write_values(sink, &config, all);
				}

				debug!("Running handler.");
				match handler(config, sink) {
					Ok(code) => code,
					Err(e) => {
						debug!("Handler failed.");
						if Verbosity::Minimal <= level { write_error(sink, &e); }
						EXIT_HANDLER_ERROR
					},
				}
			},
		}
	}
}

impl<C> App<'_, C> {
	/// # Write Header.
	///
	/// This is a blank line, the app name and version, and the copyright
	/// (if any).
	pub fn write_header<K: Sink + ?Sized>(&self, sink: &mut K) {
		sink.write_line("", None);
		sink.write(self.info.name, Some(Style::Title));
		sink.write_line(&format!(", version {}", self.info.version), None);
		if ! self.info.copyright.is_empty() {
			sink.write_line(self.info.copyright, None);
		}
	}

	/// # Write Description.
	pub fn write_description<K: Sink + ?Sized>(&self, sink: &mut K) {
		if ! self.info.description.is_empty() {
			sink.write_line("", None);
			sink.write_line(self.info.description, Some(Style::Accent));
		}
	}

	#[must_use]
	/// # Verbosity.
	///
	/// Return the output level for a parsed configuration: the value of its
	/// verbosity field (or the fallback), adjusted for `--verbose` and
	/// `--quiet`.
	pub fn verbosity(&self, config: &C) -> Verbosity {
		self.schema.fields()
			.iter()
			.find(|f| f.role() == Some(Role::Verbosity))
			.and_then(|f| f.text(config))
			.and_then(|t| Verbosity::from_text(&t))
			.unwrap_or(self.verbosity)
			.adjust(
				self.has_role(Role::Verbose, config),
				self.has_role(Role::Quiet, config),
			)
	}

	/// # Role Flag Set?
	fn has_role(&self, role: Role, config: &C) -> bool {
		self.schema.fields()
			.iter()
			.any(|f| f.role() == Some(role) && ! f.is_unset(config))
	}
}

/// # Write Error Chain.
///
/// The error goes first, followed by each of its causes on a `-->` line.
fn write_error<K: Sink + ?Sized>(sink: &mut K, err: &dyn Error) {
	sink.write_line("", None);
	sink.write("Error: ", Some(Style::Error));
	sink.write_line(&err.to_string(), Some(Style::Error));

	let mut source = err.source();
	while let Some(e) = source {
		sink.write("--> ", None);
		sink.write_line(&e.to_string(), None);
		source = e.source();
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		Buffer,
		Field,
	};

	#[derive(Debug, Default)]
	struct Config {
		help: bool,
		version: bool,
		all: bool,
		name: String,
		secret: u8,
	}

	/// # Schema.
	fn schema() -> Schema<Config> {
		Schema::new()
			.with_fields([
				Field::help(crate::lens!(Config, help)),
				Field::version(crate::lens!(Config, version)),
				Field::all(crate::lens!(Config, all)),
				Field::option("name", crate::lens!(Config, name))
					.with_short('n')
					.with_long("name")
					.with_description("Who to greet.")
					.with_required(false),
				Field::option("secret", crate::lens!(Config, secret))
					.with_long("secret")
					.with_required(false)
					.with_hidden(true),
			])
			.expect("Schema failed.")
	}

	/// # Info.
	const INFO: AppInfo = AppInfo::new("hello", "1.2.3")
		.with_description("Say hello.")
		.with_copyright("(c) Nobody");

	/// # Handler.
	fn greet(c: Config, out: &mut Buffer) -> Result<i32, std::io::Error> {
		if c.name == "fail" { Err(std::io::Error::other("Greeting failed.")) }
		else {
			out.write_line(&format!("Hello, {}!", c.name), None);
			Ok(7)
		}
	}

	#[test]
	fn t_intro() {
		let schema = schema();
		let app = App::new(&schema, INFO);
		let mut buf = Buffer::new();

		assert_eq!(app.run(Vec::<String>::new(), &mut buf, greet), EXIT_SUCCESS);
		assert!(
			buf.as_str().starts_with(
				"\nhello, version 1.2.3\n(c) Nobody\n\nSay hello.\n\nUsage: hello [-h | --help] [-v | --version] [--all] [options...]\n"
			),
			"Unexpected intro:\n{}", buf.as_str(),
		);
		assert!(! buf.as_str().contains("--secret"));

		// All shows hidden fields.
		buf.clear();
		assert_eq!(app.run(["--all"], &mut buf, greet), EXIT_SUCCESS);
		assert!(buf.as_str().starts_with("\nhello, version 1.2.3\n"));
		assert!(buf.as_str().contains("--secret <secret>"));
	}

	#[test]
	fn t_help_version() {
		let schema = schema();
		let app = App::new(&schema, INFO);
		let mut buf = Buffer::new();

		assert_eq!(app.run(["-v"], &mut buf, greet), EXIT_SUCCESS);
		assert_eq!(buf.as_str(), "1.2.3\n");

		buf.clear();
		assert_eq!(app.run(["--name", "x", "-h"], &mut buf, greet), EXIT_SUCCESS);
		assert!(buf.as_str().starts_with("\nUsage: hello "), "Help should skip the header.");
		assert!(buf.as_str().contains("Default: x."), "Help should show current values.");
	}

	#[test]
	fn t_errors() {
		let schema = schema();
		let app = App::new(&schema, INFO);
		let mut buf = Buffer::new();

		assert_eq!(app.run(["--secret", "300"], &mut buf, greet), EXIT_PARSE_ERROR);
		assert!(
			buf.as_str().starts_with(
				"\nError: Failed to convert '300' as u8.\n--> value must be between 0 and 255\n\nUsage: hello"
			),
			"Unexpected error:\n{}", buf.as_str(),
		);

		buf.clear();
		assert_eq!(app.run(["-n", "fail"], &mut buf, greet), EXIT_HANDLER_ERROR);
		assert_eq!(buf.as_str(), "\nError: Greeting failed.\n");
	}

	#[test]
	fn t_success() {
		let schema = schema();
		let app = App::new(&schema, INFO);
		let mut buf = Buffer::new();

		assert_eq!(app.run(["-n", "Björk"], &mut buf, greet), 7);
		assert_eq!(buf.as_str(), "Hello, Björk!\n");

		// Debug shows the header and values first.
		let app = app.with_verbosity(Verbosity::Debug);
		buf.clear();
		assert_eq!(app.run(["-n", "Björk"], &mut buf, greet), 7);
		assert!(buf.as_str().starts_with("\nhello, version 1.2.3\n(c) Nobody\n\nHelp:\n"));
		assert!(buf.as_str().contains("  -n, --name <name>  Björk\n"));
		assert!(buf.as_str().ends_with("Hello, Björk!\n"));
	}

	#[test]
	fn t_verbosity() {
		#[derive(Debug, Default)]
		struct Loud {
			help: bool,
			verbose: bool,
			quiet: bool,
			level: Verbosity,
			count: u8,
		}

		/// # Handler.
		fn count(c: Loud, out: &mut Buffer) -> Result<i32, std::io::Error> {
			if c.count == 0 { Err(std::io::Error::other("Nothing to count.")) }
			else {
				out.write_line(&c.count.to_string(), None);
				Ok(0)
			}
		}

		let schema = Schema::new()
			.with_fields([
				Field::help(crate::lens!(Loud, help)),
				Field::verbose(crate::lens!(Loud, verbose)),
				Field::quiet(crate::lens!(Loud, quiet)),
				Field::verbosity(crate::lens!(Loud, level)),
				Field::option("count", crate::lens!(Loud, count))
					.with_short('c')
					.with_required(false),
			])
			.expect("Schema failed.");

		// The fallback is ignored when the schema has its own field.
		let app = App::new(&schema, INFO).with_verbosity(Verbosity::Quiet);
		assert_eq!(app.verbosity(&Loud::default()), Verbosity::Normal);

		let mut buf = Buffer::new();
		let code = app.run(["-c", "3", "--verbosity", "quiet"], &mut buf, count);
		assert_eq!(code, EXIT_SUCCESS);
		assert_eq!(buf.as_str(), "3\n", "Handler output isn't gated.");

		// Quiet silences help.
		for args in [&["--quiet", "-h"][..], &["--verbosity", "quiet", "-h"][..]] {
			buf.clear();
			assert_eq!(app.run(args, &mut buf, count), EXIT_SUCCESS);
			assert!(buf.is_empty(), "Help should be silent: {}", buf.as_str());
		}

		// Minimal keeps errors but not usage.
		buf.clear();
		assert_eq!(app.run(["--verbosity", "minimal", "-c", "x"], &mut buf, count), EXIT_PARSE_ERROR);
		assert!(buf.as_str().starts_with("\nError: Failed to convert 'x' as u8."));
		assert!(! buf.as_str().contains("Usage:"));

		buf.clear();
		assert_eq!(app.run(["--quiet", "-c", "0"], &mut buf, count), EXIT_HANDLER_ERROR);
		assert!(buf.is_empty());

		// Debug echoes values; verbose alone does not.
		buf.clear();
		assert_eq!(app.run(["--verbose", "-c", "3"], &mut buf, count), EXIT_SUCCESS);
		assert_eq!(buf.as_str(), "3\n");

		buf.clear();
		assert_eq!(app.run(["--verbosity", "DEBUG", "-c", "3"], &mut buf, count), EXIT_SUCCESS);
		assert!(buf.as_str().starts_with("\nhello, version 1.2.3\n"));
		assert!(buf.as_str().contains("  --verbosity <level>"));
		assert!(buf.as_str().ends_with("3\n"));
	}

	#[test]
	fn t_info() {
		let info = crate::app_info!();
		assert_eq!(info.name(), "tartan");
		assert_eq!(info.version(), env!("CARGO_PKG_VERSION"));
		assert!(info.copyright().is_empty());
	}
}
