/*!
# Tartan: Stamp

This example prints a timestamp, either the current local time or one
passed in, using an optional `strftime`-style format.

Try `--help`, `--all`, `--verbosity debug`, or something like:

```text
cargo run --example stamp -- -f "%A, %B %e" "2024-02-29 12:00"
```
*/

use chrono::NaiveDateTime;
use std::fmt::Write;
use tartan::{
	App,
	Console,
	Field,
	Schema,
	Sink,
	Style,
	Verbosity,
};
use tracing::{
	debug,
	info,
};



#[derive(Debug, Default)]
/// # Configuration.
struct Config {
	/// # Help.
	help: bool,

	/// # Version.
	version: bool,

	/// # All.
	all: bool,

	/// # Verbose.
	verbose: bool,

	/// # Quiet.
	quiet: bool,

	/// # Verbosity.
	verbosity: Verbosity,

	/// # Format.
	format: String,

	/// # UTC?
	utc: bool,

	/// # Time.
	time: Option<NaiveDateTime>,
}

/// # Schema.
fn schema() -> Result<Schema<Config>, tartan::SchemaError> {
	Schema::new().with_fields([
		Field::help(tartan::lens!(Config, help)),
		Field::version(tartan::lens!(Config, version)),
		Field::all(tartan::lens!(Config, all)),
		Field::verbose(tartan::lens!(Config, verbose)).with_hidden(true),
		Field::quiet(tartan::lens!(Config, quiet)).with_hidden(true),
		Field::verbosity(tartan::lens!(Config, verbosity)).with_hidden(true),
		Field::flag("utc", tartan::lens!(Config, utc))
			.with_short('u')
			.with_long("utc")
			.with_description("Use UTC rather than local time."),
		Field::option("format", tartan::lens!(Config, format))
			.with_short('f')
			.with_long("format")
			.with_value_name("fmt")
			.with_description("A strftime-style format string.\nAn RFC 3339-ish layout is used if omitted.")
			.with_required(false),
		Field::parameter("time", tartan::lens!(Config, time))
			.with_description("The time to stamp instead of now.")
			.with_required(false),
	])
}

/// # Stamp.
fn stamp(config: Config, out: &mut Console) -> Result<i32, std::fmt::Error> {
	let level = config.verbosity.adjust(config.verbose, config.quiet);
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.init();

	let time = match config.time {
		Some(t) => {
			debug!(%t, "Using the time given.");
			t
		},
		None if config.utc => chrono::Utc::now().naive_utc(),
		None => chrono::Local::now().naive_local(),
	};

	let format =
		if config.format.is_empty() { "%Y-%m-%d %H:%M:%S" }
		else { config.format.as_str() };
	info!(format, "Stamping.");

	// Bad specifiers surface as a formatting error rather than a panic.
	let mut line = String::new();
	write!(line, "{}", time.format(format))?;
	out.write_line(&line, Some(Style::Accent));

	Ok(0)
}

fn main() {
	let schema = match schema() {
		Ok(s) => s,
		Err(e) => {
			Console.write_line(&format!("Error: {e}"), Some(Style::Error));
			std::process::exit(tartan::EXIT_PARSE_ERROR);
		},
	};

	let app = App::new(&schema, tartan::app_info!());
	let code = app.run(tartan::args(), &mut Console, stamp);
	std::process::exit(code);
}
