/*!
# Benchmark: `tartan::Schema`
*/

use brunch::{
	Bench,
	benches,
};
use tartan::{
	Field,
	Schema,
};

#[derive(Debug, Default)]
/// # Configuration.
struct Config {
	help: bool,
	quiet: bool,
	threads: u8,
	format: String,
	src: String,
	dst: Option<String>,
}

/// # Schema.
fn schema() -> Schema<Config> {
	Schema::new()
		.with_fields([
			Field::help(tartan::lens!(Config, help)),
			Field::quiet(tartan::lens!(Config, quiet)),
			Field::option("threads", tartan::lens!(Config, threads))
				.with_short('t')
				.with_long("threads")
				.with_required(false),
			Field::option("format", tartan::lens!(Config, format))
				.with_short('f')
				.with_long("format")
				.with_required(false),
			Field::parameter("src", tartan::lens!(Config, src))
				.with_order(1),
			Field::parameter("dst", tartan::lens!(Config, dst))
				.with_order(2)
				.with_required(false),
		])
		.expect("Schema failed.")
}

/// # Arguments.
const ARGS: [&str; 7] = ["--quiet", "-t", "0x8", "--format=%Y", "src", "--", "-dst"];

benches!(
	Bench::new("tartan::Schema::new()")
		.run(schema),

	Bench::spacer(),

	Bench::new("tartan::Schema::parse(&[])")
		.run_seeded_with(schema, |s| s.parse(Vec::<String>::new()).is_help()),

	Bench::new("tartan::Schema::parse(&ARGS)")
		.run_seeded_with(schema, |s| s.parse(ARGS).is_success()),

	Bench::new("tartan::Schema::parse(-h)")
		.run_seeded_with(schema, |s| s.parse(["-h", "ignored"]).is_help()),
);
