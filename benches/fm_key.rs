/*!
# Benchmark: `tartan::KeyToken`
*/

use brunch::{
	Bench,
	benches,
};
use tartan::KeyToken;

benches!(
	Bench::new("tartan::KeyToken::parse(Hello World)")
		.run(|| KeyToken::parse("Hello World")),

	Bench::new("tartan::KeyToken::parse(-p)")
		.run(|| KeyToken::parse("-p")),

	Bench::new("tartan::KeyToken::parse(--prefix)")
		.run(|| KeyToken::parse("--prefix")),

	Bench::new("tartan::KeyToken::parse(--prefix-color=199)")
		.run(|| KeyToken::parse("--prefix-color=199")),

	Bench::new("tartan::KeyToken::parse(/prefix:199)")
		.run(|| KeyToken::parse("/prefix:199")),
);
