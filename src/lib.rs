/*!
# Tartan

Tartan is a declarative CLI argument parser. Rather than looping over
arguments yourself, you describe your flags, options, and positional
parameters up front as a [`Schema`] bound to the fields of a configuration
struct; Tartan then fills that struct in, enforces required values, and
draws aligned help screens.

Parsing rules are fixed and simple:

| Syntax | Meaning |
| ------ | ------- |
| `-k` | Short key. |
| `--key` | Long key. |
| `/key`, `/k` | Long key, falling back to short. |
| `-k val`, `-k=val`, `-k:val` | Option values, separate or inline. |
| `--` | Everything after is positional. |

Because `/` is a key prefix, absolute paths have to come after `--`.

Options and parameters are required unless marked otherwise. "Breaker"
flags like `--help` end parsing immediately and skip those checks.



## Example

```
use std::sync::OnceLock;
use tartan::{Field, Outcome, Schema};

#[derive(Debug, Default)]
struct Config {
    help: bool,
    format: String,
    count: u8,
    path: String,
}

fn schema() -> &'static Schema<Config> {
    static SCHEMA: OnceLock<Schema<Config>> = OnceLock::new();
    SCHEMA.get_or_init(|| Schema::new()
        .with_fields([
            Field::help(tartan::lens!(Config, help)),
            Field::option("format", tartan::lens!(Config, format))
                .with_short('f')
                .with_long("format")
                .with_description("Output format.")
                .with_required(false),
            Field::option("count", tartan::lens!(Config, count))
                .with_short('c')
                .with_description("How many times."),
            Field::parameter("path", tartan::lens!(Config, path))
                .with_description("Where to look."),
        ])
        .expect("The schema is fine.")
    )
}

match schema().parse(["-c", "0x3", "--format=json", "--", "/tmp"]) {
    Outcome::Success(config) => {
        assert_eq!(config.count, 3);
        assert_eq!(config.format, "json");
        assert_eq!(config.path, "/tmp");
    },
    Outcome::Help(_) => println!("Help screen goes here."),
    Outcome::Error(_, e) => panic!("{e}"),
}

// The first failure wins.
let out = schema().parse(["--", "/tmp"]);
assert_eq!(
    out.error().map(ToString::to_string).as_deref(),
    Some("Value for option 'count' is required."),
);
```

For a complete program, [`App`] takes care of printing help, version, and
error screens, leaving you with just the success path.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod app;
mod error;
mod field;
mod key;
mod lookup;
mod parse;
mod predefined;
mod schema;
mod sink;
mod usage;
mod validate;
mod value;

pub use app::{
	App,
	AppInfo,
	EXIT_HANDLER_ERROR,
	EXIT_PARSE_ERROR,
	EXIT_SUCCESS,
};
pub use error::{
	ConvertError,
	ErrorKind,
	ParseError,
	SchemaError,
};
pub use field::{
	Access,
	Field,
	FieldKind,
	Lens,
	Section,
};
pub use key::{
	KeyToken,
	Prefix,
};
pub use parse::Outcome;
pub use predefined::Verbosity;
pub use schema::Schema;
pub use sink::{
	Buffer,
	Console,
	Sink,
	Style,
};
pub use usage::{
	Settings,
	Usage,
};
pub use value::{
	Converter,
	FieldValue,
	Value,
	ValueKind,
	Width,
};



#[must_use]
/// # CLI Arguments.
///
/// Return the current process's arguments, minus the executable path, as
/// owned strings. Invalid UTF-8 is replaced rather than rejected.
pub fn args() -> Vec<String> {
	std::env::args_os()
		.skip(1)
		.map(|a| a.to_string_lossy().into_owned())
		.collect()
}
