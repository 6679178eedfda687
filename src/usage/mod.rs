/*!
# Tartan: Usage

This module renders the help screen for a [`Schema`]: a one-line synopsis
followed by the fields, grouped by [`Section`](crate::Section) and aligned
to a shared key column.
*/

mod layout;

use crate::{
	Field,
	FieldKind,
	Schema,
	Section,
	Sink,
	ValueKind,
};
use layout::{
	Layout,
	Row,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Usage Settings.
///
/// These control how help text is drawn. The key prefixes here are purely
/// cosmetic; parsing always recognizes `-`, `--`, and `/`.
///
/// ## Examples
///
/// ```
/// use tartan::Settings;
///
/// let settings = Settings::default()
///     .with_max_column(40)
///     .with_align_long(false);
/// assert_eq!(settings.max_column(), 40);
/// ```
pub struct Settings {
	/// # Short Key Prefix.
	short_prefix: &'static str,

	/// # Long Key Prefix.
	long_prefix: &'static str,

	/// # Key Separator (Synopsis).
	inline_separator: &'static str,

	/// # Key Separator (Sections).
	section_separator: &'static str,

	/// # Key Indentation.
	indent: &'static str,

	/// # Key/Description Gap.
	gap: &'static str,

	/// # Maximum Key Column (Gap Included).
	max_column: usize,

	/// # Align Long-Only Keys?
	align_long: bool,
}

impl Default for Settings {
	#[inline]
	fn default() -> Self { Self::new() }
}

impl Settings {
	#[must_use]
	/// # New (Default Settings).
	pub const fn new() -> Self {
		Self {
			short_prefix: "-",
			long_prefix: "--",
			inline_separator: " | ",
			section_separator: ", ",
			indent: "  ",
			gap: "  ",
			max_column: 30,
			align_long: true,
		}
	}

	#[must_use]
	/// # With Short Key Prefix.
	pub const fn with_short_prefix(mut self, prefix: &'static str) -> Self {
		self.short_prefix = prefix;
		self
	}

	#[must_use]
	/// # With Long Key Prefix.
	pub const fn with_long_prefix(mut self, prefix: &'static str) -> Self {
		self.long_prefix = prefix;
		self
	}

	#[must_use]
	/// # With Synopsis Key Separator.
	///
	/// This sits between a flag's short and long keys in the synopsis line.
	pub const fn with_inline_separator(mut self, sep: &'static str) -> Self {
		self.inline_separator = sep;
		self
	}

	#[must_use]
	/// # With Section Key Separator.
	///
	/// This sits between a field's short and long keys in the sections.
	pub const fn with_section_separator(mut self, sep: &'static str) -> Self {
		self.section_separator = sep;
		self
	}

	#[must_use]
	/// # With Key Indentation.
	pub const fn with_indent(mut self, indent: &'static str) -> Self {
		self.indent = indent;
		self
	}

	#[must_use]
	/// # With Key/Description Gap.
	pub const fn with_gap(mut self, gap: &'static str) -> Self {
		self.gap = gap;
		self
	}

	#[must_use]
	/// # With Maximum Key Column.
	///
	/// Keys wider than this (less the gap) are written on their own line.
	pub const fn with_max_column(mut self, max: usize) -> Self {
		self.max_column = max;
		self
	}

	#[must_use]
	/// # With Long Key Alignment.
	///
	/// When enabled, fields with only a long key are padded so their long
	/// key lines up with those of their short-keyed neighbors. This only
	/// applies to sections with at least one short key.
	pub const fn with_align_long(mut self, align: bool) -> Self {
		self.align_long = align;
		self
	}

	#[must_use]
	/// # Maximum Key Column.
	pub const fn max_column(&self) -> usize { self.max_column }
}



/// # Usage.
///
/// A help-screen writer for a particular schema.
///
/// ## Examples
///
/// ```
/// use tartan::{Buffer, Field, Schema, Settings, Usage};
///
/// #[derive(Default)]
/// struct Config {
///     help: bool,
///     path: String,
/// }
///
/// let schema = Schema::new()
///     .with_fields([
///         Field::flag("help", tartan::lens!(Config, help))
///             .with_short('h')
///             .with_long("help")
///             .with_description("Display help."),
///         Field::parameter("path", tartan::lens!(Config, path))
///             .with_description("A path."),
///     ])
///     .unwrap();
///
/// let settings = Settings::default();
/// let usage = Usage::new(&schema, &settings);
/// assert_eq!(usage.synopsis("app", false), "Usage: app [-h | --help] <path>");
///
/// let mut buf = Buffer::new();
/// usage.write_usage(&mut buf, "app", &Config::default(), false);
/// assert!(buf.as_str().contains("  -h, --help  Display help.\n"));
/// ```
pub struct Usage<'a, C> {
	/// # Schema.
	schema: &'a Schema<C>,

	/// # Settings.
	settings: &'a Settings,
}

impl<C> fmt::Debug for Usage<'_, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Usage")
			.field("schema", self.schema)
			.field("settings", self.settings)
			.finish()
	}
}

impl<'a, C> Usage<'a, C> {
	#[must_use]
	/// # New.
	pub const fn new(schema: &'a Schema<C>, settings: &'a Settings) -> Self {
		Self { schema, settings }
	}

	#[must_use]
	/// # Synopsis.
	///
	/// Return the one-line `Usage: …` summary.
	///
	/// Small expandable sections of flags and parameters are spelled out
	/// member by member; everything else is collapsed into a `[name...]`
	/// placeholder.
	pub fn synopsis(&self, product: &str, show_hidden: bool) -> String {
		let mut out = String::with_capacity(64);
		out.push_str("Usage: ");
		out.push_str(product);

		for (section, fields) in self.groups(show_hidden) {
			let expand = section.is_expandable() &&
				fields.len() <= 3 &&
				fields.iter().all(|f| f.kind() != FieldKind::Option);

			if expand {
				for f in fields { self.push_inline_key(&mut out, f); }
			}
			else {
				out.push_str(" [");
				out.push_str(&section.name().to_lowercase());
				out.push_str("...]");
			}
		}

		out
	}

	/// # Write Usage.
	///
	/// Write the synopsis and field sections. Non-boolean fields with a
	/// value in `config` have it shown as their default; enum-like fields
	/// list their choices.
	pub fn write_usage<S: Sink + ?Sized>(
		&self,
		sink: &mut S,
		product: &str,
		config: &C,
		show_hidden: bool,
	) {
		sink.write_line("", None);
		sink.write_line(&self.synopsis(product, show_hidden), None);

		self.layout(show_hidden, |f| {
			let mut row = Row::new(String::new(), f.description());

			if let Some(names) = f.value_kind().choices() {
				row.push_line(format!("Values: {}.", names.join("|").to_lowercase()));
			}

			if ! matches!(f.value_kind(), ValueKind::Bool) {
				if let Some(v) = value_text(f, config).filter(|v| ! v.is_empty()) {
					row.push_line(format!("Default: {v}."));
				}
			}

			row
		})
			.render(sink, self.settings);
	}

	/// # Write Values.
	///
	/// Write each field's key alongside its current value in `config`, or
	/// `<null>` if it has none.
	pub fn write_values<S: Sink + ?Sized>(&self, sink: &mut S, config: &C, show_hidden: bool) {
		self.layout(show_hidden, |f| {
			let text = value_text(f, config);
			Row::new(String::new(), text.as_deref().unwrap_or("<null>"))
		})
			.render(sink, self.settings);
	}

	/// # Visible Groups.
	///
	/// Return the visible fields grouped by section, with both the groups
	/// and their members sorted by order.
	fn groups(&self, show_hidden: bool) -> Vec<(Section, Vec<&'a Field<C>>)> {
		let mut groups: Vec<(Section, Vec<&'a Field<C>>)> = Vec::new();
		for f in self.schema.fields().iter().filter(|f| show_hidden || ! f.is_hidden()) {
			let section = f.section();
			match groups.iter_mut().find(|(s, _)| *s == section) {
				Some((_, list)) => list.push(f),
				None => groups.push((section, vec![f])),
			}
		}

		groups.sort_by_key(|(s, _)| s.order());
		for (_, list) in &mut groups { list.sort_by_key(|f| f.order()); }
		groups
	}

	/// # Build Layout.
	///
	/// Measure the visible groups, using the callback for the description
	/// half of each row.
	fn layout<F>(&self, show_hidden: bool, mut cb: F) -> Layout
	where F: FnMut(&Field<C>) -> Row {
		let groups: Vec<(Section, Vec<Row>)> = self.groups(show_hidden)
			.into_iter()
			.map(|(section, fields)| {
				let aligned = fields.iter().any(|f| f.short().is_some());
				let rows: Vec<Row> = fields.into_iter()
					.map(|f| {
						let mut row = cb(f);
						row.key = self.section_key(f, aligned);
						row
					})
					.collect();
				(section, rows)
			})
			.collect();

		Layout::new(groups, self.settings)
	}

	/// # Section Key.
	///
	/// Return the key column text for a field, e.g. `  -f, --format <fmt>`.
	fn section_key(&self, field: &Field<C>, aligned: bool) -> String {
		let s = self.settings;
		let mut out = String::with_capacity(32);
		out.push_str(s.indent);

		if field.kind() == FieldKind::Parameter {
			push_placeholder(&mut out, field);
			return out;
		}

		if let Some(short) = field.short() {
			out.push_str(s.short_prefix);
			out.push(short);
			if field.long().is_some() { out.push_str(s.section_separator); }
		}
		else if aligned && s.align_long {
			let pad = s.short_prefix.chars().count() + 1 + s.section_separator.chars().count();
			out.extend(std::iter::repeat(' ').take(pad));
		}

		if let Some(long) = field.long() {
			out.push_str(s.long_prefix);
			out.push_str(long);
		}

		if field.kind() == FieldKind::Option {
			out.push_str(" <");
			out.push_str(field.value_name());
			out.push('>');
		}

		out
	}

	/// # Inline Key.
	///
	/// Push the synopsis form of a flag or parameter, e.g. ` [-h | --help]`.
	fn push_inline_key(&self, out: &mut String, field: &Field<C>) {
		out.push(' ');

		if field.kind() == FieldKind::Parameter {
			push_placeholder(out, field);
			return;
		}

		let s = self.settings;
		out.push('[');
		if let Some(short) = field.short() {
			out.push_str(s.short_prefix);
			out.push(short);
			if field.long().is_some() { out.push_str(s.inline_separator); }
		}
		if let Some(long) = field.long() {
			out.push_str(s.long_prefix);
			out.push_str(long);
		}
		out.push(']');
	}
}

/// # Parameter Placeholder.
///
/// Required parameters get `<name>`, optional ones `[name]`.
fn push_placeholder<C>(out: &mut String, field: &Field<C>) {
	let (open, close) = if field.is_required() { ('<', '>') } else { ('[', ']') };
	out.push(open);
	out.push_str(field.value_name());
	out.push(close);
}

/// # Value Text.
///
/// Return the field's current value for display. Everything but strings is
/// lowercased.
fn value_text<C>(field: &Field<C>, config: &C) -> Option<String> {
	let text = field.text(config)?;
	if matches!(field.value_kind(), ValueKind::String) { Some(text) }
	else { Some(text.to_lowercase()) }
}
