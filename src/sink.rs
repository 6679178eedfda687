/*!
# Tartan: Text Sinks

Help screens, errors, and value listings are written to a [`Sink`] rather
than straight to the terminal. [`Console`] is the stdout implementation;
[`Buffer`] collects everything in memory.
*/

use owo_colors::{
	OwoColorize,
	Stream,
};
use std::io::Write;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Text Style.
pub enum Style {
	/// # Titles (Bold).
	Title,

	/// # Descriptions (Yellow).
	Accent,

	/// # Errors (Bold Red).
	Error,

	/// # De-Emphasized (Dim).
	Muted,
}

impl Style {
	/// # As Terminal Style.
	fn as_owo(self) -> owo_colors::Style {
		match self {
			Self::Title => owo_colors::Style::new().bold(),
			Self::Accent => owo_colors::Style::new().yellow(),
			Self::Error => owo_colors::Style::new().bold().red(),
			Self::Muted => owo_colors::Style::new().dimmed(),
		}
	}
}



/// # Text Sink.
pub trait Sink {
	/// # Write.
	fn write(&mut self, text: &str, style: Option<Style>);

	/// # Write Line.
	fn write_line(&mut self, text: &str, style: Option<Style>) {
		self.write(text, style);
		self.write("\n", None);
	}

	/// # Section Header.
	///
	/// By default, this writes a blank line, `{name}:`, and another blank
	/// line.
	fn section_header(&mut self, name: &str) {
		self.write_line("", None);
		self.write(name, Some(Style::Title));
		self.write_line(":", Some(Style::Title));
		self.write_line("", None);
	}
}

impl<S: Sink + ?Sized> Sink for &mut S {
	#[inline]
	fn write(&mut self, text: &str, style: Option<Style>) { (**self).write(text, style); }

	#[inline]
	fn write_line(&mut self, text: &str, style: Option<Style>) {
		(**self).write_line(text, style);
	}

	#[inline]
	fn section_header(&mut self, name: &str) { (**self).section_header(name); }
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Buffer.
///
/// An in-memory sink. Styles are dropped.
///
/// ## Examples
///
/// ```
/// use tartan::{Buffer, Sink, Style};
///
/// let mut buf = Buffer::new();
/// buf.write("Hello", Some(Style::Title));
/// buf.write_line(" World", None);
/// assert_eq!(buf.as_str(), "Hello World\n");
/// ```
pub struct Buffer(String);

impl Sink for Buffer {
	#[inline]
	fn write(&mut self, text: &str, _style: Option<Style>) { self.0.push_str(text); }
}

impl Buffer {
	#[must_use]
	/// # New.
	pub const fn new() -> Self { Self(String::new()) }

	#[must_use]
	/// # As String Slice.
	pub fn as_str(&self) -> &str { self.0.as_str() }

	#[must_use]
	/// # Into String.
	pub fn into_string(self) -> String { self.0 }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// # Clear.
	pub fn clear(&mut self) { self.0.clear(); }
}



#[derive(Debug, Clone, Copy, Default)]
/// # Console.
///
/// A sink for `stdout`. Styles are applied only when the stream supports
/// color, and every styled span carries its own reset.
///
/// Write errors (a closed pipe, for example) are ignored.
pub struct Console;

impl Sink for Console {
	fn write(&mut self, text: &str, style: Option<Style>) {
		let mut out = std::io::stdout().lock();
		let _res = match style {
			Some(s) => write!(
				out,
				"{}",
				text.if_supports_color(Stream::Stdout, |t| t.style(s.as_owo())),
			),
			None => out.write_all(text.as_bytes()),
		};
	}

	fn write_line(&mut self, text: &str, style: Option<Style>) {
		self.write(text, style);
		let mut out = std::io::stdout().lock();
		let _res = out.write_all(b"\n").and_then(|()| out.flush());
	}
}
