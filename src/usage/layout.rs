/*!
# Tartan: Usage Layout

Help text is laid out in two passes. The first measures every key column
string across all groups to find the shared description column (capped);
the second writes the groups out, padding keys to that column.

Keys too wide for the cap get a line to themselves, with the description
starting on the next line. Multi-line descriptions are re-indented to the
column on every line, and followed by a blank line so entries don't run
together.
*/

use crate::{
	Section,
	Sink,
	Style,
};
use super::Settings;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Row.
pub(super) struct Row {
	/// # Key Column Text.
	pub(super) key: String,

	/// # Description Lines.
	pub(super) lines: Vec<String>,
}

impl Row {
	/// # New.
	///
	/// Carriage returns are dropped and line feeds split the text into
	/// separate lines.
	pub(super) fn new(key: String, text: &str) -> Self {
		let lines = text.split('\n')
			.map(|line| line.trim_end_matches('\r').to_owned())
			.collect();
		Self { key, lines }
	}

	/// # Add a Line.
	pub(super) fn push_line(&mut self, line: String) {
		// An empty description shouldn't leave a gap before the extras.
		if self.lines.len() == 1 && self.lines[0].is_empty() { self.lines[0] = line; }
		else { self.lines.push(line); }
	}

	/// # Key Width (Chars).
	fn width(&self) -> usize { self.key.chars().count() }
}



#[derive(Debug, Clone)]
/// # Layout.
pub(super) struct Layout {
	/// # Groups.
	groups: Vec<(Section, Vec<Row>)>,

	/// # Key Column Width (Without the Gap).
	column: usize,
}

impl Layout {
	/// # Measure.
	///
	/// The key column is as wide as the widest key, but no wider than the
	/// configured maximum (less the gap).
	pub(super) fn new(groups: Vec<(Section, Vec<Row>)>, settings: &Settings) -> Self {
		let max = settings.max_column.saturating_sub(settings.gap.chars().count());
		let widest = groups.iter()
			.flat_map(|(_, rows)| rows.iter().map(Row::width))
			.max()
			.unwrap_or(0);

		Self {
			groups,
			column: usize::min(widest, max),
		}
	}

	#[cfg(test)]
	/// # Column.
	pub(super) const fn column(&self) -> usize { self.column }

	/// # Render.
	pub(super) fn render<S: Sink + ?Sized>(&self, sink: &mut S, settings: &Settings) {
		let indent = " ".repeat(self.column + settings.gap.chars().count());

		for (section, rows) in &self.groups {
			sink.section_header(section.name());

			let mut spaced = false;
			for row in rows {
				if spaced { sink.write_line("", None); }

				let width = row.width();
				let crossed = self.column < width;
				if crossed {
					sink.write_line(&row.key, None);
					sink.write(&indent, None);
				}
				else {
					sink.write(&row.key, None);
					sink.write(&indent[width..], None);
				}

				for (idx, line) in row.lines.iter().enumerate() {
					if idx != 0 { sink.write(&indent, None); }
					sink.write_line(line, description_style(line));
				}

				spaced = crossed || 1 < row.lines.len();
			}
		}
	}
}

/// # Line Style.
///
/// The "Values" and "Default" extras are muted.
fn description_style(line: &str) -> Option<Style> {
	if line.starts_with("Values: ") || line.starts_with("Default: ") { Some(Style::Muted) }
	else { None }
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Buffer;

	#[test]
	fn t_row() {
		let mut row = Row::new("  -a".to_owned(), "One.\r\nTwo.");
		assert_eq!(row.lines, ["One.", "Two."]);
		row.push_line("Three.".to_owned());
		assert_eq!(row.lines.len(), 3);

		let mut row = Row::new("  -a".to_owned(), "");
		row.push_line("Default: 1.".to_owned());
		assert_eq!(row.lines, ["Default: 1."]);
	}

	#[test]
	fn t_render() {
		let settings = Settings::default().with_max_column(12);
		let layout = Layout::new(
			vec![
				(Section::FLAGS, vec![
					Row::new("  -a".to_owned(), "Alpha."),
					Row::new("  -b, --bravo".to_owned(), "Bravo."),
					Row::new("  -c".to_owned(), "Charlie.\nMore."),
					Row::new("  -d".to_owned(), "Delta."),
				]),
			],
			&settings,
		);

		// Capped at 12 - 2.
		assert_eq!(layout.column(), 10);

		let mut buf = Buffer::new();
		layout.render(&mut buf, &settings);

		let expected = [
			"",
			"Flags:",
			"",
			"  -a        Alpha.",
			"  -b, --bravo",
			"            Bravo.",
			"",
			"  -c        Charlie.",
			"            More.",
			"",
			"  -d        Delta.",
			"",
		].join("\n");
		assert_eq!(buf.as_str(), expected);
	}
}
