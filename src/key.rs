/*!
# Tartan: Keys

This module handles both sides of a key: splitting raw CLI tokens into
prefix/name/value parts during parsing, and validating the keys a schema
declares.
*/

use crate::ParseError;
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Key Prefix.
pub enum Prefix {
	/// # `-` (short keys only).
	Short,

	/// # `--` (long keys only).
	Long,

	/// # `/` (long keys, then short keys).
	Slash,
}

impl fmt::Display for Prefix {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Prefix {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Short => "-",
			Self::Long => "--",
			Self::Slash => "/",
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Key Token.
///
/// A raw argument that looks like a key, split into its parts.
///
/// The longest matching prefix wins (`--`, then `-`, then `/`) and the
/// name runs up to the first `:` or `=`. Everything after that separator is
/// the inline value.
///
/// Note that a missing inline value and an empty one are different things:
/// `-f` has no value (the parser will look at the next token), whereas
/// `-f=` has an empty one.
///
/// ## Examples
///
/// ```
/// use tartan::{KeyToken, Prefix};
///
/// let key = KeyToken::parse("--format=%Y").unwrap().unwrap();
/// assert_eq!(key.prefix, Prefix::Long);
/// assert_eq!(key.name, "format");
/// assert_eq!(key.value, Some("%Y"));
///
/// // Not a key at all.
/// assert!(KeyToken::parse("hello").unwrap().is_none());
///
/// // Key-like, but broken.
/// assert!(KeyToken::parse("-").is_err());
/// ```
pub struct KeyToken<'a> {
	/// # Prefix.
	pub prefix: Prefix,

	/// # Name.
	pub name: &'a str,

	/// # Inline Value.
	pub value: Option<&'a str>,
}

impl fmt::Display for KeyToken<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.prefix.as_str())?;
		f.write_str(self.name)
	}
}

impl<'a> KeyToken<'a> {
	/// # Parse.
	///
	/// Split a raw token into a key, returning `None` if it doesn't start
	/// with a key prefix (i.e. it is a positional value).
	///
	/// ## Errors
	///
	/// If the token has a prefix but no name, an
	/// [`ParseError::InvalidKeyToken`] is returned.
	pub fn parse(raw: &'a str) -> Result<Option<Self>, ParseError> {
		let (prefix, rest) =
			if let Some(rest) = raw.strip_prefix("--") { (Prefix::Long, rest) }
			else if let Some(rest) = raw.strip_prefix('-') { (Prefix::Short, rest) }
			else if let Some(rest) = raw.strip_prefix('/') { (Prefix::Slash, rest) }
			else { return Ok(None); };

		// Both separators are ASCII, so idx + 1 is still a char boundary.
		let (name, value) = match rest.find(|c: char| matches!(c, ':' | '=')) {
			Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
			None => (rest, None),
		};

		if name.is_empty() { Err(ParseError::InvalidKeyToken(raw.to_owned())) }
		else { Ok(Some(Self { prefix, name, value })) }
	}
}



/// # Valid Short Key?
///
/// Short keys are a single ASCII alphanumeric character.
pub(crate) const fn valid_short(key: char) -> bool { key.is_ascii_alphanumeric() }

/// # Valid Long Key?
///
/// Long keys must start with an ASCII alphanumeric; anything after that may
/// also be `-` or `_`.
pub(crate) const fn valid_long(key: &str) -> bool {
	match key.as_bytes() {
		[b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] => valid_suffix(rest),
		_ => false,
	}
}

/// # Valid Key Suffix?
const fn valid_suffix(mut bytes: &[u8]) -> bool {
	while let [b'-' | b'_' | b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes {
		bytes = rest;
	}

	// By process of elimination, everything validated!
	bytes.is_empty()
}
