/*!
# Tartan: Parser

The parser walks the (non-empty) arguments left to right exactly once:

* A standalone `--` switches key recognition off for good;
* Key-like tokens are split, resolved, and bound to their flag or option;
* Everything else binds to the next parameter in line;

Options without an inline value take the following token as-is, even if it
looks like a key (or is `--`).

A breaker flag ends the run on the spot, skipping whatever arguments remain
as well as the required-field checks. An empty argument list is treated the
same way.
*/

use crate::{
	FieldKind,
	KeyToken,
	ParseError,
	Schema,
	validate,
};
use tracing::{
	debug,
	trace,
};



#[derive(Debug)]
/// # Parse Outcome.
///
/// Every variant carries the configuration, including [`Outcome::Error`],
/// where it holds whatever was bound before things went wrong.
pub enum Outcome<C> {
	/// # Parsed and Validated.
	Success(C),

	/// # Breaked.
	///
	/// A breaker flag was given (or there were no arguments at all).
	Help(C),

	/// # Error.
	Error(C, ParseError),
}

impl<C> Outcome<C> {
	#[must_use]
	/// # Configuration.
	pub const fn config(&self) -> &C {
		match self {
			Self::Success(c) | Self::Help(c) | Self::Error(c, _) => c,
		}
	}

	#[must_use]
	/// # Into Configuration.
	pub fn into_config(self) -> C {
		match self {
			Self::Success(c) | Self::Help(c) | Self::Error(c, _) => c,
		}
	}

	#[must_use]
	/// # Error.
	pub const fn error(&self) -> Option<&ParseError> {
		if let Self::Error(_, e) = self { Some(e) }
		else { None }
	}

	#[must_use]
	/// # Success?
	pub const fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }

	#[must_use]
	/// # Help?
	pub const fn is_help(&self) -> bool { matches!(self, Self::Help(_)) }

	#[must_use]
	/// # Error?
	pub const fn is_error(&self) -> bool { matches!(self, Self::Error(..)) }
}



/// # Cursor.
///
/// A read position over the (immutable) argument list.
struct Cursor<'a> {
	/// # Tokens.
	tokens: &'a [&'a str],

	/// # Position.
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// # New.
	const fn new(tokens: &'a [&'a str]) -> Self { Self { tokens, pos: 0 } }

	/// # Advance.
	fn advance(&mut self) -> Option<&'a str> {
		let next = self.tokens.get(self.pos).copied()?;
		self.pos += 1;
		Some(next)
	}

	/// # Tokens Remaining.
	const fn remaining(&self) -> usize { self.tokens.len().saturating_sub(self.pos) }
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # How the Loop Ended.
enum Flow {
	/// # Ran Out of Tokens.
	Done,

	/// # Hit a Breaker.
	Breaked,
}



impl<C: Default> Schema<C> {
	/// # Parse.
	///
	/// Parse the arguments into a fresh `C::default()`.
	///
	/// Empty strings are ignored. If nothing is left after that, the result
	/// is [`Outcome::Help`].
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::{ErrorKind, Field, Schema};
	///
	/// #[derive(Default)]
	/// struct Config {
	///     size: u8,
	/// }
	///
	/// let schema = Schema::new()
	///     .with_field(Field::parameter("size", tartan::lens!(Config, size)))
	///     .unwrap();
	///
	/// assert_eq!(schema.parse(["0x10"]).config().size, 16);
	/// assert!(schema.parse(Vec::<String>::new()).is_help());
	///
	/// let out = schema.parse(["257"]);
	/// assert_eq!(out.error().map(|e| e.kind()), Some(ErrorKind::Conversion));
	/// ```
	pub fn parse<I, S>(&self, args: I) -> Outcome<C>
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		self.parse_into(C::default(), args)
	}
}

impl<C> Schema<C> {
	/// # Parse Into.
	///
	/// Same as [`Schema::parse`], but starting from the configuration you
	/// pass in rather than `C::default()`.
	pub fn parse_into<I, S>(&self, mut config: C, args: I) -> Outcome<C>
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let args: Vec<S> = args.into_iter()
			.filter(|a| ! a.as_ref().is_empty())
			.collect();
		let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

		let res = self.run(&mut config, &tokens).and_then(|flow| match flow {
			Flow::Breaked => Ok(flow),
			Flow::Done => validate::required(self, &config).map(|()| flow),
		});

		match res {
			Ok(Flow::Done) => {
				debug!("Arguments parsed.");
				Outcome::Success(config)
			},
			Ok(Flow::Breaked) => {
				debug!("Arguments breaked.");
				Outcome::Help(config)
			},
			Err(e) => {
				debug!(error = %e, "Arguments failed.");
				Outcome::Error(config, e)
			},
		}
	}

	/// # Run.
	///
	/// Consume the tokens, binding values as we go.
	fn run(&self, config: &mut C, tokens: &[&str]) -> Result<Flow, ParseError> {
		if tokens.is_empty() { return Ok(Flow::Breaked); }

		let mut cursor = Cursor::new(tokens);
		let mut keys = true;
		let mut param = 0;

		while let Some(raw) = cursor.advance() {
			trace!(token = raw, keys, "Next token.");

			if keys {
				if raw == "--" {
					debug!("Key parsing disabled.");
					keys = false;
					continue;
				}

				if let Some(key) = KeyToken::parse(raw)? {
					let field = self.resolve(key.prefix, key.name)
						.ok_or_else(|| ParseError::UnknownKey(raw.to_owned()))?;

					match field.kind() {
						FieldKind::Flag => {
							if key.value.is_some() {
								return Err(ParseError::InvalidKeyToken(raw.to_owned()));
							}

							field.set_flag(config)?;
							debug!(field = field.name(), "Flag set.");

							if field.is_breaker() {
								debug!(
									field = field.name(),
									skipped = cursor.remaining(),
									"Breaker flag."
								);
								return Ok(Flow::Breaked);
							}
						},
						FieldKind::Option => {
							let value = match key.value {
								Some(v) => v,
								None => cursor.advance().unwrap_or_default(),
							};
							if value.is_empty() {
								return Err(ParseError::MissingOptionValue(key.to_string()));
							}

							field.set(config, value)?;
							debug!(field = field.name(), value, "Option set.");
						},
						// Parameters have no keys.
						FieldKind::Parameter => return Err(ParseError::UnknownKey(raw.to_owned())),
					}

					continue;
				}
			}

			let field = self.parameter(param)
				.ok_or_else(|| ParseError::UnexpectedParameter(raw.to_owned()))?;
			field.set(config, raw)?;
			debug!(field = field.name(), value = raw, "Parameter set.");
			param += 1;
		}

		Ok(Flow::Done)
	}
}
