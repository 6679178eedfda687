/*!
# Tartan: Key Lookup
*/

use crate::{
	Prefix,
	SchemaError,
};
use std::collections::BTreeMap;



#[derive(Debug, Clone)]
/// # Key Lookup Tables.
///
/// Short keys are stored twice, as `-k` and `/k`; long keys likewise as
/// `--key` and `/key`. Values are field indices within the owning schema.
pub(crate) struct KeyLookup {
	/// # Short Keys.
	short: BTreeMap<String, usize>,

	/// # Long Keys.
	long: BTreeMap<String, usize>,
}

impl KeyLookup {
	/// # New.
	pub(crate) const fn new() -> Self {
		Self {
			short: BTreeMap::new(),
			long: BTreeMap::new(),
		}
	}

	/// # Add Short Key.
	///
	/// ## Errors
	///
	/// Returns an error if the key was already taken.
	pub(crate) fn insert_short(&mut self, key: char, idx: usize) -> Result<(), SchemaError> {
		let dash = format!("-{key}");
		if self.short.contains_key(&dash) {
			return Err(SchemaError::DuplicateKey(dash));
		}

		self.short.insert(format!("/{key}"), idx);
		self.short.insert(dash, idx);
		Ok(())
	}

	/// # Add Long Key.
	///
	/// ## Errors
	///
	/// Returns an error if the key was already taken.
	pub(crate) fn insert_long(&mut self, key: &str, idx: usize) -> Result<(), SchemaError> {
		let dash = format!("--{key}");
		if self.long.contains_key(&dash) {
			return Err(SchemaError::DuplicateKey(dash));
		}

		self.long.insert(format!("/{key}"), idx);
		self.long.insert(dash, idx);
		Ok(())
	}

	/// # Resolve.
	///
	/// Find the field index for a prefix/name pair. Dashes check their own
	/// table; slashes try long keys before short ones.
	pub(crate) fn resolve(&self, prefix: Prefix, name: &str) -> Option<usize> {
		let mut needle = String::with_capacity(name.len() + 2);
		needle.push_str(prefix.as_str());
		needle.push_str(name);

		let found = match prefix {
			Prefix::Short => self.short.get(&needle),
			Prefix::Long => self.long.get(&needle),
			Prefix::Slash => self.long.get(&needle).or_else(|| self.short.get(&needle)),
		};
		found.copied()
	}
}
