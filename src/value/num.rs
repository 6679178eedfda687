/*!
# Tartan: Numeric Conversion
*/

use crate::ConvertError;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Integer Width.
pub enum Width {
	/// # 8 bits.
	W8,

	/// # 16 bits.
	W16,

	/// # 32 bits.
	W32,

	/// # 64 bits.
	W64,
}

impl Width {
	#[must_use]
	/// # Bits.
	pub const fn bits(self) -> u32 {
		match self {
			Self::W8 => 8,
			Self::W16 => 16,
			Self::W32 => 32,
			Self::W64 => 64,
		}
	}

	/// # Signed Range.
	const fn signed(self) -> (i128, i128) {
		match self {
			Self::W8 => (i8::MIN as i128, i8::MAX as i128),
			Self::W16 => (i16::MIN as i128, i16::MAX as i128),
			Self::W32 => (i32::MIN as i128, i32::MAX as i128),
			Self::W64 => (i64::MIN as i128, i64::MAX as i128),
		}
	}

	/// # Unsigned Range.
	const fn unsigned(self) -> (i128, i128) {
		match self {
			Self::W8 => (0, u8::MAX as i128),
			Self::W16 => (0, u16::MAX as i128),
			Self::W32 => (0, u32::MAX as i128),
			Self::W64 => (0, u64::MAX as i128),
		}
	}
}



/// # Parse Signed.
pub(super) fn signed(raw: &str, width: Width) -> Result<i64, ConvertError> {
	let (min, max) = width.signed();
	let num = ranged(raw, min, max)?;
	i64::try_from(num).map_err(|_| ConvertError::Range { min, max })
}

/// # Parse Unsigned.
pub(super) fn unsigned(raw: &str, width: Width) -> Result<u64, ConvertError> {
	let (min, max) = width.unsigned();
	let num = ranged(raw, min, max)?;
	u64::try_from(num).map_err(|_| ConvertError::Range { min, max })
}

/// # Parse and Range-Check.
///
/// Surrounding whitespace is ignored. The literal may carry one leading `+`
/// or `-`, and a `0x` prefix switches to hexadecimal.
fn ranged(raw: &str, min: i128, max: i128) -> Result<i128, ConvertError> {
	let src = raw.trim();
	let (neg, src) =
		if let Some(rest) = src.strip_prefix('-') { (true, rest) }
		else { (false, src.strip_prefix('+').unwrap_or(src)) };

	let (radix, digits) = src.strip_prefix("0x")
		.or_else(|| src.strip_prefix("0X"))
		.map_or((10, src), |rest| (16, rest));

	// The std parser would happily take a second sign.
	if matches!(digits.as_bytes().first(), Some(b'+' | b'-')) {
		return Err(ConvertError::Sign);
	}

	let mut num = i128::from_str_radix(digits, radix)?;
	if neg { num = -num; }

	if (min..=max).contains(&num) { Ok(num) }
	else { Err(ConvertError::Range { min, max }) }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_unsigned() {
		for (raw, expected) in [
			("10", 10),
			("+3", 3),
			("0x4", 4),
			("0XfF", 255),
			("  +12 ", 12),
			("-0", 0),
		] {
			assert_eq!(
				unsigned(raw, Width::W8).ok(),
				Some(expected),
				"Failed to parse {raw:?} as u8.",
			);
		}

		for raw in ["257", "-4", "0x100", "", "+", "0x", "+-3", "1.0", "ten"] {
			assert!(unsigned(raw, Width::W8).is_err(), "{raw:?} should not be a u8.");
		}

		assert_eq!(unsigned("18446744073709551615", Width::W64).ok(), Some(u64::MAX));
		assert!(unsigned("18446744073709551616", Width::W64).is_err());
	}

	#[test]
	fn t_signed() {
		for (raw, expected) in [
			("10", 10),
			("+3", 3),
			("-3", -3),
			("0x4", 4),
			("-0x10", -16),
			("  +12 ", 12),
		] {
			assert_eq!(
				signed(raw, Width::W32).ok(),
				Some(expected),
				"Failed to parse {raw:?} as i32.",
			);
		}

		assert!(matches!(
			signed("12333333333", Width::W32),
			Err(ConvertError::Range { .. }),
		));
		assert!(signed("-11111111111", Width::W32).is_err());
		assert!(signed("--1", Width::W32).is_err());
		assert_eq!(signed("-128", Width::W8).ok(), Some(-128));
		assert!(signed("128", Width::W8).is_err());
		assert_eq!(signed("-9223372036854775808", Width::W64).ok(), Some(i64::MIN));
	}
}
