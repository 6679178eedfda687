/*!
# Tartan: Structured Converters

These are the stock [`Converter`](super::Converter)s for value kinds that
are more than a plain literal.
*/

use chrono::{
	Local,
	NaiveDate,
	NaiveDateTime,
	NaiveTime,
};
use crate::{
	ConvertError,
	Value,
};
use uuid::Uuid;



/// # Date/Time Formats.
const DATETIME: [&str; 6] = [
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%d %H:%M",
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%dT%H:%M",
	"%m/%d/%Y %H:%M:%S",
	"%m/%d/%Y %H:%M",
];

/// # Date-Only Formats.
const DATE: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// # Time-Only Formats.
const TIME: [&str; 2] = ["%H:%M:%S", "%H:%M"];



/// # Character.
pub(super) fn char(raw: &str) -> Result<Value, ConvertError> {
	let mut chars = raw.trim().chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => Ok(Value::Char(c)),
		_ => Err(ConvertError::Char),
	}
}

/// # Guid.
///
/// Anything `uuid` understands is accepted, as is the hex-field layout
/// `{0x00000000,0x0000,0x0000,{0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00}}`.
pub(super) fn guid(raw: &str) -> Result<Value, ConvertError> {
	let src = raw.trim();
	match Uuid::parse_str(src) {
		Ok(g) => Ok(Value::Guid(g)),
		Err(e) => guid_fields(src).map(Value::Guid).ok_or_else(|| ConvertError::from(e)),
	}
}

/// # Guid (Hex Fields).
fn guid_fields(src: &str) -> Option<Uuid> {
	/// # Hex Part.
	fn hex(part: &str) -> Option<u64> {
		let part = part.trim();
		let digits = part.strip_prefix("0x").or_else(|| part.strip_prefix("0X"))?;
		if digits.is_empty() || ! digits.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		u64::from_str_radix(digits, 16).ok()
	}

	let inner = src.strip_prefix('{')?.strip_suffix('}')?.trim_end();
	let (head, tail) = inner.split_once('{')?;
	let tail = tail.strip_suffix('}')?;

	let mut head = head.trim_end().strip_suffix(',')?.split(',');
	let d1 = u32::try_from(hex(head.next()?)?).ok()?;
	let d2 = u16::try_from(hex(head.next()?)?).ok()?;
	let d3 = u16::try_from(hex(head.next()?)?).ok()?;
	if head.next().is_some() { return None; }

	let mut d4 = [0_u8; 8];
	let mut tail = tail.split(',');
	for b in &mut d4 {
		*b = u8::try_from(hex(tail.next()?)?).ok()?;
	}
	if tail.next().is_some() { return None; }

	Some(Uuid::from_fields(d1, d2, d3, &d4))
}

/// # Date/Time.
///
/// Full date/times are tried first, then dates (at midnight), then times
/// (on today's local date). The error from the first full format is what
/// gets reported if nothing matches.
pub(super) fn datetime(raw: &str) -> Result<Value, ConvertError> {
	let src = raw.trim();

	let first = match NaiveDateTime::parse_from_str(src, DATETIME[0]) {
		Ok(dt) => return Ok(Value::DateTime(dt)),
		Err(e) => e,
	};

	for fmt in &DATETIME[1..] {
		if let Ok(dt) = NaiveDateTime::parse_from_str(src, fmt) {
			return Ok(Value::DateTime(dt));
		}
	}

	for fmt in DATE {
		if let Ok(d) = NaiveDate::parse_from_str(src, fmt) {
			return Ok(Value::DateTime(d.and_time(NaiveTime::MIN)));
		}
	}

	for fmt in TIME {
		if let Ok(t) = NaiveTime::parse_from_str(src, fmt) {
			return Ok(Value::DateTime(Local::now().date_naive().and_time(t)));
		}
	}

	Err(ConvertError::DateTime(first))
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_char() {
		assert!(matches!(char("a"), Ok(Value::Char('a'))));
		assert!(matches!(char("  a "), Ok(Value::Char('a'))));
		assert!(matches!(char("ö"), Ok(Value::Char('ö'))));
		assert!(char("").is_err());
		assert!(char("ab").is_err());
	}

	#[test]
	fn t_guid() {
		let expected = Uuid::parse_str("81a130d2-502f-4cf1-a376-63edeb000e9f")
			.expect("Uuid failed.");

		for raw in [
			"81a130d2-502f-4cf1-a376-63edeb000e9f",
			"{81a130d2-502f-4cf1-a376-63edeb000e9f}",
			"81a130d2502f4cf1a37663edeb000e9f",
			" 81A130D2-502F-4CF1-A376-63EDEB000E9F ",
		] {
			assert!(
				matches!(guid(raw), Ok(Value::Guid(g)) if g == expected),
				"Failed to parse {raw:?} as a guid.",
			);
		}

		// Hex fields.
		for raw in [
			"{0x81a130d2,0x502f,0x4cf1,{0xa3,0x76,0x63,0xed,0xeb,0x00,0x0e,0x9f}}",
			" {0x81A130D2, 0x502F, 0x4CF1, {0xA3, 0x76, 0x63, 0xED, 0xEB, 0x0, 0xE, 0x9F}} ",
		] {
			assert!(
				matches!(guid(raw), Ok(Value::Guid(g)) if g == expected),
				"Failed to parse {raw:?} as a guid.",
			);
		}

		for raw in [
			"81a130d2",
			"{0x81a130d2,0x502f,0x4cf1,{0xa3,0x76,0x63,0xed,0xeb,0x00,0x0e}}",
			"{0x81a130d2,0x502f,0x4cf1,{0xa3,0x76,0x63,0xed,0xeb,0x00,0x0e,0x9f,0x00}}",
			"{0x81a130d2,0x502f,0x4cf1,{0xa3,0x76,0x63,0xed,0xeb,0x00,0x0e,0x19f}}",
			"{0x81a130d2,0x502f,0x4cf1,0x1,{0xa3,0x76,0x63,0xed,0xeb,0x00,0x0e,0x9f}}",
			"{81a130d2,502f,4cf1,{a3,76,63,ed,eb,00,0e,9f}}",
		] {
			assert!(guid(raw).is_err(), "Guid {raw:?} should have failed.");
		}
	}

	#[test]
	fn t_datetime() {
		let expected = NaiveDate::from_ymd_opt(1975, 12, 1)
			.and_then(|d| d.and_hms_opt(15, 3, 0))
			.expect("Date failed.");

		for raw in [
			"1975-12-01 15:03",
			"1975-12-01T15:03",
			"1975-12-01 15:03:00",
			"12/1/1975 15:03",
		] {
			assert!(
				matches!(datetime(raw), Ok(Value::DateTime(dt)) if dt == expected),
				"Failed to parse {raw:?} as a datetime.",
			);
		}

		let midnight = NaiveDate::from_ymd_opt(1975, 12, 1)
			.map(|d| d.and_time(NaiveTime::MIN))
			.expect("Date failed.");
		assert!(matches!(datetime("1975-12-01"), Ok(Value::DateTime(dt)) if dt == midnight));

		let time = NaiveTime::from_hms_opt(15, 3, 0).expect("Time failed.");
		assert!(matches!(datetime("15:03"), Ok(Value::DateTime(dt)) if dt.time() == time));

		assert!(matches!(datetime("yesterday"), Err(ConvertError::DateTime(_))));
	}
}
