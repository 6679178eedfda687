/*!
# Tartan: Validation
*/

use crate::{
	FieldKind,
	ParseError,
	Schema,
};



/// # Check Required Fields.
///
/// Walk the options and parameters in declaration order and report the
/// first required one still holding its type's zero/null/default value.
///
/// Flags are skipped. Note that a required `bool` option set to `false` is
/// indistinguishable from one that was never given.
pub(crate) fn required<C>(schema: &Schema<C>, config: &C) -> Result<(), ParseError> {
	match schema.fields().iter().find(|f|
		f.kind() != FieldKind::Flag && f.is_required() && f.is_unset(config)
	) {
		Some(f) => Err(ParseError::MissingRequiredField {
			kind: f.kind(),
			name: f.name(),
		}),
		None => Ok(()),
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Field;

	#[derive(Debug, Default)]
	struct Config {
		flag: bool,
		opt: Option<u8>,
		count: u32,
		param: String,
	}

	/// # Schema.
	fn schema() -> Schema<Config> {
		Schema::new()
			.with_fields([
				Field::flag("flag", crate::lens!(Config, flag)).with_short('f'),
				Field::option("opt", crate::lens!(Config, opt)).with_short('o'),
				Field::option("count", crate::lens!(Config, count))
					.with_short('c')
					.with_required(false),
				Field::parameter("param", crate::lens!(Config, param)),
			])
			.expect("Schema failed.")
	}

	#[test]
	fn t_required() {
		let schema = schema();
		let mut config = Config::default();

		// The first offender, by declaration.
		let err = required(&schema, &config).expect_err("Nothing is set.");
		assert_eq!(err.to_string(), "Value for option 'opt' is required.");

		// Zero is a value for an Option<u8>.
		config.opt = Some(0);
		let err = required(&schema, &config).expect_err("Param is not set.");
		assert_eq!(err.to_string(), "Value for parameter 'param' is required.");

		// Count is optional; flags never count.
		config.param.push_str("hello");
		assert!(required(&schema, &config).is_ok());
	}
}
