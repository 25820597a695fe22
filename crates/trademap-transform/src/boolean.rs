//! Boolean conversion.

use trademap_model::{BooleanConvertParams, Value};

/// Map a value onto a boolean.
///
/// Text and numbers are compared case-insensitively against the configured vocabularies.
/// Anything outside both lists falls back to [`truthy`].
pub fn convert(value: &Value, params: &BooleanConvertParams) -> Value {
    if let Value::Boolean(flag) = value {
        return Value::Boolean(*flag);
    }
    if let Some(key) = vocabulary_key(value) {
        if contains_ignore_case(&params.true_values, &key) {
            return Value::Boolean(true);
        }
        if contains_ignore_case(&params.false_values, &key) {
            return Value::Boolean(false);
        }
    }
    Value::Boolean(truthy(value))
}

/// Generic truthiness: non-empty text, non-zero numbers and any date are true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Boolean(flag) => *flag,
        Value::Integer(number) => *number != 0,
        Value::Decimal(number) => *number != 0.0,
        Value::String(text) => !text.is_empty(),
        Value::DateTime(_) => true,
    }
}

fn vocabulary_key(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Integer(_) | Value::Decimal(_) => value.to_text(),
        _ => None,
    }
}

fn contains_ignore_case(list: &[String], key: &str) -> bool {
    list.iter()
        .any(|candidate| candidate.trim().to_lowercase() == key.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary() {
        let params = BooleanConvertParams::default();
        for yes in ["true", "YES", " y ", "T", "1"] {
            assert_eq!(convert(&Value::from(yes), &params), Value::Boolean(true), "{yes}");
        }
        for no in ["False", "no", "N", "f", "0"] {
            assert_eq!(convert(&Value::from(no), &params), Value::Boolean(false), "{no}");
        }
        assert_eq!(convert(&Value::Integer(0), &params), Value::Boolean(false));
        assert_eq!(convert(&Value::Decimal(1.0), &params), Value::Boolean(true));
    }

    #[test]
    fn custom_vocabulary() {
        let params = BooleanConvertParams {
            true_values: vec!["Active".to_string()],
            false_values: vec!["Cancelled".to_string()],
        };
        assert_eq!(convert(&Value::from("ACTIVE"), &params), Value::Boolean(true));
        assert_eq!(
            convert(&Value::from("cancelled"), &params),
            Value::Boolean(false)
        );
    }

    #[test]
    fn falls_back_to_truthiness() {
        let params = BooleanConvertParams::default();
        assert_eq!(convert(&Value::from("maybe"), &params), Value::Boolean(true));
        assert_eq!(convert(&Value::from(""), &params), Value::Boolean(false));
        assert_eq!(convert(&Value::Integer(42), &params), Value::Boolean(true));
        assert_eq!(convert(&Value::Null, &params), Value::Boolean(false));
        assert_eq!(
            convert(&Value::Boolean(false), &params),
            Value::Boolean(false)
        );
    }
}
