//! Operator dispatch.

use tracing::debug;

use trademap_model::{Record, TransformationRule, Value};

use crate::{boolean, datetime, lookup, numeric, text};

/// Apply one transformation rule to a value.
///
/// `record` is the full input record, read by operators that combine fields. The result
/// is never an error: an operator that cannot act (wrong input type, bad parameters,
/// parse failure, unknown `type`) yields the original value.
pub fn apply(value: &Value, rule: &TransformationRule, record: &Record) -> Value {
    match evaluate(value, rule, record) {
        Some(result) => result,
        None => {
            debug!(
                operator = rule.type_name(),
                value_type = value.type_name(),
                "transformation passed value through unchanged"
            );
            value.clone()
        }
    }
}

/// `None` is the pass-through branch.
fn evaluate(value: &Value, rule: &TransformationRule, record: &Record) -> Option<Value> {
    match rule {
        TransformationRule::Direct => Some(value.clone()),
        TransformationRule::Left(params) => text::left(value.as_str()?, params.count),
        TransformationRule::Right(params) => text::right(value.as_str()?, params.count),
        TransformationRule::Substring(params) => text::substring(value.as_str()?, params),
        TransformationRule::Replace(params) => text::replace(value.as_str()?, params),
        TransformationRule::Case(params) => text::change_case(value.as_str()?, params),
        TransformationRule::Regex(params) => text::extract(value.as_str()?, params),
        TransformationRule::Split(params) => text::split(value.as_str()?, params),
        TransformationRule::Concat(params) => Some(lookup::concat(value, params, record)),
        TransformationRule::FormatDate(params) => datetime::format_date(value, params),
        TransformationRule::NumericFormat(params) => numeric::round(value, params),
        TransformationRule::BooleanConvert(params) => Some(boolean::convert(value, params)),
        TransformationRule::EnumMap(params) => lookup::enum_map(value, params),
        TransformationRule::Malformed { kind, reason, .. } => {
            debug!(operator = %kind, %reason, "transformation params did not parse");
            None
        }
        TransformationRule::Unrecognized { type_name, .. } => {
            debug!(operator = %type_name, "unrecognized transformation type");
            None
        }
    }
}
