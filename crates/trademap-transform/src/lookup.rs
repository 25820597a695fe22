//! Operators that read beyond the value itself.

use trademap_model::{ConcatParams, EnumMapParams, Record, Value};

/// Join the named record fields and then the current value.
///
/// Missing or null fields contribute nothing; empty pieces are skipped so separators do
/// not double up.
pub fn concat(value: &Value, params: &ConcatParams, record: &Record) -> Value {
    let pieces: Vec<String> = params
        .fields
        .iter()
        .map(|field| record.get(field).and_then(Value::to_text))
        .chain(std::iter::once(value.to_text()))
        .flatten()
        .filter(|piece| !piece.is_empty())
        .collect();
    Value::String(pieces.join(&params.separator))
}

/// Table lookup keyed by the value's text. Only strings, integers and booleans are keys.
pub fn enum_map(value: &Value, params: &EnumMapParams) -> Option<Value> {
    let key = match value {
        Value::String(_) | Value::Integer(_) | Value::Boolean(_) => value.to_text()?,
        _ => return None,
    };
    params.mapping.get(&key).cloned()
}
