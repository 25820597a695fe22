//! Numeric formatting.

use trademap_model::{NumericFormatParams, Value};

/// Coerce to a number and round to `decimal_places`, half away from zero.
///
/// Negative places round to tens, hundreds, and so on. Booleans, dates and text that
/// does not parse as a number are left alone, as are results that overflow.
pub fn round(value: &Value, params: &NumericFormatParams) -> Option<Value> {
    let number = value.as_f64()?;
    let places = params.decimal_places;
    let rounded = if places >= 0 {
        let factor = 10f64.powi(places);
        (number * factor).round() / factor
    } else {
        let factor = 10f64.powi(places.saturating_neg());
        (number / factor).round() * factor
    };
    rounded.is_finite().then_some(Value::Decimal(rounded))
}
