//! Date re-formatting for the `format_date` operator.
//!
//! Mapping configs describe dates with tokens rather than strftime directives:
//!
//! | Token | Meaning | strftime |
//! |---|---|---|
//! | `YYYY` / `yyyy` | four-digit year | `%Y` |
//! | `YY` / `yy` | two-digit year | `%y` |
//! | `MM` | month, zero padded | `%m` |
//! | `DD` / `dd` | day of month, zero padded | `%d` |
//! | `HH` | hour (00-23) | `%H` |
//! | `mm` | minute | `%M` |
//! | `ss` | second | `%S` |
//!
//! Two-digit years follow chrono's `%y` pivot: `00`-`69` are 2000-2069 and `70`-`99` are
//! 1970-1999. Python's `strptime` puts `69` in 1969 instead.
//!
//! Anything else is literal text. A format that already contains `%` is used verbatim as
//! a strftime pattern.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use trademap_model::{FormatDateParams, Value};

/// Longest tokens first so `YYYY` is not read as two `YY`.
const TOKENS: [(&str, &str); 10] = [
    ("YYYY", "%Y"),
    ("yyyy", "%Y"),
    ("YY", "%y"),
    ("yy", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("dd", "%d"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Translate a token format into a strftime pattern.
pub fn to_strftime(format: &str) -> String {
    if format.contains('%') {
        return format.to_string();
    }
    let mut out = String::with_capacity(format.len() + 4);
    let mut rest = format;
    'scan: while let Some(ch) = rest.chars().next() {
        for (token, directive) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(directive);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Parse text with a token format. Date-only formats yield midnight.
pub fn parse(text: &str, format: &str) -> Option<NaiveDateTime> {
    let pattern = to_strftime(format);
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, &pattern)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, &pattern)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Render with a token format; `None` when the format holds an invalid directive.
pub fn render(value: &NaiveDateTime, format: &str) -> Option<String> {
    let pattern = to_strftime(format);
    let items: Vec<Item<'_>> = StrftimeItems::new(&pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", value.format_with_items(items.iter())).ok()?;
    Some(out)
}

/// Dates are accepted as-is; strings are parsed with the source format.
pub fn format_date(value: &Value, params: &FormatDateParams) -> Option<Value> {
    let parsed = match value {
        Value::DateTime(datetime) => *datetime,
        Value::String(text) => parse(text, &params.source_format)?,
        _ => return None,
    };
    render(&parsed, &params.target_format).map(Value::String)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_translate_to_strftime() {
        assert_eq!(to_strftime("DD/MM/YYYY"), "%d/%m/%Y");
        assert_eq!(to_strftime("yyyy-MM-dd"), "%Y-%m-%d");
        assert_eq!(to_strftime("YYYYMMDD HH:mm:ss"), "%Y%m%d %H:%M:%S");
        assert_eq!(to_strftime("DD.MM.YY"), "%d.%m.%y");
        assert_eq!(to_strftime("%d/%m/%Y"), "%d/%m/%Y");
        assert_eq!(to_strftime("Y-Q"), "Y-Q");
    }

    #[test]
    fn parse_date_only_and_date_time() {
        let date = parse("25/12/2024", "DD/MM/YYYY").unwrap();
        assert_eq!(
            date,
            NaiveDate::from_ymd_opt(2024, 12, 25)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );
        let datetime = parse("2024-12-25 14:30:05", "YYYY-MM-DD HH:mm:ss").unwrap();
        assert_eq!(datetime.format("%H:%M:%S").to_string(), "14:30:05");
        assert!(parse("31/02/2024", "DD/MM/YYYY").is_none());
        assert!(parse("not a date", "DD/MM/YYYY").is_none());
    }

    #[test]
    fn two_digit_years_pivot_at_seventy() {
        let year = |text: &str| parse(text, "DD/MM/YY").unwrap().format("%Y").to_string();
        assert_eq!(year("01/01/68"), "2068");
        assert_eq!(year("01/01/69"), "2069");
        assert_eq!(year("01/01/70"), "1970");
    }

    #[test]
    fn render_rejects_bad_directives() {
        let date = parse("01/02/2024", "DD/MM/YYYY").unwrap();
        assert_eq!(render(&date, "YYYY-MM-DD").as_deref(), Some("2024-02-01"));
        assert_eq!(render(&date, "%Q"), None);
    }
}
