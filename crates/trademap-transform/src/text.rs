//! String operators.
//!
//! Positions and counts are in chars, not bytes. Each function returns `None` when the
//! operator cannot act, and the caller keeps the original value.

use regex::Regex;

use trademap_model::{
    CaseParams, CaseType, GroupRef, RegexParams, ReplaceParams, SplitParams, SubstringParams,
    Value,
};

/// First `count` chars. A negative count drops that many chars from the end; zero does not
/// apply, so a rule without params keeps the value.
pub fn left(text: &str, count: i64) -> Option<Value> {
    if count == 0 {
        return None;
    }
    let len = text.chars().count();
    let take = if count >= 0 {
        clamp(count, len)
    } else {
        len.saturating_sub(clamp(count.saturating_neg(), len))
    };
    Some(Value::String(text.chars().take(take).collect()))
}

/// Last `count` chars. Non-positive counts do not apply.
pub fn right(text: &str, count: i64) -> Option<Value> {
    if count <= 0 {
        return None;
    }
    let len = text.chars().count();
    let skip = len - clamp(count, len);
    Some(Value::String(text.chars().skip(skip).collect()))
}

pub fn substring(text: &str, params: &SubstringParams) -> Option<Value> {
    let len = text.chars().count();
    let start = clamp(params.start_position, len);
    let take = match params.length {
        Some(length) => clamp(length, len - start),
        None => len - start,
    };
    Some(Value::String(text.chars().skip(start).take(take).collect()))
}

pub fn replace(text: &str, params: &ReplaceParams) -> Option<Value> {
    if params.find.is_empty() {
        return None;
    }
    let replaced = if params.replace_all {
        text.replace(&params.find, &params.replace)
    } else {
        text.replacen(&params.find, &params.replace, 1)
    };
    Some(Value::String(replaced))
}

pub fn change_case(text: &str, params: &CaseParams) -> Option<Value> {
    let converted = match params.case_type()? {
        CaseType::Upper => text.to_uppercase(),
        CaseType::Lower => text.to_lowercase(),
        CaseType::Title => title_case(text),
    };
    Some(Value::String(converted))
}

/// Capture group of the first match. No match, a bad pattern or a group that did not
/// participate all leave the value alone.
pub fn extract(text: &str, params: &RegexParams) -> Option<Value> {
    if params.pattern.is_empty() {
        return None;
    }
    let regex = Regex::new(&params.pattern).ok()?;
    let captures = regex.captures(text)?;
    let group = match &params.group {
        GroupRef::Index(index) => captures.get(*index),
        GroupRef::Name(name) => captures.name(name),
    }?;
    Some(Value::String(group.as_str().to_string()))
}

pub fn split(text: &str, params: &SplitParams) -> Option<Value> {
    if params.delimiter.is_empty() {
        return None;
    }
    let index = usize::try_from(params.index).ok()?;
    text.split(params.delimiter.as_str())
        .nth(index)
        .map(|part| Value::String(part.to_string()))
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

fn clamp(value: i64, max: usize) -> usize {
    usize::try_from(value).map_or(0, |value| value.min(max))
}
