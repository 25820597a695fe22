//! Transformation operators and their parameters.
//!
//! Rules keep the `{"type": ..., "params": {...}}` JSON shape used by mapping configs, but
//! are held as one variant per operator with a typed parameter record. Two extra variants
//! keep configs loadable when they do not fit:
//!
//! - [`TransformationRule::Unrecognized`] for a `type` outside the operator set
//! - [`TransformationRule::Malformed`] for a known `type` whose params do not parse
//!
//! Both apply as pass-through and serialize back to their original JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::value::Value;

/// The closed operator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Direct,
    Left,
    Right,
    Substring,
    Replace,
    Case,
    Regex,
    Split,
    Concat,
    FormatDate,
    NumericFormat,
    BooleanConvert,
    EnumMap,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 13] = [
        OperatorKind::Direct,
        OperatorKind::Left,
        OperatorKind::Right,
        OperatorKind::Substring,
        OperatorKind::Replace,
        OperatorKind::Case,
        OperatorKind::Regex,
        OperatorKind::Split,
        OperatorKind::Concat,
        OperatorKind::FormatDate,
        OperatorKind::NumericFormat,
        OperatorKind::BooleanConvert,
        OperatorKind::EnumMap,
    ];

    /// The `type` tag as written in mapping configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Left => "left",
            Self::Right => "right",
            Self::Substring => "substring",
            Self::Replace => "replace",
            Self::Case => "case",
            Self::Regex => "regex",
            Self::Split => "split",
            Self::Concat => "concat",
            Self::FormatDate => "format_date",
            Self::NumericFormat => "numeric_format",
            Self::BooleanConvert => "boolean_convert",
            Self::EnumMap => "enum_map",
        }
    }

    /// Returns a human-readable display name for the operator.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Substring => "Substring",
            Self::Replace => "Replace",
            Self::Case => "Case",
            Self::Regex => "Regex Extract",
            Self::Split => "Split",
            Self::Concat => "Concatenate",
            Self::FormatDate => "Date Format",
            Self::NumericFormat => "Numeric Format",
            Self::BooleanConvert => "Boolean",
            Self::EnumMap => "Enum Map",
        }
    }

    /// Parameter names accepted by the operator, for listings.
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            Self::Direct => &[],
            Self::Left | Self::Right => &["count"],
            Self::Substring => &["startPosition", "length"],
            Self::Replace => &["find", "replace", "replaceAll"],
            Self::Case => &["caseType"],
            Self::Regex => &["pattern", "group"],
            Self::Split => &["delimiter", "index"],
            Self::Concat => &["fields", "separator"],
            Self::FormatDate => &["source_format", "target_format"],
            Self::NumericFormat => &["decimalPlaces"],
            Self::BooleanConvert => &["trueValues", "falseValues"],
            Self::EnumMap => &["mapping"],
        }
    }

    /// True if the operator only acts on string values.
    pub fn is_text_only(&self) -> bool {
        matches!(
            self,
            Self::Left
                | Self::Right
                | Self::Substring
                | Self::Replace
                | Self::Case
                | Self::Regex
                | Self::Split
        )
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorKind {
    type Err = String;

    /// Exact match on the `type` tag (surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        OperatorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == trimmed)
            .ok_or_else(|| format!("Unknown transformation type: {s}"))
    }
}

/// `left` / `right`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountParams {
    pub count: i64,
}

/// `substring`: chars `[start_position, start_position + length)`; no length means to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubstringParams {
    pub start_position: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplaceParams {
    pub find: String,
    pub replace: String,
    pub replace_all: bool,
}

/// Target casing for the `case` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    Upper,
    Lower,
    Title,
}

impl FromStr for CaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" => Ok(CaseType::Upper),
            "lower" => Ok(CaseType::Lower),
            "title" => Ok(CaseType::Title),
            _ => Err(format!("Unknown case type: {s}")),
        }
    }
}

/// `case`. The case type stays a string so an unknown value loads and passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseParams {
    pub case_type: String,
}

impl CaseParams {
    pub fn case_type(&self) -> Option<CaseType> {
        self.case_type.parse().ok()
    }
}

/// Capture group selector: position or name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupRef {
    Index(usize),
    Name(String),
}

impl Default for GroupRef {
    fn default() -> Self {
        GroupRef::Index(0)
    }
}

/// `regex`: extract a capture group from the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexParams {
    pub pattern: String,
    pub group: GroupRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitParams {
    pub delimiter: String,
    pub index: i64,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            index: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcatParams {
    /// Fields looked up in the full input record, joined before the current value.
    pub fields: Vec<String>,
    pub separator: String,
}

/// `format_date`. Formats use `YYYY`/`YY`/`MM`/`DD`/`HH`/`mm`/`ss` tokens, or strftime when
/// they contain `%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatDateParams {
    pub source_format: String,
    pub target_format: String,
}

impl Default for FormatDateParams {
    fn default() -> Self {
        Self {
            source_format: "DD/MM/YYYY".to_string(),
            target_format: "YYYY-MM-DD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumericFormatParams {
    pub decimal_places: i32,
}

impl Default for NumericFormatParams {
    fn default() -> Self {
        Self { decimal_places: 2 }
    }
}

/// `boolean_convert`. Matching is case-insensitive on trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BooleanConvertParams {
    pub true_values: Vec<String>,
    pub false_values: Vec<String>,
}

impl Default for BooleanConvertParams {
    fn default() -> Self {
        Self {
            true_values: ["true", "yes", "1", "t", "y"].map(String::from).to_vec(),
            false_values: ["false", "no", "0", "f", "n"].map(String::from).to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumMapParams {
    pub mapping: BTreeMap<String, Value>,
}

/// A single operator applied to one field's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRule", into = "RawRule")]
pub enum TransformationRule {
    Direct,
    Left(CountParams),
    Right(CountParams),
    Substring(SubstringParams),
    Replace(ReplaceParams),
    Case(CaseParams),
    Regex(RegexParams),
    Split(SplitParams),
    Concat(ConcatParams),
    FormatDate(FormatDateParams),
    NumericFormat(NumericFormatParams),
    BooleanConvert(BooleanConvertParams),
    EnumMap(EnumMapParams),
    /// Known operator whose params did not parse.
    Malformed {
        kind: OperatorKind,
        params: Option<JsonValue>,
        reason: String,
    },
    /// `type` tag outside the operator set.
    Unrecognized {
        type_name: String,
        params: Option<JsonValue>,
    },
}

impl TransformationRule {
    pub fn left(count: i64) -> Self {
        Self::Left(CountParams { count })
    }

    pub fn right(count: i64) -> Self {
        Self::Right(CountParams { count })
    }

    pub fn split(delimiter: impl Into<String>, index: i64) -> Self {
        Self::Split(SplitParams {
            delimiter: delimiter.into(),
            index,
        })
    }

    pub fn format_date(source_format: impl Into<String>, target_format: impl Into<String>) -> Self {
        Self::FormatDate(FormatDateParams {
            source_format: source_format.into(),
            target_format: target_format.into(),
        })
    }

    pub fn numeric_format(decimal_places: i32) -> Self {
        Self::NumericFormat(NumericFormatParams { decimal_places })
    }

    pub fn enum_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::EnumMap(EnumMapParams {
            mapping: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        })
    }

    /// Operator kind, or `None` for an unrecognized tag.
    pub fn kind(&self) -> Option<OperatorKind> {
        Some(match self {
            Self::Direct => OperatorKind::Direct,
            Self::Left(_) => OperatorKind::Left,
            Self::Right(_) => OperatorKind::Right,
            Self::Substring(_) => OperatorKind::Substring,
            Self::Replace(_) => OperatorKind::Replace,
            Self::Case(_) => OperatorKind::Case,
            Self::Regex(_) => OperatorKind::Regex,
            Self::Split(_) => OperatorKind::Split,
            Self::Concat(_) => OperatorKind::Concat,
            Self::FormatDate(_) => OperatorKind::FormatDate,
            Self::NumericFormat(_) => OperatorKind::NumericFormat,
            Self::BooleanConvert(_) => OperatorKind::BooleanConvert,
            Self::EnumMap(_) => OperatorKind::EnumMap,
            Self::Malformed { kind, .. } => *kind,
            Self::Unrecognized { .. } => return None,
        })
    }

    /// The `type` tag as it appears in JSON.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unrecognized { type_name, .. } => type_name,
            other => other.kind().map_or("", |kind| kind.as_str()),
        }
    }

    /// True when the rule will not act on any value.
    pub fn is_inert(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Unrecognized { .. })
    }

    fn from_parts(kind: OperatorKind, params: JsonValue) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            OperatorKind::Direct => Self::Direct,
            OperatorKind::Left => Self::Left(serde_json::from_value(params)?),
            OperatorKind::Right => Self::Right(serde_json::from_value(params)?),
            OperatorKind::Substring => Self::Substring(serde_json::from_value(params)?),
            OperatorKind::Replace => Self::Replace(serde_json::from_value(params)?),
            OperatorKind::Case => Self::Case(serde_json::from_value(params)?),
            OperatorKind::Regex => Self::Regex(serde_json::from_value(params)?),
            OperatorKind::Split => Self::Split(serde_json::from_value(params)?),
            OperatorKind::Concat => Self::Concat(serde_json::from_value(params)?),
            OperatorKind::FormatDate => Self::FormatDate(serde_json::from_value(params)?),
            OperatorKind::NumericFormat => Self::NumericFormat(serde_json::from_value(params)?),
            OperatorKind::BooleanConvert => Self::BooleanConvert(serde_json::from_value(params)?),
            OperatorKind::EnumMap => Self::EnumMap(serde_json::from_value(params)?),
        })
    }
}

/// Wire shape of a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRule {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<JsonValue>,
}

impl From<RawRule> for TransformationRule {
    fn from(raw: RawRule) -> Self {
        let Ok(kind) = raw.type_name.parse::<OperatorKind>() else {
            return Self::Unrecognized {
                type_name: raw.type_name,
                params: raw.params,
            };
        };
        let params = match &raw.params {
            None | Some(JsonValue::Null) => JsonValue::Object(serde_json::Map::new()),
            Some(params) => params.clone(),
        };
        match Self::from_parts(kind, params) {
            Ok(rule) => rule,
            Err(error) => Self::Malformed {
                kind,
                params: raw.params,
                reason: error.to_string(),
            },
        }
    }
}

impl From<TransformationRule> for RawRule {
    fn from(rule: TransformationRule) -> Self {
        let type_name = rule.type_name().to_string();
        let params = match rule {
            TransformationRule::Direct => None,
            TransformationRule::Left(params) | TransformationRule::Right(params) => {
                to_params(&params)
            }
            TransformationRule::Substring(params) => to_params(&params),
            TransformationRule::Replace(params) => to_params(&params),
            TransformationRule::Case(params) => to_params(&params),
            TransformationRule::Regex(params) => to_params(&params),
            TransformationRule::Split(params) => to_params(&params),
            TransformationRule::Concat(params) => to_params(&params),
            TransformationRule::FormatDate(params) => to_params(&params),
            TransformationRule::NumericFormat(params) => to_params(&params),
            TransformationRule::BooleanConvert(params) => to_params(&params),
            TransformationRule::EnumMap(params) => to_params(&params),
            TransformationRule::Malformed { params, .. }
            | TransformationRule::Unrecognized { params, .. } => params,
        };
        RawRule { type_name, params }
    }
}

fn to_params<T: Serialize>(params: &T) -> Option<JsonValue> {
    serde_json::to_value(params).ok()
}
