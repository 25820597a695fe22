//! Validation issue types.
//!
//! Issues are the soft findings of a validation run: they are reported alongside the
//! record and never stop the transform on their own.

use std::fmt;

use serde::{Deserialize, Serialize};

use trademap_model::DataType;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Record is usable but a required value is blank
    Error,
    /// Should review
    Warning,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Required field is present but null
    RequiredFieldNull { field: String },
    /// Value does not conform to the field's declared type
    TypeMismatch {
        field: String,
        expected: DataType,
        found: String,
    },
    /// Enum field value outside its `values` constraint
    EnumValueNotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl Issue {
    /// Short identifier of the check that raised the issue.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::RequiredFieldNull { .. } => "required_null",
            Issue::TypeMismatch { .. } => "type_mismatch",
            Issue::EnumValueNotAllowed { .. } => "enum_value",
        }
    }

    /// Target field name (all issues have one).
    pub fn field(&self) -> &str {
        match self {
            Issue::RequiredFieldNull { field }
            | Issue::TypeMismatch { field, .. }
            | Issue::EnumValueNotAllowed { field, .. } => field,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::RequiredFieldNull { .. } => Severity::Error,
            Issue::TypeMismatch { .. } | Issue::EnumValueNotAllowed { .. } => Severity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::RequiredFieldNull { field } => {
                format!("Required field {field} is null")
            }
            Issue::TypeMismatch {
                field,
                expected,
                found,
            } => format!("Field {field} expects {expected} but holds {found}"),
            Issue::EnumValueNotAllowed {
                field,
                value,
                allowed,
            } => format!(
                "Value '{value}' of field {field} is not one of: {}",
                allowed.join(", ")
            ),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity(), self.message())
    }
}
