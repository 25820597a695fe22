use serde::{Deserialize, Serialize};

/// How type findings are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Type findings are reported as warnings.
    #[default]
    Lenient,
    /// The first type mismatch fails validation.
    Strict,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub mode: ValidationMode,
    /// Check enum fields against their `values` constraint.
    pub check_enum_membership: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            check_enum_membership: true,
        }
    }
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
            ..Self::default()
        }
    }

    pub fn with_enum_membership(mut self, enabled: bool) -> Self {
        self.check_enum_membership = enabled;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ValidationMode::Strict
    }
}
