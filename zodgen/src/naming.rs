//! Identifier naming utilities.
//!
//! Pure string-to-string helpers: raw IR names in, emitted identifiers out.
//! The compiler threads a [`Naming`] value explicitly instead of relying on
//! ambient configuration.

use convert_case::{Case, Casing};

/// Naming context for emitted identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    /// Suffix appended to schema constant names.
    pub schema_suffix: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            schema_suffix: "Schema".to_string(),
        }
    }
}

impl Naming {
    /// Create a naming context with a custom schema suffix.
    pub fn with_suffix(schema_suffix: impl Into<String>) -> Self {
        Self {
            schema_suffix: schema_suffix.into(),
        }
    }

    /// Schema constant identifier for a raw IR name, e.g. `UserSchema`.
    pub fn schema_identifier(&self, raw: &str) -> String {
        format!("{}{}", self.type_identifier(raw), self.schema_suffix)
    }

    /// Type identifier for a raw IR name, e.g. `User`.
    pub fn type_identifier(&self, raw: &str) -> String {
        raw.to_case(Case::Pascal)
    }
}

/// Stable target name for a method's synthetic parameter object.
///
/// The raw name is snake-joined; casing happens at identifier time so the
/// sorter compares raw names consistently.
pub fn params_target_name(interface: &str, method: &str) -> String {
    format!("{}_{}_params", interface, method)
}
