//! Validation rule definitions.
//!
//! Rules arrive as raw `{ id, params }` pairs attached to a member. A closed
//! catalog of ids is recognized and classified into [`Constraint`] values;
//! anything else is inert and produces no chain segment.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A raw validation rule as carried by the IR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Rule identifier.
    pub id: String,

    /// Structured payload, shape depending on the id.
    #[serde(default)]
    pub params: Value,
}

impl Rule {
    /// Create a rule from its id and payload.
    pub fn new(id: impl Into<String>, params: Value) -> Self {
        Self {
            id: id.into(),
            params,
        }
    }

    /// Minimum string length.
    pub fn min_length(n: u64) -> Self {
        Self::new("minLength", json!(n))
    }

    /// Maximum string length.
    pub fn max_length(n: u64) -> Self {
        Self::new("maxLength", json!(n))
    }

    /// Regular-expression pattern.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::new("pattern", json!(pattern.into()))
    }

    /// Enumerated string values.
    pub fn enumerated(values: Vec<String>) -> Self {
        Self::new("enum", json!(values))
    }

    /// Strictly greater than.
    pub fn gt(n: f64) -> Self {
        Self::new("gt", json!(n))
    }

    /// Greater than or equal.
    pub fn gte(n: f64) -> Self {
        Self::new("gte", json!(n))
    }

    /// Strictly less than.
    pub fn lt(n: f64) -> Self {
        Self::new("lt", json!(n))
    }

    /// Less than or equal.
    pub fn lte(n: f64) -> Self {
        Self::new("lte", json!(n))
    }

    /// Multiple of a step value.
    pub fn multiple_of(n: f64) -> Self {
        Self::new("multipleOf", json!(n))
    }

    /// Minimum array length.
    pub fn min_items(n: u64) -> Self {
        Self::new("minItems", json!(n))
    }

    /// Maximum array length.
    pub fn max_items(n: u64) -> Self {
        Self::new("maxItems", json!(n))
    }

    /// Classify into a typed constraint.
    ///
    /// Returns `None` for unknown ids and for payloads that do not parse as
    /// the shape the id requires; both cases are inert by contract.
    pub fn classify(&self) -> Option<Constraint> {
        fn parse<T: serde::de::DeserializeOwned>(params: &Value) -> Option<T> {
            serde_json::from_value(params.clone()).ok()
        }

        match self.id.as_str() {
            "minLength" => parse(&self.params).map(Constraint::MinLength),
            "maxLength" => parse(&self.params).map(Constraint::MaxLength),
            "pattern" => parse(&self.params).map(Constraint::Pattern),
            "enum" => parse(&self.params).map(Constraint::Enumerated),
            "gt" => parse(&self.params).map(Constraint::Gt),
            "gte" => parse(&self.params).map(Constraint::Gte),
            "lt" => parse(&self.params).map(Constraint::Lt),
            "lte" => parse(&self.params).map(Constraint::Lte),
            "multipleOf" => parse(&self.params).map(Constraint::MultipleOf),
            "minItems" => parse(&self.params).map(Constraint::MinItems),
            "maxItems" => parse(&self.params).map(Constraint::MaxItems),
            _ => None,
        }
    }
}

/// A recognized, typed validation constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Minimum string length.
    MinLength(u64),

    /// Maximum string length.
    MaxLength(u64),

    /// Regular-expression pattern.
    Pattern(String),

    /// Enumerated string values, replacing the plain string base.
    Enumerated(Vec<String>),

    /// Strictly greater than.
    Gt(f64),

    /// Greater than or equal.
    Gte(f64),

    /// Strictly less than.
    Lt(f64),

    /// Less than or equal.
    Lte(f64),

    /// Multiple of a step value.
    MultipleOf(f64),

    /// Minimum array length.
    MinItems(u64),

    /// Maximum array length.
    MaxItems(u64),
}

impl Constraint {
    /// Whether this constraint applies to string bases.
    pub fn is_string_constraint(&self) -> bool {
        matches!(
            self,
            Constraint::MinLength(_)
                | Constraint::MaxLength(_)
                | Constraint::Pattern(_)
                | Constraint::Enumerated(_)
        )
    }

    /// Whether this constraint applies to numeric bases.
    pub fn is_numeric_constraint(&self) -> bool {
        matches!(
            self,
            Constraint::Gt(_)
                | Constraint::Gte(_)
                | Constraint::Lt(_)
                | Constraint::Lte(_)
                | Constraint::MultipleOf(_)
        )
    }

    /// Whether this constraint applies to the array wrapper.
    pub fn is_array_constraint(&self) -> bool {
        matches!(self, Constraint::MinItems(_) | Constraint::MaxItems(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_rules() {
        assert_eq!(
            Rule::min_length(3).classify(),
            Some(Constraint::MinLength(3))
        );
        assert_eq!(Rule::gte(0.0).classify(), Some(Constraint::Gte(0.0)));
        assert_eq!(
            Rule::pattern("^[a-z]+$").classify(),
            Some(Constraint::Pattern("^[a-z]+$".to_string()))
        );
        assert_eq!(
            Rule::enumerated(vec!["a".to_string(), "b".to_string()]).classify(),
            Some(Constraint::Enumerated(vec![
                "a".to_string(),
                "b".to_string()
            ]))
        );
        assert_eq!(Rule::max_items(10).classify(), Some(Constraint::MaxItems(10)));
    }

    #[test]
    fn test_unknown_rule_is_inert() {
        assert_eq!(Rule::new("futureRule", json!(42)).classify(), None);
    }

    #[test]
    fn test_malformed_params_are_inert() {
        assert_eq!(Rule::new("minLength", json!("three")).classify(), None);
        assert_eq!(Rule::new("enum", json!(7)).classify(), None);
    }

    #[test]
    fn test_constraint_categories_are_exclusive() {
        assert!(Constraint::MinLength(1).is_string_constraint());
        assert!(!Constraint::MinLength(1).is_numeric_constraint());

        assert!(Constraint::Gt(1.0).is_numeric_constraint());
        assert!(!Constraint::Gt(1.0).is_array_constraint());

        assert!(Constraint::MinItems(1).is_array_constraint());
        assert!(!Constraint::MinItems(1).is_string_constraint());
    }

    #[test]
    fn test_rule_serde_round_trip() {
        let rule = Rule::multiple_of(2.5);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json, json!({ "id": "multipleOf", "params": 2.5 }));
        let back: Rule = serde_json::from_value(json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_rule_without_params_deserializes() {
        let rule: Rule = serde_json::from_value(json!({ "id": "nonEmpty" })).unwrap();
        assert_eq!(rule.params, Value::Null);
        assert_eq!(rule.classify(), None);
    }
}
