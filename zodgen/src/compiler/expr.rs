//! Validator expression builder.
//!
//! Maps one IR member to a deterministic chain of validation-expression
//! segments. Segment order is fixed regardless of rule declaration order:
//! base, scalar constraints, default, array wrapper plus array constraints,
//! nullable, optional. The order is load-bearing: the array wrapper must
//! follow the element's constraints, and optional must be outermost so it
//! applies to the whole constructed value.

use std::fmt;

use serde_json::Value;

use crate::ir::{Constraint, Member, PrimitiveKind, Rule, TypeRef};
use crate::naming::Naming;

/// An ordered chain of validation-expression segments.
///
/// Rendered by joining segments with the chain operator, e.g.
/// `z.number()` + `int()` + `gte(43)` becomes `z.number().int().gte(43)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprChain {
    segments: Vec<String>,
}

impl ExprChain {
    /// Create a chain from its base segment.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            segments: vec![base.into()],
        }
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Append a segment, consuming and returning the chain.
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.push(segment);
        self
    }

    /// The segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render the chain as expression text.
    pub fn render(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for ExprChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build the full validator expression for one member.
///
/// `parent` is the raw name of the schema target the member belongs to; it
/// drives the lazy self-reference substitution.
pub fn member_expr(member: &Member, parent: &str, naming: &Naming) -> ExprChain {
    let constraints: Vec<Constraint> = member.rules.iter().filter_map(Rule::classify).collect();

    let mut chain = if let Some(constant) = &member.constant {
        // A constant short-circuits rule application entirely.
        ExprChain::new(format!("z.literal({})", literal(constant)))
    } else {
        match &member.ty {
            TypeRef::Primitive(kind) => scalar_expr(*kind, &constraints),
            TypeRef::Named(name) => reference_expr(name, parent, naming),
        }
    };

    if member.constant.is_none() {
        if let Some(default) = &member.default {
            chain.push(format!("default({})", literal(default)));
        }
    }

    if member.is_array {
        chain.push("array()");
        apply_array_constraints(&mut chain, &constraints);
    }

    if member.nullable {
        chain.push("nullable()");
    }

    if member.is_optional() {
        chain.push("optional()");
    }

    chain
}

/// Build the expression for a bare type reference with no member context.
///
/// Used for map-shape keys and values.
pub fn type_expr(ty: &TypeRef, parent: &str, naming: &Naming) -> ExprChain {
    match ty {
        TypeRef::Primitive(kind) => scalar_expr(*kind, &[]),
        TypeRef::Named(name) => reference_expr(name, parent, naming),
    }
}

/// Reference to another schema's identifier, lazily wrapped when the
/// referenced name is the parent itself.
///
/// The check is strictly parent == referenced name (case-insensitive); it
/// does not walk multi-hop cycles.
pub fn reference_expr(name: &str, parent: &str, naming: &Naming) -> ExprChain {
    let ident = naming.schema_identifier(name);
    if name.eq_ignore_ascii_case(parent) {
        ExprChain::new(format!("z.lazy(() => {})", ident))
    } else {
        ExprChain::new(ident)
    }
}

/// Base segment plus scalar constraint segments for a primitive kind.
fn scalar_expr(kind: PrimitiveKind, constraints: &[Constraint]) -> ExprChain {
    match kind {
        PrimitiveKind::String => string_expr(constraints),
        PrimitiveKind::Integer | PrimitiveKind::Long => {
            let mut chain = ExprChain::new("z.number()").with("int()");
            apply_numeric_constraints(&mut chain, constraints);
            chain
        }
        PrimitiveKind::Double => {
            let mut chain = ExprChain::new("z.number()");
            apply_numeric_constraints(&mut chain, constraints);
            chain
        }
        PrimitiveKind::Boolean => ExprChain::new("z.boolean()"),
        PrimitiveKind::Date | PrimitiveKind::DateTime => ExprChain::new("z.coerce.date()"),
        PrimitiveKind::Uuid => ExprChain::new("z.string()").with("uuid()"),
        PrimitiveKind::Null => ExprChain::new("z.null()"),
        PrimitiveKind::Base64 | PrimitiveKind::Unknown => ExprChain::new("z.any()"),
    }
}

/// String base with its constraint segments.
///
/// An enumerated-values constraint replaces the plain string base and
/// suppresses pattern and length handling.
fn string_expr(constraints: &[Constraint]) -> ExprChain {
    for constraint in constraints {
        if let Constraint::Enumerated(values) = constraint {
            let literals: Vec<String> = values.iter().map(|v| js_string(v)).collect();
            return ExprChain::new(format!("z.enum([{}])", literals.join(", ")));
        }
    }

    let mut chain = ExprChain::new("z.string()");

    for constraint in constraints {
        if let Constraint::Pattern(pattern) = constraint {
            chain.push(format!("regex(/{}/)", escape_pattern(pattern)));
        }
    }

    let min = constraints.iter().find_map(|c| match c {
        Constraint::MinLength(n) => Some(*n),
        _ => None,
    });
    let max = constraints.iter().find_map(|c| match c {
        Constraint::MaxLength(n) => Some(*n),
        _ => None,
    });

    match (min, max) {
        (Some(lo), Some(hi)) if lo == hi => chain.push(format!("length({})", lo)),
        (min, max) => {
            match min {
                Some(1) => chain.push("nonempty()"),
                Some(lo) => chain.push(format!("min({})", lo)),
                None => {}
            }
            if let Some(hi) = max {
                chain.push(format!("max({})", hi));
            }
        }
    }

    chain
}

/// Numeric constraint segments in fixed order: gt, gte, lt, lte, multipleOf.
///
/// Thresholds of exactly zero substitute the named boundary segment for the
/// generic comparison.
fn apply_numeric_constraints(chain: &mut ExprChain, constraints: &[Constraint]) {
    for constraint in constraints {
        if let Constraint::Gt(n) = constraint {
            chain.push(if *n == 0.0 {
                "positive()".to_string()
            } else {
                format!("gt({})", number(*n))
            });
        }
    }
    for constraint in constraints {
        if let Constraint::Gte(n) = constraint {
            chain.push(if *n == 0.0 {
                "nonnegative()".to_string()
            } else {
                format!("gte({})", number(*n))
            });
        }
    }
    for constraint in constraints {
        if let Constraint::Lt(n) = constraint {
            chain.push(if *n == 0.0 {
                "negative()".to_string()
            } else {
                format!("lt({})", number(*n))
            });
        }
    }
    for constraint in constraints {
        if let Constraint::Lte(n) = constraint {
            chain.push(if *n == 0.0 {
                "nonpositive()".to_string()
            } else {
                format!("lte({})", number(*n))
            });
        }
    }
    for constraint in constraints {
        if let Constraint::MultipleOf(n) = constraint {
            chain.push(format!("multipleOf({})", number(*n)));
        }
    }
}

/// Array constraint segments, applied strictly after the array wrapper.
fn apply_array_constraints(chain: &mut ExprChain, constraints: &[Constraint]) {
    for constraint in constraints {
        if let Constraint::MinItems(n) = constraint {
            chain.push(if *n == 1 {
                "nonempty()".to_string()
            } else {
                format!("min({})", n)
            });
        }
    }
    for constraint in constraints {
        if let Constraint::MaxItems(n) = constraint {
            chain.push(format!("max({})", n));
        }
    }
}

/// Render a JSON literal as JavaScript source text.
pub fn literal(value: &Value) -> String {
    value.to_string()
}

/// Render a number without a trailing `.0` for integral values.
fn number(n: f64) -> String {
    format!("{}", n)
}

/// Quote and escape a string for JavaScript source.
fn js_string(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}

/// Escape a string for use inside JavaScript double quotes.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Escape a regex pattern for a JavaScript regex literal.
///
/// Only bare slashes are escaped; a slash the IR already escaped must not
/// gain a second backslash, or the literal backslash would let the slash
/// terminate the regex literal early.
fn escape_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    for c in pattern.chars() {
        if c == '/' && !escaped {
            out.push('\\');
        }
        out.push(c);
        escaped = c == '\\' && !escaped;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn naming() -> Naming {
        Naming::default()
    }

    fn string_member(name: &str) -> Member {
        Member::new(name, TypeRef::Primitive(PrimitiveKind::String))
    }

    fn int_member(name: &str) -> Member {
        Member::new(name, TypeRef::Primitive(PrimitiveKind::Integer))
    }

    // =========================================================================
    // Base segment table
    // =========================================================================

    #[test]
    fn test_primitive_bases() {
        let cases = [
            (PrimitiveKind::String, "z.string()"),
            (PrimitiveKind::Integer, "z.number().int()"),
            (PrimitiveKind::Long, "z.number().int()"),
            (PrimitiveKind::Double, "z.number()"),
            (PrimitiveKind::Boolean, "z.boolean()"),
            (PrimitiveKind::Date, "z.coerce.date()"),
            (PrimitiveKind::DateTime, "z.coerce.date()"),
            (PrimitiveKind::Uuid, "z.string().uuid()"),
            (PrimitiveKind::Null, "z.null()"),
            (PrimitiveKind::Base64, "z.any()"),
            (PrimitiveKind::Unknown, "z.any()"),
        ];
        for (kind, expected) in cases {
            let member = Member::new("value", TypeRef::Primitive(kind));
            assert_eq!(member_expr(&member, "Parent", &naming()).render(), expected);
        }
    }

    #[test]
    fn test_constant_short_circuits_rules() {
        let member = string_member("kind")
            .with_constant(json!("user"))
            .add_rule(Rule::min_length(5))
            .add_rule(Rule::pattern("^u"));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.literal(\"user\")"
        );
    }

    #[test]
    fn test_constant_suppresses_default() {
        let member = string_member("kind")
            .with_constant(json!("user"))
            .with_default(json!("other"));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.literal(\"user\")"
        );
    }

    // =========================================================================
    // String constraints
    // =========================================================================

    #[test]
    fn test_string_enum_replaces_base() {
        let member = string_member("color")
            .add_rule(Rule::enumerated(vec!["red".to_string(), "blue".to_string()]))
            .add_rule(Rule::min_length(1));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.enum([\"red\", \"blue\"])"
        );
    }

    #[test]
    fn test_string_exact_length_collapses() {
        let member = string_member("code")
            .add_rule(Rule::min_length(3))
            .add_rule(Rule::max_length(3));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.string().length(3)"
        );
    }

    #[test]
    fn test_string_min_one_is_nonempty() {
        let member = string_member("name").add_rule(Rule::min_length(1));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.string().nonempty()"
        );
    }

    #[test]
    fn test_string_min_max_independent() {
        let member = string_member("name")
            .add_rule(Rule::max_length(64))
            .add_rule(Rule::min_length(2));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.string().min(2).max(64)"
        );
    }

    #[test]
    fn test_string_pattern() {
        let member = string_member("slug").add_rule(Rule::pattern("^[a-z/]+$"));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.string().regex(/^[a-z\\/]+$/)"
        );
    }

    #[test]
    fn test_pattern_with_pre_escaped_slash_is_unchanged() {
        let member = string_member("path").add_rule(Rule::pattern(r"^a\/b$"));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            r"z.string().regex(/^a\/b$/)"
        );
    }

    #[test]
    fn test_pattern_slash_after_literal_backslash_is_escaped() {
        // A double backslash is a literal backslash in the regex, so the
        // slash after it is bare and still needs escaping.
        let member = string_member("path").add_rule(Rule::pattern(r"a\\/b"));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            r"z.string().regex(/a\\\/b/)"
        );
    }

    // =========================================================================
    // Numeric constraints
    // =========================================================================

    #[test]
    fn test_numeric_zero_boundaries() {
        let cases = [
            (Rule::gt(0.0), "z.number().int().positive()"),
            (Rule::gte(0.0), "z.number().int().nonnegative()"),
            (Rule::lt(0.0), "z.number().int().negative()"),
            (Rule::lte(0.0), "z.number().int().nonpositive()"),
        ];
        for (rule, expected) in cases {
            let member = int_member("n").add_rule(rule);
            assert_eq!(member_expr(&member, "Parent", &naming()).render(), expected);
        }
    }

    #[test]
    fn test_numeric_generic_comparisons() {
        let member = int_member("n")
            .add_rule(Rule::lt(100.0))
            .add_rule(Rule::gte(43.0));
        // Fixed order: gte precedes lt regardless of declaration order.
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.number().int().gte(43).lt(100)"
        );
    }

    #[test]
    fn test_multiple_of() {
        let member = Member::new("n", TypeRef::Primitive(PrimitiveKind::Double))
            .add_rule(Rule::multiple_of(0.5));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.number().multipleOf(0.5)"
        );
    }

    // =========================================================================
    // Complex references
    // =========================================================================

    #[test]
    fn test_reference_to_other_schema() {
        let member = Member::new("author", TypeRef::named("User"));
        assert_eq!(
            member_expr(&member, "Post", &naming()).render(),
            "UserSchema"
        );
    }

    #[test]
    fn test_self_reference_is_lazy() {
        let member = Member::new("parent", TypeRef::named("Node"));
        assert_eq!(
            member_expr(&member, "Node", &naming()).render(),
            "z.lazy(() => NodeSchema)"
        );
    }

    #[test]
    fn test_self_reference_check_is_case_insensitive() {
        let member = Member::new("parent", TypeRef::named("node"));
        assert_eq!(
            member_expr(&member, "Node", &naming()).render(),
            "z.lazy(() => NodeSchema)"
        );
    }

    // =========================================================================
    // Modifier ordering
    // =========================================================================

    #[test]
    fn test_full_modifier_order() {
        let member = int_member("values")
            .add_rule(Rule::gte(43.0))
            .add_rule(Rule::lt(100.0))
            .add_rule(Rule::max_items(10))
            .with_array(true)
            .with_nullable(true)
            .with_required(false);
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.number().int().gte(43).lt(100).array().max(10).nullable().optional()"
        );
    }

    #[test]
    fn test_array_min_items_one_is_nonempty() {
        let member = string_member("tags")
            .with_array(true)
            .add_rule(Rule::min_items(1));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.string().array().nonempty()"
        );
    }

    #[test]
    fn test_default_before_array_wrapper() {
        let member = string_member("tags")
            .with_array(true)
            .with_default(json!([]));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.string().default([]).array()"
        );
    }

    #[test]
    fn test_default_value_literal() {
        let member = int_member("count").with_default(json!(0));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.number().int().default(0)"
        );
    }

    #[test]
    fn test_unknown_rule_produces_no_segment() {
        let member = string_member("name").add_rule(Rule::new("customCheck", json!({})));
        assert_eq!(
            member_expr(&member, "Parent", &naming()).render(),
            "z.string()"
        );
    }

    #[test]
    fn test_type_expr_for_map_values() {
        assert_eq!(
            type_expr(
                &TypeRef::Primitive(PrimitiveKind::String),
                "Parent",
                &naming()
            )
            .render(),
            "z.string()"
        );
        assert_eq!(
            type_expr(&TypeRef::named("Meta"), "Parent", &naming()).render(),
            "MetaSchema"
        );
    }

    #[test]
    fn test_literal_rendering() {
        assert_eq!(literal(&json!("a\"b")), "\"a\\\"b\"");
        assert_eq!(literal(&json!(42)), "42");
        assert_eq!(literal(&json!(true)), "true");
        assert_eq!(literal(&json!(null)), "null");
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================
