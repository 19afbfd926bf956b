//! Target expression assembly.
//!
//! Turns one ordered schema target into the right-hand side of its
//! declaration: object expressions for types and method parameter objects,
//! union and discriminated-union expressions, and enumerations.

use crate::ir::{EnumDecl, MapShape, Member, TypeDecl, TypeRef, UnionDecl};
use crate::naming::Naming;

use super::collect::{SchemaTarget, TargetKind};
use super::expr::{literal, member_expr, type_expr};

/// The full expression for one target.
pub fn target_expr(target: &SchemaTarget<'_>, naming: &Naming, indent: &str) -> String {
    match &target.kind {
        TargetKind::Type(ty) => type_object_expr(ty, &target.name, naming, indent),
        TargetKind::Method { method, .. } => {
            object_expr(&method.parameters, &target.name, naming, indent)
        }
        TargetKind::Union(union) => union_expr(union, naming),
        TargetKind::Enum(e) => enum_expr(e),
    }
}

/// Object expression for a declared type, honoring its map shape.
///
/// Required map keys are folded in as ordinary object entries typed by the
/// map's value type, and the object gains a catch-all for the remaining
/// keys. A type with no entries at all degenerates to a plain record.
fn type_object_expr(ty: &TypeDecl, parent: &str, naming: &Naming, indent: &str) -> String {
    let map = ty.map.as_ref();
    let folded: Vec<Member> = map
        .map(|m| {
            m.required_keys
                .iter()
                .map(|key| Member::new(key.clone(), m.value.clone()))
                .collect()
        })
        .unwrap_or_default();

    if ty.properties.is_empty() && folded.is_empty() {
        return match map {
            Some(m) => record_expr(m, parent, naming),
            None => "z.record(z.string(), z.any())".to_string(),
        };
    }

    let mut entries: Vec<&Member> = ty.properties.iter().collect();
    entries.extend(folded.iter());

    let mut expr = object_body(&entries, parent, naming, indent);
    if let Some(m) = map {
        expr.push_str(&format!(
            ".catchall({})",
            type_expr(&m.value, parent, naming).render()
        ));
    }
    expr
}

/// Plain object expression over a member list.
pub fn object_expr(members: &[Member], parent: &str, naming: &Naming, indent: &str) -> String {
    let entries: Vec<&Member> = members.iter().collect();
    object_body(&entries, parent, naming, indent)
}

fn object_body(members: &[&Member], parent: &str, naming: &Naming, indent: &str) -> String {
    if members.is_empty() {
        return "z.object({})".to_string();
    }

    let mut out = String::from("z.object({\n");
    for member in members {
        out.push_str(indent);
        out.push_str(&object_key(&member.name));
        out.push_str(": ");
        out.push_str(&member_expr(member, parent, naming).render());
        out.push_str(",\n");
    }
    out.push_str("})");
    out
}

fn record_expr(map: &MapShape, parent: &str, naming: &Naming) -> String {
    format!(
        "z.record({}, {})",
        type_expr(&map.key, parent, naming).render(),
        type_expr(&map.value, parent, naming).render()
    )
}

/// Union expression.
///
/// A union with exactly one complex member and no primitive members aliases
/// that member directly, discriminated or not. Otherwise a union wrapper
/// lists every member's expression; a discriminant switches the wrapper to
/// a discriminated union.
pub fn union_expr(union: &UnionDecl, naming: &Naming) -> String {
    let complex: Vec<&Member> = union
        .members
        .iter()
        .filter(|m| matches!(m.ty, TypeRef::Named(_)))
        .collect();

    if complex.len() == 1 && complex.len() == union.members.len() {
        return member_expr(complex[0], &union.name, naming).render();
    }

    let variants: Vec<String> = union
        .members
        .iter()
        .map(|m| member_expr(m, &union.name, naming).render())
        .collect();

    match &union.discriminant {
        Some(prop) => format!(
            "z.discriminatedUnion(\"{}\", [{}])",
            prop,
            variants.join(", ")
        ),
        None => format!("z.union([{}])", variants.join(", ")),
    }
}

/// Enumeration expression: the declared literal values, verbatim, in order.
pub fn enum_expr(e: &EnumDecl) -> String {
    let values: Vec<String> = e.values.iter().map(literal).collect();
    format!("z.enum([{}])", values.join(", "))
}

/// Render an object key, quoting it when it is not a bare identifier.
fn object_key(name: &str) -> String {
    let mut chars = name.chars();
    let bare = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if bare {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
