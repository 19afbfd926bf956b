//! Entity collection.
//!
//! One pass over the IR produces the flat list of schema targets to emit.
//! Encounter order per service: data types, then methods with parameters,
//! then unions, then enums. No deduplication happens here; duplicate names
//! are a precondition violation upstream.

use crate::ir::{EnumDecl, IrDocument, Member, MethodDecl, TypeDecl, UnionDecl};
use crate::naming::params_target_name;

/// One named schema target awaiting ordering and emission.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTarget<'ir> {
    /// Raw target name, pre-casing. Synthetic for method parameter objects.
    pub name: String,

    /// The IR entity behind the target.
    pub kind: TargetKind<'ir>,
}

/// The IR entity a target was collected from.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetKind<'ir> {
    /// A declared data type.
    Type(&'ir TypeDecl),

    /// A synthetic parameter object for one method.
    Method {
        /// Owning interface name.
        interface: &'ir str,
        /// The method whose parameters form the object.
        method: &'ir MethodDecl,
    },

    /// A union type.
    Union(&'ir UnionDecl),

    /// An enumeration.
    Enum(&'ir EnumDecl),
}

impl<'ir> SchemaTarget<'ir> {
    /// The members whose type references create dependency edges.
    ///
    /// Enums have none; unions contribute their member list; types and
    /// method objects contribute properties and parameters respectively.
    /// Map-shape references are handled separately by the sorter.
    pub fn members(&self) -> &'ir [Member] {
        match &self.kind {
            TargetKind::Type(ty) => &ty.properties,
            TargetKind::Method { method, .. } => &method.parameters,
            TargetKind::Union(union) => &union.members,
            TargetKind::Enum(_) => &[],
        }
    }
}

/// Collect every schema target from the document, in encounter order.
pub fn collect_targets(doc: &IrDocument) -> Vec<SchemaTarget<'_>> {
    let mut targets = Vec::new();

    for service in &doc.services {
        for ty in &service.types {
            targets.push(SchemaTarget {
                name: ty.name.clone(),
                kind: TargetKind::Type(ty),
            });
        }

        for interface in &service.interfaces {
            for method in &interface.methods {
                if method.parameters.is_empty() {
                    continue;
                }
                targets.push(SchemaTarget {
                    name: params_target_name(&interface.name, &method.name),
                    kind: TargetKind::Method {
                        interface: &interface.name,
                        method,
                    },
                });
            }
        }

        for union in &service.unions {
            targets.push(SchemaTarget {
                name: union.name.clone(),
                kind: TargetKind::Union(union),
            });
        }

        for e in &service.enums {
            targets.push(SchemaTarget {
                name: e.name.clone(),
                kind: TargetKind::Enum(e),
            });
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{InterfaceDecl, PrimitiveKind, ServiceIr, TypeRef};
    use serde_json::json;

    fn sample_service() -> ServiceIr {
        ServiceIr::new("api")
            .with_type(TypeDecl::new(
                "User",
                vec![Member::new("id", TypeRef::Primitive(PrimitiveKind::Uuid))],
            ))
            .with_enum(EnumDecl::new("Role", vec![json!("admin"), json!("user")]))
            .with_union(UnionDecl::new(
                "Id",
                vec![
                    Member::new("s", TypeRef::Primitive(PrimitiveKind::String)),
                    Member::new("n", TypeRef::Primitive(PrimitiveKind::Integer)),
                ],
            ))
            .with_interface(InterfaceDecl::new(
                "UserService",
                vec![
                    MethodDecl::new(
                        "getUser",
                        vec![Member::new("id", TypeRef::Primitive(PrimitiveKind::Uuid))],
                    ),
                    MethodDecl::new("listUsers", vec![]),
                ],
            ))
    }

    #[test]
    fn test_collection_category_order() {
        let doc = IrDocument::single(sample_service());
        let targets = collect_targets(&doc);
        let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["User", "UserService_getUser_params", "Id", "Role"]);
    }

    #[test]
    fn test_parameterless_method_is_skipped() {
        let doc = IrDocument::single(sample_service());
        let targets = collect_targets(&doc);
        assert!(!targets
            .iter()
            .any(|t| t.name.contains("listUsers")));
    }

    #[test]
    fn test_members_by_kind() {
        let doc = IrDocument::single(sample_service());
        let targets = collect_targets(&doc);

        let ty = targets.iter().find(|t| t.name == "User").unwrap();
        assert_eq!(ty.members().len(), 1);

        let e = targets.iter().find(|t| t.name == "Role").unwrap();
        assert!(e.members().is_empty());

        let u = targets.iter().find(|t| t.name == "Id").unwrap();
        assert_eq!(u.members().len(), 2);
    }

    #[test]
    fn test_multiple_services_concatenate_in_order() {
        let doc = IrDocument {
            services: vec![
                ServiceIr::new("a").with_type(TypeDecl::new("Alpha", vec![])),
                ServiceIr::new("b").with_type(TypeDecl::new("Beta", vec![])),
            ],
        };
        let targets = collect_targets(&doc);
        let names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
    }

    #[test]
    fn test_empty_document_yields_no_targets() {
        let doc = IrDocument { services: vec![] };
        assert!(collect_targets(&doc).is_empty());
    }
}
