//! Dependency ordering.
//!
//! A layered topological sort over the collected targets: each pass emits
//! every target whose complex-type dependencies are already resolved, sorted
//! lexicographically within the layer. The alphabetical tie-break is a
//! deliberate determinism guarantee, not an accident: output order must not
//! depend on IR declaration order.
//!
//! Only direct references to known target names count as edges. An immediate
//! self-reference is not an edge at all; it is resolved downstream by a lazy
//! reference. A multi-target cycle cannot be ordered: the stuck targets are
//! reported in a diagnostic and appended, unordered, after everything
//! sortable.

use std::collections::BTreeSet;

use crate::error::CycleDiagnostic;

use super::collect::{SchemaTarget, TargetKind};

/// Result of ordering a target list.
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome<'ir> {
    /// Targets in emission order. On a cycle, the stuck targets follow the
    /// sortable ones in their original encounter order.
    pub ordered: Vec<SchemaTarget<'ir>>,

    /// Cycle diagnostic, when the sort could not fully resolve.
    pub cycle: Option<CycleDiagnostic>,
}

/// Names of the known targets the given target directly depends on.
///
/// References to names outside `known` are not edges; neither is a reference
/// to the target itself (compared case-insensitively).
pub fn direct_dependencies(target: &SchemaTarget<'_>, known: &BTreeSet<String>) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();

    let mut add = |name: &str| {
        if name.eq_ignore_ascii_case(&target.name) {
            return;
        }
        if let Some(found) = known.get(name) {
            deps.insert(found.clone());
        }
    };

    for member in target.members() {
        if let Some(name) = member.ty.named_target() {
            add(name);
        }
    }

    if let TargetKind::Type(ty) = &target.kind {
        if let Some(map) = &ty.map {
            if let Some(name) = map.key.named_target() {
                add(name);
            }
            if let Some(name) = map.value.named_target() {
                add(name);
            }
        }
    }

    deps
}

/// Order targets so every dependency precedes its dependents.
pub fn sort_targets(targets: Vec<SchemaTarget<'_>>) -> SortOutcome<'_> {
    let known: BTreeSet<String> = targets.iter().map(|t| t.name.clone()).collect();

    let mut remaining = targets;
    let mut resolved: BTreeSet<String> = BTreeSet::new();
    let mut ordered = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let (mut ready, stuck): (Vec<_>, Vec<_>) = remaining.into_iter().partition(|target| {
            direct_dependencies(target, &known)
                .iter()
                .all(|dep| resolved.contains(dep))
        });

        if ready.is_empty() {
            // No progress: everything left is part of a cycle.
            let names: Vec<String> = stuck.iter().map(|t| t.name.clone()).collect();
            ordered.extend(stuck);
            return SortOutcome {
                ordered,
                cycle: Some(CycleDiagnostic::new(names)),
            };
        }

        ready.sort_by(|a, b| a.name.cmp(&b.name));
        for target in ready {
            resolved.insert(target.name.clone());
            ordered.push(target);
        }
        remaining = stuck;
    }

    SortOutcome {
        ordered,
        cycle: None,
    }
}


// =============================================================================
// Property-Based Tests
// =============================================================================

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::compiler::collect::collect_targets;
    use crate::ir::{IrDocument, Member, ServiceIr, TypeDecl, TypeRef};
    use proptest::prelude::*;

    /// An acyclic random dependency graph: each type may reference only
    /// strictly lower-numbered types.
    fn arb_acyclic_doc() -> impl Strategy<Value = IrDocument> {
        (2usize..8)
            .prop_flat_map(|n| {
                let edges = proptest::collection::vec((1..n, 0..n), 0..n * 2);
                (Just(n), edges)
            })
            .prop_map(|(n, edges)| {
                let mut types: Vec<TypeDecl> =
                    (0..n).map(|i| TypeDecl::new(format!("T{}", i), vec![])).collect();
                for (from, to) in edges {
                    let to = to % from.max(1);
                    types[from].properties.push(Member::new(
                        format!("ref{}", to),
                        TypeRef::named(format!("T{}", to)),
                    ));
                }
                let mut service = ServiceIr::new("api");
                for ty in types {
                    service = service.with_type(ty);
                }
                IrDocument::single(service)
            })
    }

    proptest! {
        /// Acyclic graphs always sort fully, with every dependency before
        /// its dependent.
        #[test]
        fn prop_acyclic_sort_respects_edges(doc in arb_acyclic_doc()) {
            let outcome = sort_targets(collect_targets(&doc));
            prop_assert!(outcome.cycle.is_none());

            let position: std::collections::HashMap<String, usize> = outcome
                .ordered
                .iter()
                .enumerate()
                .map(|(i, t)| (t.name.clone(), i))
                .collect();
            let known: std::collections::BTreeSet<String> =
                position.keys().cloned().collect();

            for target in &outcome.ordered {
                for dep in direct_dependencies(target, &known) {
                    prop_assert!(position[&dep] < position[&target.name]);
                }
            }
        }

        /// The sort is a permutation: nothing is lost or duplicated.
        #[test]
        fn prop_sort_is_a_permutation(doc in arb_acyclic_doc()) {
            let input = collect_targets(&doc);
            let mut before: Vec<String> = input.iter().map(|t| t.name.clone()).collect();
            let outcome = sort_targets(input);
            let mut after: Vec<String> =
                outcome.ordered.iter().map(|t| t.name.clone()).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        /// Sorting twice from the same document yields the same order.
        #[test]
        fn prop_sort_is_deterministic(doc in arb_acyclic_doc()) {
            let a: Vec<String> = sort_targets(collect_targets(&doc))
                .ordered
                .iter()
                .map(|t| t.name.clone())
                .collect();
            let b: Vec<String> = sort_targets(collect_targets(&doc))
                .ordered
                .iter()
                .map(|t| t.name.clone())
                .collect();
            prop_assert_eq!(a, b);
        }
    }
}
