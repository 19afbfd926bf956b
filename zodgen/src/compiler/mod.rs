//! The schema-expression compiler pipeline.
//!
//! Stages run in a fixed sequence: [`collect`] walks the IR into a flat
//! target list, [`sort`] orders it by complex-type dependencies, [`assemble`]
//! and [`expr`] synthesize each target's validator expression, and [`emit`]
//! renders the ordered declarations into source text.

pub mod assemble;
pub mod collect;
pub mod emit;
pub mod expr;
pub mod formatter;
pub mod sort;

pub use assemble::{enum_expr, object_expr, target_expr, union_expr};
pub use collect::{collect_targets, SchemaTarget, TargetKind};
pub use emit::{compile, generate, render, CompileOutput, Declaration, GeneratorConfig};
pub use expr::{member_expr, type_expr, ExprChain};
pub use formatter::format_source;
pub use sort::{direct_dependencies, sort_targets, SortOutcome};
