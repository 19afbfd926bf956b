//! # zodgen
//!
//! A small compiler that translates a normalized interface-description model
//! (the IR) into TypeScript Zod schema source text.
//!
//! The pipeline is: entity collection, dependency ordering, expression
//! synthesis, text assembly. Every stage is a pure function of the IR
//! document; one generation run performs no I/O and holds no state across
//! runs.
//!
//! ## Usage
//!
//! ```rust
//! use zodgen::compiler::{generate, GeneratorConfig};
//! use zodgen::ir::{IrDocument, Member, PrimitiveKind, ServiceIr, TypeDecl, TypeRef};
//!
//! let doc = IrDocument::single(ServiceIr::new("api").with_type(TypeDecl::new(
//!     "User",
//!     vec![Member::new("id", TypeRef::Primitive(PrimitiveKind::Uuid))],
//! )));
//!
//! let (text, cycle) = generate(&doc, &GeneratorConfig::default());
//! assert!(cycle.is_none());
//! assert!(text.contains("export const UserSchema"));
//! ```
//!
//! ## Ordering guarantees
//!
//! Declarations come out in dependency order: a schema referenced by another
//! is always declared first. Within a dependency layer the order is
//! lexicographic by raw name, so output is byte-stable regardless of IR
//! declaration order. An immediate self-reference is emitted as a lazy
//! reference instead of an ordering edge; a genuine multi-schema cycle is
//! reported as a [`error::CycleDiagnostic`] and the stuck schemas are
//! appended unordered.

pub mod compiler;
pub mod error;
pub mod ir;
pub mod naming;

pub use compiler::{compile, generate, render, CompileOutput, Declaration, GeneratorConfig};
pub use error::CycleDiagnostic;
pub use ir::{IrDocument, ServiceIr};
pub use naming::Naming;
