//! Intermediate Representation (IR) module.
//!
//! This module defines the language-agnostic data structures that describe
//! an interface: services composed of data types, enumerations, unions and
//! method parameter lists. The IR is consumed by the compiler to produce
//! validation-schema source text.

pub mod model;
pub mod rules;

pub use model::{
    EnumDecl, InterfaceDecl, IrDocument, MapShape, Member, MethodDecl, PrimitiveKind, ServiceIr,
    TypeDecl, TypeRef, UnionDecl,
};
pub use rules::{Constraint, Rule};
