//! IR model definitions.
//!
//! These structures form a fully materialized, read-only snapshot of an
//! interface description. The compiler never mutates them; a generation run
//! is a pure function of one `IrDocument`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::rules::Rule;

/// Root IR document for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrDocument {
    /// Services in declaration order.
    #[serde(default)]
    pub services: Vec<ServiceIr>,
}

impl IrDocument {
    /// Create a document from a single service.
    pub fn single(service: ServiceIr) -> Self {
        Self {
            services: vec![service],
        }
    }
}

/// One service: a named bundle of types, enums, unions and interfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIr {
    /// Service name.
    pub name: String,

    /// Named data types.
    #[serde(default)]
    pub types: Vec<TypeDecl>,

    /// Enumerations.
    #[serde(default)]
    pub enums: Vec<EnumDecl>,

    /// Union types.
    #[serde(default)]
    pub unions: Vec<UnionDecl>,

    /// Interfaces holding callable methods.
    #[serde(default)]
    pub interfaces: Vec<InterfaceDecl>,
}

impl ServiceIr {
    /// Create an empty service with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            enums: Vec::new(),
            unions: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// Add a data type.
    pub fn with_type(mut self, ty: TypeDecl) -> Self {
        self.types.push(ty);
        self
    }

    /// Add an enumeration.
    pub fn with_enum(mut self, e: EnumDecl) -> Self {
        self.enums.push(e);
        self
    }

    /// Add a union.
    pub fn with_union(mut self, u: UnionDecl) -> Self {
        self.unions.push(u);
        self
    }

    /// Add an interface.
    pub fn with_interface(mut self, i: InterfaceDecl) -> Self {
        self.interfaces.push(i);
        self
    }
}

/// A named data type with ordinary properties and an optional map shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDecl {
    /// Type name (pre-casing).
    pub name: String,

    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<Member>,

    /// Map shape, orthogonal to the ordinary property list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MapShape>,
}

impl TypeDecl {
    /// Create a type with the given properties.
    pub fn new(name: impl Into<String>, properties: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            properties,
            map: None,
        }
    }

    /// Attach a map shape.
    pub fn with_map(mut self, map: MapShape) -> Self {
        self.map = Some(map);
        self
    }
}

/// Map shape attached to a type: keyed values plus a set of keys that must
/// always be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapShape {
    /// Key type.
    pub key: TypeRef,

    /// Value type.
    pub value: TypeRef,

    /// Keys that are required to exist in every instance.
    #[serde(default)]
    pub required_keys: Vec<String>,
}

impl MapShape {
    /// Create a map shape with no required keys.
    pub fn new(key: TypeRef, value: TypeRef) -> Self {
        Self {
            key,
            value,
            required_keys: Vec::new(),
        }
    }

    /// Add a required key.
    pub fn with_required_key(mut self, key: impl Into<String>) -> Self {
        self.required_keys.push(key.into());
        self
    }
}

/// One value node: a property of a type, a method parameter, or a union
/// member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member name.
    pub name: String,

    /// Referenced type, primitive or named.
    #[serde(rename = "type")]
    pub ty: TypeRef,

    /// Whether the value is a list of the referenced type.
    #[serde(default)]
    pub is_array: bool,

    /// Whether the value accepts an explicit null.
    #[serde(default)]
    pub nullable: bool,

    /// Whether the value must be present. Optionality is derived as the
    /// negation of this flag.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Fixed literal value. When set, validation rules are not applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,

    /// Default literal applied when the value is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Validation rules in declaration order. Rule declaration order does
    /// not influence emitted segment order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

fn default_required() -> bool {
    true
}

impl Member {
    /// Create a required member with no modifiers.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_array: false,
            nullable: false,
            required: true,
            constant: None,
            default: None,
            rules: Vec::new(),
        }
    }

    /// Mark as an array of the referenced type.
    pub fn with_array(mut self, is_array: bool) -> Self {
        self.is_array = is_array;
        self
    }

    /// Mark as nullable.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Pin to a constant literal.
    pub fn with_constant(mut self, constant: Value) -> Self {
        self.constant = Some(constant);
        self
    }

    /// Set a default literal.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Add a validation rule.
    pub fn add_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Whether the member may be omitted.
    pub fn is_optional(&self) -> bool {
        !self.required
    }

    /// Whether the member refers to a primitive kind.
    pub fn is_primitive(&self) -> bool {
        matches!(self.ty, TypeRef::Primitive(_))
    }
}

/// Reference to a type: either a primitive kind or another declared schema
/// by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum TypeRef {
    /// A primitive kind.
    Primitive(PrimitiveKind),

    /// Reference to a named schema.
    Named(String),
}

impl TypeRef {
    /// Create a named reference.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// The referenced schema name, if this is a named reference.
    pub fn named_target(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name),
            TypeRef::Primitive(_) => None,
        }
    }
}

/// Primitive value kinds of the IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveKind {
    /// Text.
    String,

    /// 32-bit integer.
    Integer,

    /// 64-bit integer.
    Long,

    /// Floating point number.
    Double,

    /// True or false.
    Boolean,

    /// Calendar date.
    Date,

    /// Date with time component.
    DateTime,

    /// UUID string.
    Uuid,

    /// Base64-encoded binary payload.
    Base64,

    /// Unconstrained value.
    Unknown,

    /// The null literal itself.
    Null,
}

impl PrimitiveKind {
    /// Whether the kind carries numeric constraints.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Integer | PrimitiveKind::Long | PrimitiveKind::Double
        )
    }

    /// Whether the kind gets an integer refinement after the numeric base.
    pub fn is_integer(&self) -> bool {
        matches!(self, PrimitiveKind::Integer | PrimitiveKind::Long)
    }
}

/// A union type over primitive and named members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionDecl {
    /// Union name.
    pub name: String,

    /// Union members in declaration order.
    #[serde(default)]
    pub members: Vec<Member>,

    /// Discriminant property name, when the union is discriminated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminant: Option<String>,
}

impl UnionDecl {
    /// Create a plain union.
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            members,
            discriminant: None,
        }
    }

    /// Set the discriminant property name.
    pub fn with_discriminant(mut self, discriminant: impl Into<String>) -> Self {
        self.discriminant = Some(discriminant.into());
        self
    }
}

/// An enumeration over literal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDecl {
    /// Enum name.
    pub name: String,

    /// Literal values in declaration order, emitted verbatim.
    #[serde(default)]
    pub values: Vec<Value>,
}

impl EnumDecl {
    /// Create an enum from its values.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// An interface holding callable methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDecl {
    /// Interface name.
    pub name: String,

    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

impl InterfaceDecl {
    /// Create an interface from its methods.
    pub fn new(name: impl Into<String>, methods: Vec<MethodDecl>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }
}

/// One callable method. Methods with parameters become a synthetic
/// parameter-object schema target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDecl {
    /// Method name.
    pub name: String,

    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Member>,
}

impl MethodDecl {
    /// Create a method from its parameters.
    pub fn new(name: impl Into<String>, parameters: Vec<Member>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}
