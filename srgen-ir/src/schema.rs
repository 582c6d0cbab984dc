//! Schema Intermediate Representation.
//!
//! This module defines the unified IR for a record type hierarchy. The IR
//! serves as a clean abstraction layer between the manifest parsing and the
//! backend code generation.
//!
//! # Architecture
//!
//! ```text
//! records.toml → Manifest (parsing) → SchemaIr (lowering) → Generator (codegen)
//! ```

use serde::Serialize;

use crate::types::{TypeDescriptor, is_builtin_fundamental};

/// Schema IR - unified representation for code generation.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaIr {
    /// Record hierarchy metadata.
    pub meta: RecordMeta,
    /// Composite types, in declaration order.
    pub composites: Vec<Composite>,
}

/// Record hierarchy metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RecordMeta {
    /// C++ namespace wrapping the record types and their proxies.
    pub namespace: String,
    /// Name of the root composite type of the hierarchy.
    pub root: String,
    /// Proxy name for the root composite (a fixed special case, not derived).
    pub root_proxy: String,
    /// Named enumerations, treated as fundamentals.
    pub enums: Vec<String>,
    /// Extra `#include` lines for the declarations header.
    pub includes: Vec<String>,
    /// Path prefix used when generated files include each other.
    pub include_base: String,
    /// Header declaring the real record types, included by the equality and
    /// copy implementation files.
    pub record_include: Option<String>,
}

/// A composite record type with named fields and at most one base type.
#[derive(Debug, Clone, Serialize)]
pub struct Composite {
    /// Unique type name (unqualified).
    pub name: String,
    /// The zero-or-one base composite. Multiple inheritance is rejected at
    /// the schema boundary and never reaches the IR.
    pub base: Option<String>,
    /// Direct fields, in declaration order. Inherited fields are reached by
    /// recursing into the base, never duplicated.
    pub fields: Vec<Field>,
}

/// A named field with its declared type descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: TypeDescriptor,
}

impl SchemaIr {
    /// Look up a composite by unqualified name.
    pub fn composite(&self, name: &str) -> Option<&Composite> {
        self.composites.iter().find(|c| c.name == name)
    }

    /// The base composite of `composite`, if it declares one and the base is
    /// defined in this schema.
    pub fn base_of(&self, composite: &Composite) -> Option<&Composite> {
        composite.base.as_deref().and_then(|b| self.composite(b))
    }

    /// Number of composite types in the schema.
    pub fn len(&self) -> usize {
        self.composites.len()
    }

    /// Returns true if the schema declares no composites.
    pub fn is_empty(&self) -> bool {
        self.composites.is_empty()
    }
}

impl RecordMeta {
    /// Check whether an (unqualified) type name is a fundamental for this
    /// schema: a built-in scalar/string/external value type or one of the
    /// declared enumerations.
    pub fn is_fundamental(&self, name: &str) -> bool {
        is_builtin_fundamental(name) || self.enums.iter().any(|e| e == name)
    }
}

impl Composite {
    /// Returns true if this composite declares a base type.
    pub fn has_base(&self) -> bool {
        self.base.is_some()
    }

    /// Look up a direct field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
