//! Type descriptors for schema fields.

use serde::Serialize;

/// Built-in scalar and value types that are assumed to have pre-implemented
/// proxies, so they never form part of the dependency tree.
///
/// `TVector3` is an external value type with a hand-written proxy; it is
/// treated like a fundamental for dependency purposes.
pub const FUNDAMENTAL_TYPES: &[&str] = &[
    "int",
    "float",
    "double",
    "bool",
    "unsigned int",
    "short",
    "short int",
    "short unsigned int",
    "long",
    "unsigned long",
    "long unsigned int",
    "long long int",
    "char",
    "unsigned char",
    "size_t",
    "std::string",
    "TVector3",
];

/// Check whether an (unqualified) type name is a built-in fundamental.
///
/// Declared enumerations are also fundamentals, but they are schema-specific;
/// see [`RecordMeta::is_fundamental`](crate::RecordMeta::is_fundamental).
pub fn is_builtin_fundamental(name: &str) -> bool {
    FUNDAMENTAL_TYPES.contains(&name)
}

/// The declared type of a schema field.
///
/// Proxy type names are never stored; they are derived on demand from a
/// descriptor so that structurally equal descriptors always map to the same
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeDescriptor {
    /// A built-in scalar, string, external value type, or named enumeration.
    /// Fundamentals are always considered pre-emitted.
    Fundamental(String),
    /// A named record type defined by the schema.
    Composite(String),
    /// A variable-length ordered collection of the element type.
    Sequence(Box<TypeDescriptor>),
    /// A fixed-length array. Only fundamental element types are supported;
    /// arrays of composites are rejected at validation.
    FixedArray {
        elem: Box<TypeDescriptor>,
        size: u32,
    },
}

impl TypeDescriptor {
    /// The raw (unmapped) type name for named descriptors, as written in the
    /// schema, including any namespace qualification.
    ///
    /// For a fixed array this is the element's raw name; sequences have no
    /// single raw name and return `None`.
    pub fn raw_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Fundamental(name) | TypeDescriptor::Composite(name) => Some(name),
            TypeDescriptor::FixedArray { elem, .. } => elem.raw_name(),
            TypeDescriptor::Sequence(_) => None,
        }
    }

    /// Returns true for fixed-array descriptors, which are exempt from
    /// dependency tracking.
    pub fn is_fixed_array(&self) -> bool {
        matches!(self, TypeDescriptor::FixedArray { .. })
    }

    /// Render the C++ spelling of this descriptor, for reports.
    pub fn cpp_spelling(&self) -> String {
        match self {
            TypeDescriptor::Fundamental(name) | TypeDescriptor::Composite(name) => name.clone(),
            TypeDescriptor::Sequence(elem) => format!("std::vector<{}>", elem.cpp_spelling()),
            TypeDescriptor::FixedArray { elem, size } => {
                format!("{}[{}]", elem.cpp_spelling(), size)
            }
        }
    }
}
