//! Per-artifact file emitters.
//!
//! Each emitter implements [`srgen_core::GeneratedFile`] and renders one
//! output file from the shared emission plan. The emitters are structurally
//! isomorphic: they iterate the same ordered composites and the same direct
//! field lists, differing only in the text they produce.

mod copy_header;
mod copy_impl;
mod equals_header;
mod equals_impl;
mod proxy_header;
mod proxy_impl;

pub use copy_header::CopyHeader;
pub use copy_impl::CopyImpl;
pub use equals_header::EqualsHeader;
pub use equals_impl::EqualsImpl;
pub use proxy_header::ProxyHeader;
pub use proxy_impl::ProxyImpl;

use srgen_ir::{Composite, Field, RecordMeta, SchemaIr};

/// The warning banner at the top of every generated file.
pub(crate) fn disclaimer(meta: &RecordMeta) -> String {
    format!(
        "// This file was auto-generated by srgen.\n\
         // DO NOT EDIT IT DIRECTLY.\n\
         // For documentation of the fields see the regular {}.h",
        meta.root
    )
}

/// An `#include` line for a configured entry. Angle-bracket entries are
/// passed through; everything else is quoted.
pub(crate) fn include_line(entry: &str) -> String {
    if entry.starts_with('<') {
        format!("#include {}", entry)
    } else {
        format!("#include \"{}\"", entry)
    }
}

/// An `#include` line for another generated file, prefixed with the
/// configured include base.
pub(crate) fn local_include(meta: &RecordMeta, file: &str) -> String {
    if meta.include_base.is_empty() {
        format!("#include \"{}\"", file)
    } else {
        format!("#include \"{}/{}\"", meta.include_base, file)
    }
}

/// Direct fields of `composite` followed by each ancestor's direct fields,
/// nearest ancestor first. This is the field traversal shared by the
/// equality and copy emitters; every ancestor level contributes exactly
/// once.
pub(crate) fn fields_with_inherited<'a>(
    ir: &'a SchemaIr,
    composite: &'a Composite,
) -> Vec<&'a Field> {
    let mut fields: Vec<&Field> = composite.fields.iter().collect();
    let mut current = ir.base_of(composite);
    while let Some(base) = current {
        fields.extend(base.fields.iter());
        current = ir.base_of(base);
    }
    fields
}
