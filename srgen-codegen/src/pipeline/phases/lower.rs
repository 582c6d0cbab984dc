//! Lower phase - transforms the manifest into the schema IR.

use eyre::{Result, eyre};
use srgen_core::strip_scope;
use srgen_ir::{Composite, Field, RecordMeta, SchemaIr, TypeDescriptor};
use srgen_schema::{CompositeDef, Manifest, RawType, parse_type};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that transforms the manifest into the schema IR.
///
/// Scope qualifiers are stripped here, so everything downstream works with
/// unqualified names, and every field type string is classified into a
/// [`TypeDescriptor`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the manifest into the schema IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.ir = Some(lower_manifest(&ctx.manifest)?);
        Ok(())
    }
}

/// Lower a manifest into a schema IR.
fn lower_manifest(manifest: &Manifest) -> Result<SchemaIr> {
    let meta = lower_meta(manifest);
    let composites = manifest
        .types
        .iter()
        .map(|(name, def)| lower_composite(name, def, &meta))
        .collect::<Result<Vec<_>>>()?;

    Ok(SchemaIr { meta, composites })
}

/// Lower record hierarchy metadata from the manifest.
fn lower_meta(manifest: &Manifest) -> RecordMeta {
    RecordMeta {
        namespace: manifest.record.namespace.clone(),
        root: manifest.record.root.clone(),
        root_proxy: manifest.record.root_proxy.clone(),
        enums: manifest.record.enums.clone(),
        includes: manifest.record.includes.clone(),
        include_base: manifest.record.include_base.clone(),
        record_include: manifest.record.record_include.clone(),
    }
}

/// Lower a single composite type declaration.
fn lower_composite(name: &str, def: &CompositeDef, meta: &RecordMeta) -> Result<Composite> {
    let fields = def
        .fields
        .iter()
        .map(|field| {
            // Malformed type strings are rejected at the schema boundary; a
            // failure here means the manifest was built without validation.
            let raw = parse_type(&field.ty).map_err(|reason| {
                eyre!("field '{}' of '{}': {}", field.name, name, reason)
            })?;
            Ok(Field {
                name: field.name.clone(),
                ty: lower_type(&raw, meta),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Composite {
        name: name.to_string(),
        base: def.single_base().map(|b| strip_scope(b).to_string()),
        fields,
    })
}

/// Lower a parsed type spelling into a classified type descriptor.
fn lower_type(raw: &RawType, meta: &RecordMeta) -> TypeDescriptor {
    match raw {
        RawType::Named(name) => classify_name(name, meta),
        RawType::Vector(elem) => TypeDescriptor::Sequence(Box::new(lower_type(elem, meta))),
        RawType::Array { elem, size } => TypeDescriptor::FixedArray {
            elem: Box::new(classify_name(elem, meta)),
            size: *size,
        },
    }
}

/// Classify an unqualified type name as fundamental or composite.
fn classify_name(name: &str, meta: &RecordMeta) -> TypeDescriptor {
    let name = strip_scope(name);
    if meta.is_fundamental(name) {
        TypeDescriptor::Fundamental(name.to_string())
    } else {
        TypeDescriptor::Composite(name.to_string())
    }
}
