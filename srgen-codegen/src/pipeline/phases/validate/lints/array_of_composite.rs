//! Lint rejecting fixed arrays of composite elements.

use srgen_core::strip_scope;
use srgen_schema::{Manifest, RawType, parse_type};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on fixed-array fields with composite element types.
///
/// The dependency resolver skips array fields entirely, which is sound only
/// while array elements are fundamental. A composite element would be
/// silently mis-mapped, so it is rejected here instead.
pub struct ArrayOfCompositeLint;

impl Lint for ArrayOfCompositeLint {
    fn name(&self) -> &'static str {
        "array-of-composite"
    }

    fn description(&self) -> &'static str {
        "Reject fixed arrays whose element type is not fundamental"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (type_name, def) in &manifest.types {
            for field in &def.fields {
                let Ok(RawType::Array { elem, .. }) = parse_type(&field.ty) else {
                    continue;
                };

                let elem = strip_scope(&elem);
                let fundamental = srgen_ir::is_builtin_fundamental(elem)
                    || manifest.record.enums.iter().any(|e| e == elem);

                if !fundamental {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "field '{}' of '{}' is a fixed array of '{}'; array elements must be fundamental",
                                field.name, type_name, elem
                            ),
                        )
                        .at(format!("types.{}", type_name)),
                    );
                }
            }
        }
    }
}
