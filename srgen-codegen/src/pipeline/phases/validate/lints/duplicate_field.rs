//! Lint for duplicate field detection.

use std::collections::HashSet;

use srgen_schema::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on duplicate field names within a composite.
pub struct DuplicateFieldLint;

impl Lint for DuplicateFieldLint {
    fn name(&self) -> &'static str {
        "duplicate-field"
    }

    fn description(&self) -> &'static str {
        "Detect duplicate field names within a composite type"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (type_name, def) in &manifest.types {
            let mut seen = HashSet::new();
            for field in &def.fields {
                if !seen.insert(field.name.as_str()) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("duplicate field '{}' in '{}'", field.name, type_name),
                        )
                        .at(format!("types.{}", type_name)),
                    );
                }
            }
        }
    }
}
