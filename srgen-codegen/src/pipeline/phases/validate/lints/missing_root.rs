//! Lint for a missing root composite.

use srgen_schema::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when the declared root type has no `[types]` entry.
pub struct MissingRootLint;

impl Lint for MissingRootLint {
    fn name(&self) -> &'static str {
        "missing-root"
    }

    fn description(&self) -> &'static str {
        "Check that the declared root composite is defined"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let root = &manifest.record.root;
        if !manifest.has_type(root) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!("root type '{}' is not declared in [types]", root),
                )
                .at("record.root".to_string()),
            );
        }
    }
}
