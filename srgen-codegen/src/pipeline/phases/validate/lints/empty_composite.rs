//! Lint for composites that declare nothing.

use srgen_schema::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns on composites with no fields and no base.
///
/// Such a type still generates an empty proxy class; usually it means a
/// `[[fields]]` table was misspelled.
pub struct EmptyCompositeLint;

impl Lint for EmptyCompositeLint {
    fn name(&self) -> &'static str {
        "empty-composite"
    }

    fn description(&self) -> &'static str {
        "Warn on composite types with no fields and no base"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (type_name, def) in &manifest.types {
            if def.fields.is_empty() && def.single_base().is_none() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("composite '{}' has no fields and no base", type_name),
                    )
                    .at(format!("types.{}", type_name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_manifest(content: &str) -> Manifest {
        srgen_schema::parse_str(content).expect("Failed to parse test manifest")
    }

    #[test]
    fn test_empty_composite_warns() {
        let manifest = parse_manifest(
            r#"
            [record]
            namespace = "caf"
            root = "StandardRecord"

            [types.SRHeader]
        "#,
        );

        let mut diagnostics = Vec::new();
        EmptyCompositeLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_base_only_composite_accepted() {
        let manifest = parse_manifest(
            r#"
            [record]
            namespace = "caf"
            root = "StandardRecord"

            [types.SRTrack]
            base = "SRObject"
        "#,
        );

        let mut diagnostics = Vec::new();
        EmptyCompositeLint.check(&manifest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
