//! Resolve phase - produces the dependency-sound emission order.

use eyre::{Result, bail, eyre};

use crate::mappers::CppProxyMapper;
use crate::pipeline::{CompilationContext, Diagnostic, Phase};
use crate::resolver;

/// Phase that resolves the emission order via fixed-point iteration.
///
/// On a stall, one error diagnostic per blocked composite is recorded,
/// naming exactly which prerequisite proxies never became available, before
/// failing the pipeline.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve the dependency-sound proxy emission order"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let result = {
            let ir = ctx
                .ir
                .as_ref()
                .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))?;
            let mapper = CppProxyMapper::new(&ir.meta);
            resolver::resolve(ir, &mapper)
        };

        match result {
            Ok(plan) => {
                ctx.plan = Some(plan);
                Ok(())
            }
            Err(unresolved) => {
                let mut details = Vec::with_capacity(unresolved.len());
                for dep in &unresolved {
                    let message = format!(
                        "cannot emit proxy for '{}': missing prerequisite(s) {}",
                        dep.type_name,
                        dep.missing.join(", ")
                    );
                    details.push(message.clone());
                    ctx.add_diagnostic(
                        Diagnostic::error("resolve", message)
                            .at(format!("types.{}", dep.type_name)),
                    );
                }
                bail!(
                    "dependency resolution stalled with {} type(s) pending:\n{}",
                    unresolved.len(),
                    details.join("\n")
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::LowerPhase;

    fn lowered_context(content: &str) -> CompilationContext {
        let manifest = srgen_schema::parse_str(content).expect("Failed to parse test manifest");
        let mut ctx = CompilationContext::new(manifest);
        LowerPhase.run(&mut ctx).expect("lower should succeed");
        ctx
    }

    #[test]
    fn test_resolve_sets_plan() {
        let mut ctx = lowered_context(
            r#"
            [record]
            namespace = "caf"
            root = "StandardRecord"

            [types.SRTrack]
            [[types.SRTrack.fields]]
            name = "len"
            type = "float"

            [types.StandardRecord]
            [[types.StandardRecord.fields]]
            name = "trks"
            type = "std::vector<SRTrack>"
        "#,
        );

        ResolvePhase.run(&mut ctx).expect("resolve should succeed");

        let plan = ctx.plan.as_ref().unwrap();
        assert_eq!(plan.order, vec!["SRTrack", "StandardRecord"]);
    }

    #[test]
    fn test_resolve_stall_records_diagnostics() {
        let mut ctx = lowered_context(
            r#"
            [record]
            namespace = "caf"
            root = "StandardRecord"

            [types.D]
            base = "E"

            [types.E]
            base = "D"
        "#,
        );

        let result = ResolvePhase.run(&mut ctx);

        assert!(result.is_err());
        assert_eq!(ctx.error_count(), 2);
        let messages: Vec<_> = ctx.errors().map(|d| d.message.clone()).collect();
        assert!(messages[0].contains("'D'") && messages[0].contains("EProxy"));
        assert!(messages[1].contains("'E'") && messages[1].contains("DProxy"));
    }
}
