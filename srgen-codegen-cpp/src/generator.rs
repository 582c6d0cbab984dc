use std::path::Path;

use eyre::Result;
use srgen_codegen::pipeline::CompilationContext;
use srgen_codegen::{CppProxyMapper, EmissionPlan, GenerateResult, LanguageCodegen, PreviewFile};
use srgen_core::GeneratedFile;
use srgen_ir::SchemaIr;

use crate::files::{CopyHeader, CopyImpl, EqualsHeader, EqualsImpl, ProxyHeader, ProxyImpl};

/// C++ code generator that emits the proxy hierarchy.
///
/// All six output files are driven from one emission plan, so declarations,
/// constructors, equality checks, and copy routines stay mutually
/// consistent by construction.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    plan: &'a EmissionPlan,
    mapper: CppProxyMapper,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.artifacts()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.artifacts() {
            file.write(output_dir)?;
            result.written.push(file.path(output_dir));
        }
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(ir: &'a SchemaIr, plan: &'a EmissionPlan) -> Self {
        let mapper = CppProxyMapper::new(&ir.meta);
        Self { ir, plan, mapper }
    }

    /// Build a generator from a finished pipeline context.
    ///
    /// # Errors
    ///
    /// Returns an error if the lower or resolve phase did not run.
    pub fn from_context(ctx: &'a CompilationContext) -> Result<Self> {
        let ir = ctx
            .ir
            .as_ref()
            .ok_or_else(|| eyre::eyre!("pipeline did not produce a schema IR"))?;
        let plan = ctx
            .plan
            .as_ref()
            .ok_or_else(|| eyre::eyre!("pipeline did not produce an emission plan"))?;
        Ok(Self::new(ir, plan))
    }

    /// The six output files, in a fixed order.
    fn artifacts(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        vec![
            Box::new(ProxyHeader {
                ir: self.ir,
                plan: self.plan,
                mapper: &self.mapper,
            }),
            Box::new(ProxyImpl {
                ir: self.ir,
                plan: self.plan,
                mapper: &self.mapper,
            }),
            Box::new(EqualsHeader {
                ir: self.ir,
                plan: self.plan,
                mapper: &self.mapper,
            }),
            Box::new(EqualsImpl {
                ir: self.ir,
                plan: self.plan,
                mapper: &self.mapper,
            }),
            Box::new(CopyHeader {
                ir: self.ir,
                plan: self.plan,
                mapper: &self.mapper,
            }),
            Box::new(CopyImpl {
                ir: self.ir,
                plan: self.plan,
                mapper: &self.mapper,
            }),
        ]
    }
}
