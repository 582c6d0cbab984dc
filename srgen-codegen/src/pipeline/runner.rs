//! Pipeline orchestrator.

use eyre::Result;
use srgen_schema::Manifest;

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, ResolvePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (validate, lower, resolve) in order,
/// followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyCustomPhase);
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints the manifest, collects diagnostics
    /// 2. LowerPhase - transforms the manifest into the schema IR
    /// 3. ResolvePhase - produces the dependency-sound emission plan
    /// 4. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);

        // Built-in phases in execution order
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new()),
            Box::new(LowerPhase),
            Box::new(ResolvePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
