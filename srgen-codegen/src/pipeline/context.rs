//! Compilation context passed through pipeline phases.

use srgen_ir::SchemaIr;
use srgen_schema::Manifest;

use super::diagnostic::{Diagnostic, Severity};
use crate::resolver::EmissionPlan;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The original manifest being compiled.
    pub manifest: Manifest,
    /// The lowered schema IR (populated by LowerPhase).
    pub ir: Option<SchemaIr>,
    /// The resolved emission plan (populated by ResolvePhase).
    pub plan: Option<EmissionPlan>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a manifest.
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            ir: None,
            plan: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR out of the context, consuming it.
    ///
    /// # Panics
    ///
    /// Panics if the IR has not been set (i.e., LowerPhase hasn't run).
    pub fn take_ir(&mut self) -> SchemaIr {
        self.ir.take().expect("IR not set - did LowerPhase run?")
    }

    /// Take the emission plan out of the context, consuming it.
    ///
    /// # Panics
    ///
    /// Panics if the plan has not been set (i.e., ResolvePhase hasn't run).
    pub fn take_plan(&mut self) -> EmissionPlan {
        self.plan
            .take()
            .expect("EmissionPlan not set - did ResolvePhase run?")
    }
}
