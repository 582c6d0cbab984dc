//! Compilation pipeline for proxy generation.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the
//! compilation phases from manifest parsing to code generation:
//!
//! - Explicit phase boundaries (validate → lower → resolve)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use srgen_codegen::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let ctx = pipeline.run(manifest)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = Generator::from_context(&ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
