//! Built-in pipeline phases.

mod lower;
mod resolve;
mod validate;

pub use lower::LowerPhase;
pub use resolve::ResolvePhase;
pub use validate::{Lint, LintInfo, ValidatePhase, lints};
