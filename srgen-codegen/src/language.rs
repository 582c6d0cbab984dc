//! Backend abstractions for code generation.

use std::path::{Path, PathBuf};

use eyre::Result;
use srgen_ir::TypeDescriptor;

/// Trait for language-specific proxy generators.
///
/// Implement this trait to emit the proxy hierarchy in a new target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "cpp")
    fn language(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Paths of the files that were written
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping schema type descriptors to proxy type names.
///
/// Implementations must be deterministic and side-effect free: the dependency
/// resolver calls them repeatedly and relies on equal inputs giving equal
/// names.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a (possibly scope-qualified) type name to its proxy type name
    fn map_name(&self, name: &str) -> String;

    /// Map a type descriptor to its proxy type name
    fn map(&self, ty: &TypeDescriptor) -> String;
}
