mod composite;
mod error;
mod file;
mod typeparse;
mod validate;

use std::path::Path;

pub use composite::{BaseSpec, CompositeDef, FieldDef};
pub use error::{Error, Result};
pub use file::RecordsToml;
use indexmap::IndexMap;
use serde::Deserialize;
pub use typeparse::{RawType, parse_type};

/// Root schema for records.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Record hierarchy metadata
    pub record: RecordConfig,

    /// Composite type declarations, in declaration order.
    ///
    /// Declaration order is significant: it is the tie-break used by the
    /// dependency resolver, so an `IndexMap` rather than a `HashMap`.
    #[serde(default)]
    pub types: IndexMap<String, CompositeDef>,
}

/// The `[record]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordConfig {
    /// C++ namespace wrapping the record types and their proxies.
    pub namespace: String,

    /// Name of the root composite of the hierarchy.
    pub root: String,

    /// Proxy name for the root composite. The root is the one type whose
    /// proxy name is not derived from its own name.
    #[serde(default = "default_root_proxy")]
    pub root_proxy: String,

    /// Named enumerations, treated as fundamentals.
    #[serde(default)]
    pub enums: Vec<String>,

    /// Extra `#include` lines for the declarations header.
    #[serde(default)]
    pub includes: Vec<String>,

    /// Path prefix used when generated files include each other.
    #[serde(default)]
    pub include_base: String,

    /// Header declaring the real record types, included by the equality and
    /// copy implementation files.
    #[serde(default)]
    pub record_include: Option<String>,
}

fn default_root_proxy() -> String {
    "SRProxy".to_string()
}

impl Manifest {
    /// Validate the manifest after parsing.
    ///
    /// This is the boundary validation: structural problems a TOML parse
    /// cannot express (multiple bases, malformed type spellings, names the
    /// generated C++ could not compile). Schema-level consistency (unknown
    /// types, array-of-composite) is checked by the pipeline lints.
    pub fn validate(&self, src: &str, filename: &str) -> Result<()> {
        for (name, def) in &self.types {
            validate_name(name, "type", src, filename)?;

            if def.base_count() > 1 {
                return Err(Error::multiple_bases(
                    name,
                    def.base_count(),
                    src,
                    filename,
                    validate::find_name_span(src, name),
                ));
            }

            for field in &def.fields {
                validate_name(&field.name, "field", src, filename)?;

                if let Err(reason) = parse_type(&field.ty) {
                    return Err(Error::invalid_type_string(
                        name,
                        &field.name,
                        &field.ty,
                        reason,
                        src,
                        filename,
                        validate::find_name_span(src, &field.ty),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Check if a composite type is declared.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }
}

impl std::str::FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(content: &str) -> Result<Self> {
        parse_str(content)
    }
}

/// Validate that a name is a valid C++ identifier
fn validate_name(name: &str, context: &str, src: &str, filename: &str) -> Result<()> {
    let span = validate::find_name_span(src, name);

    if validate::is_cpp_keyword(name) {
        return Err(Error::reserved_keyword(name, context, src, filename, span));
    }

    if let Some(reason) = validate::validate_identifier(name) {
        return Err(Error::invalid_identifier(
            name, context, reason, src, filename, span,
        ));
    }

    Ok(())
}

/// Parse a records.toml file from the given path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let filename = path.display().to_string();
    parse_str_with_filename(&content, &filename)
}

/// Parse a records.toml from a string (uses "records.toml" as default filename)
pub fn parse_str(content: &str) -> Result<Manifest> {
    parse_str_with_filename(content, "records.toml")
}

/// Parse a records.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    manifest.validate(content, filename)?;
    Ok(manifest)
}
