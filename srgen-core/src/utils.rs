//! Shared string utilities for code generation.

/// Strip a namespace/scope qualifier from a C++ type name.
///
/// Namespace separators are irrelevant to type identity in the schema, so
/// `caf::SRTrack` and `SRTrack` name the same composite. The `std::` scope is
/// kept because standard-library names (e.g. `std::string`) are matched fully
/// qualified.
pub fn strip_scope(name: &str) -> &str {
    if name.starts_with("std::") {
        return name;
    }
    match name.rfind(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}
