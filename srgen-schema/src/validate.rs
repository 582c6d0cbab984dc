//! Validation utilities for C++ identifiers

use miette::SourceSpan;

/// C++ keywords that cannot be used as type or field names.
///
/// Generated proxies reuse schema names verbatim as class and member names,
/// so a keyword here would produce uncompilable output.
pub(crate) const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char", "class",
    "const", "constexpr", "continue", "decltype", "default", "delete", "do", "double", "else",
    "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if",
    "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "nullptr",
    "operator", "or", "private", "protected", "public", "register", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "while",
];

/// Check if a name is a C++ reserved keyword
pub(crate) fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for patterns like `.name]`, `.name.`, or `"name"`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Search for common TOML patterns where the name appears
    let patterns = [
        format!(".{}]", name),   // [types.name]
        format!(".{}.", name),   // [types.name.fields]
        format!("\"{}\"", name), // name = "..." values
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot or quote
            let start = pos + 1;
            let len = name.len();
            return Some(SourceSpan::from((start, len)));
        }
    }

    // Fallback: just find the name anywhere (less precise)
    if let Some(pos) = src.find(name) {
        return Some(SourceSpan::from((pos, name.len())));
    }

    None
}

/// Validate that a name is a valid C++ identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    // Remaining characters must be alphanumeric or underscore
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }

    None
}
