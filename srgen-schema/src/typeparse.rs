//! Parsing of C++ field type spellings.
//!
//! Field `type` strings in records.toml use C++ spelling, matching what an
//! AST introspection dump produces: scalar names, `std::string`,
//! `std::vector<T>` (with an optional allocator argument, which is ignored),
//! and fixed arrays `T[N]` or `T [N]`.

/// A parsed type spelling, before the schema context classifies named types
/// into fundamentals and composites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawType {
    /// A (possibly namespace-qualified) type name.
    Named(String),
    /// `std::vector<elem>`.
    Vector(Box<RawType>),
    /// `elem[size]`. The element must be a named type.
    Array { elem: String, size: u32 },
}

/// Parse a C++ type spelling into a [`RawType`] tree.
///
/// # Errors
///
/// Returns a human-readable reason when the spelling is not one of the
/// supported forms.
pub fn parse_type(spelling: &str) -> Result<RawType, String> {
    let s = spelling.trim();
    if s.is_empty() {
        return Err("type is empty".to_string());
    }

    if let Some(rest) = s.strip_prefix("std::vector<") {
        let inner = vector_element(rest)?;
        return Ok(RawType::Vector(Box::new(parse_type(inner)?)));
    }

    if let Some(open) = s.find('[') {
        if !s.ends_with(']') {
            return Err("unterminated array size".to_string());
        }
        let elem = s[..open].trim();
        if elem.is_empty() {
            return Err("array has no element type".to_string());
        }
        if elem.contains('[') || elem.contains('<') {
            return Err("array element must be a named type".to_string());
        }
        let size_text = &s[open + 1..s.len() - 1];
        let size: u32 = size_text
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid array size", size_text.trim()))?;
        return Ok(RawType::Array {
            elem: elem.to_string(),
            size,
        });
    }

    if s.contains('<') || s.contains('>') || s.contains(',') {
        return Err("only std::vector is supported as a template".to_string());
    }

    Ok(RawType::Named(s.to_string()))
}

/// Extract the element spelling from the remainder of a `std::vector<`
/// spelling, dropping a trailing allocator argument if present.
fn vector_element(rest: &str) -> Result<&str, String> {
    let mut depth = 1usize;
    let mut elem_end = None;
    for (i, c) in rest.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    let end = elem_end.unwrap_or(i);
                    if i + 1 != rest.trim_end().len() {
                        return Err("trailing characters after '>'".to_string());
                    }
                    return Ok(&rest[..end]);
                }
            }
            // An allocator argument at the top level ends the element.
            ',' if depth == 1 => {
                if elem_end.is_none() {
                    elem_end = Some(i);
                }
            }
            _ => {}
        }
    }
    Err("unterminated std::vector<...>".to_string())
}
