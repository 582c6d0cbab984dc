//! Raw composite-type tables as they appear in records.toml.

use serde::Deserialize;

/// A composite record type declaration.
///
/// ```toml
/// [types.SRTrack]
/// base = "SRObject"
///
/// [[types.SRTrack.fields]]
/// name = "len"
/// type = "float"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CompositeDef {
    /// The declared base class(es). A list is accepted by the parser purely
    /// so that multiple inheritance can be rejected with a precise
    /// diagnostic instead of a generic TOML type error.
    #[serde(default)]
    pub base: Option<BaseSpec>,

    /// Direct fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// One declared field.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    /// Member name, reused verbatim in the generated proxy.
    pub name: String,
    /// C++ type spelling (see the typeparse module for the grammar).
    #[serde(rename = "type")]
    pub ty: String,
}

/// Either a single base name or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BaseSpec {
    One(String),
    Many(Vec<String>),
}

impl CompositeDef {
    /// The single base name, once validation has ruled out multiple bases.
    ///
    /// A `Many` list with one entry is equivalent to a single name; an empty
    /// list is equivalent to no base.
    pub fn single_base(&self) -> Option<&str> {
        match &self.base {
            None => None,
            Some(BaseSpec::One(name)) => Some(name),
            Some(BaseSpec::Many(names)) => names.first().map(String::as_str),
        }
    }

    /// Number of declared bases.
    pub fn base_count(&self) -> usize {
        match &self.base {
            None => 0,
            Some(BaseSpec::One(_)) => 1,
            Some(BaseSpec::Many(names)) => names.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> CompositeDef {
        toml::from_str(content).expect("Failed to parse test composite")
    }

    #[test]
    fn test_single_base() {
        let def = parse(r#"base = "SRObject""#);
        assert_eq!(def.base_count(), 1);
        assert_eq!(def.single_base(), Some("SRObject"));
    }

    #[test]
    fn test_no_base() {
        let def = parse("fields = []");
        assert_eq!(def.base_count(), 0);
        assert_eq!(def.single_base(), None);
    }

    #[test]
    fn test_multiple_bases_parse_but_count() {
        let def = parse(r#"base = ["A", "B"]"#);
        assert_eq!(def.base_count(), 2);
    }

    #[test]
    fn test_fields_preserve_order() {
        let def = parse(
            r#"
            [[fields]]
            name = "z"
            type = "int"
            [[fields]]
            name = "a"
            type = "float"
        "#,
        );
        let names: Vec<_> = def.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
