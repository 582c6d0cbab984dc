//! C++ proxy type mapper.

use srgen_core::strip_scope;
use srgen_ir::{RecordMeta, TypeDescriptor};

use crate::TypeMapper;

/// Maps schema types to the C++ proxy hierarchy type names.
///
/// The mapping is a fixed set of rules applied in priority order:
///
/// 1. scope qualifiers are stripped unless they are `std::`;
/// 2. the root record type maps to the configured root proxy name;
/// 3. `TVector3` maps to the hand-written `TVector3Proxy`;
/// 4. fundamentals and enums map to `Proxy<T>`, except `size_t`, which maps
///    to `Proxy<ULong64_t>` to pin down its width;
/// 5. `std::vector<T>` maps to `VectorProxy<mapped(T)>`;
/// 6. `T[N]` maps to `ArrayProxy<T, N>` with the *raw* element name;
/// 7. any other name maps to `<Name>Proxy`.
pub struct CppProxyMapper {
    root: String,
    root_proxy: String,
    enums: Vec<String>,
}

impl CppProxyMapper {
    /// Build a mapper for the given record hierarchy.
    pub fn new(meta: &RecordMeta) -> Self {
        Self {
            root: meta.root.clone(),
            root_proxy: meta.root_proxy.clone(),
            enums: meta.enums.clone(),
        }
    }

    fn is_fundamental(&self, name: &str) -> bool {
        srgen_ir::is_builtin_fundamental(name) || self.enums.iter().any(|e| e == name)
    }
}

impl TypeMapper for CppProxyMapper {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn map_name(&self, name: &str) -> String {
        let name = strip_scope(name);

        if name == self.root {
            return self.root_proxy.clone();
        }

        if name == "TVector3" {
            return "TVector3Proxy".to_string();
        }

        if self.is_fundamental(name) {
            if name == "size_t" {
                return "Proxy<ULong64_t>".to_string();
            }
            return format!("Proxy<{}>", name);
        }

        format!("{}Proxy", name)
    }

    fn map(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Fundamental(name) | TypeDescriptor::Composite(name) => {
                self.map_name(name)
            }
            TypeDescriptor::Sequence(elem) => format!("VectorProxy<{}>", self.map(elem)),
            TypeDescriptor::FixedArray { elem, size } => {
                // Array proxies wrap the raw element type, not its proxy.
                let raw = elem.raw_name().unwrap_or_default();
                format!("ArrayProxy<{}, {}>", strip_scope(raw), size)
            }
        }
    }
}
