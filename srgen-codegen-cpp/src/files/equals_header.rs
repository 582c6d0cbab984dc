//! Declarations header for the structural equality checks.

use std::path::{Path, PathBuf};

use srgen_codegen::{CodeBuilder, CppProxyMapper, EmissionPlan, TypeMapper};
use srgen_core::GeneratedFile;
use srgen_ir::SchemaIr;

use super::disclaimer;

/// Declarations for the generic equality primitives. Per-type overloads are
/// declared above these, one per emitted composite.
const GENERIC_DECLS: &str = r#"template<class T> class Proxy;
template<class T> void CheckEquals(const Proxy<T>& x, const T& y);
void CheckEquals(const Proxy<ULong64_t>& x, const size_t& y);

template<class T> class VectorProxy;
template<class T, class U> void CheckEquals(const VectorProxy<T>& x,
                                            const std::vector<U>& y);

template<class T, unsigned int N> class ArrayProxy;
template<class T, unsigned int N> void CheckEquals(const ArrayProxy<T, N>& x,
                                                   const T* y);"#;

/// `CheckEquals.h`: forward declarations and one `CheckEquals` overload per
/// composite, plus the generic primitives.
pub struct EqualsHeader<'a> {
    pub ir: &'a SchemaIr,
    pub plan: &'a EmissionPlan,
    pub mapper: &'a CppProxyMapper,
}

impl GeneratedFile for EqualsHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("CheckEquals.h")
    }

    fn render(&self) -> String {
        let meta = &self.ir.meta;

        let mut b = CodeBuilder::cpp()
            .line(&disclaimer(meta))
            .blank()
            .line("#pragma once")
            .blank()
            .line("#include <vector>")
            .blank()
            .line("#include \"RtypesCore.h\"")
            .blank()
            .line(&format!("namespace {}{{", meta.namespace))
            .blank();

        for composite in self.plan.iter_ordered(self.ir) {
            let pt = self.mapper.map_name(&composite.name);
            b = b
                .line(&format!("class {};", composite.name))
                .line(&format!("class {};", pt))
                .line(&format!(
                    "void CheckEquals(const {}& srProxy, const {}& sr);",
                    pt, composite.name
                ))
                .blank();
        }

        b.line(GENERIC_DECLS).blank().line("} // namespace").build()
    }
}
