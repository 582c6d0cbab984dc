//! Declarations header for the structural copy routines.

use std::path::{Path, PathBuf};

use srgen_codegen::{CodeBuilder, CppProxyMapper, EmissionPlan, TypeMapper};
use srgen_core::GeneratedFile;
use srgen_ir::SchemaIr;

use super::disclaimer;

/// Declarations for the generic copy primitives.
const GENERIC_DECLS: &str = r#"template<class T> class Proxy;
template<class T> void CopyRecord(const T& from, Proxy<T>& to);
void CopyRecord(const size_t& from, Proxy<ULong64_t>& to);

template<class T> class VectorProxy;
template<class T, class U> void CopyRecord(const std::vector<U>& from,
                                           VectorProxy<T>& to);

template<class T, unsigned int N> class ArrayProxy;
template<class T, unsigned int N> void CopyRecord(const T* from,
                                                  ArrayProxy<T, N>& to);"#;

/// `CopyRecord.h`: forward declarations and one `CopyRecord` overload per
/// composite, plus the generic primitives.
pub struct CopyHeader<'a> {
    pub ir: &'a SchemaIr,
    pub plan: &'a EmissionPlan,
    pub mapper: &'a CppProxyMapper,
}

impl GeneratedFile for CopyHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("CopyRecord.h")
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
                    "void CopyRecord(const {}& from, {}& to);",
                    composite.name, pt
                ))
                .blank();
        }

        b.line(GENERIC_DECLS).blank().line("} // namespace").build()
    }
}
