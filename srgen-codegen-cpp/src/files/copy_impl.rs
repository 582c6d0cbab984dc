//! Implementation file for the structural copy routines.

use std::path::{Path, PathBuf};

use srgen_codegen::{CodeBuilder, CppProxyMapper, EmissionPlan, TypeMapper};
use srgen_core::GeneratedFile;
use srgen_ir::SchemaIr;

use super::{disclaimer, fields_with_inherited, include_line, local_include};

/// The generic copy primitives. Scalars assign through the proxy; vectors
/// resize the destination then copy elementwise; fixed arrays copy exactly N
/// elements.
const GENERIC_IMPLS: &str = r#"template<class T> void CopyRecord(const T& from, Proxy<T>& to)
{
  to = from;
}

void CopyRecord(const size_t& from, Proxy<ULong64_t>& to)
{
  to = from;
}

template<class T, class U> void CopyRecord(const std::vector<U>& from,
                                           VectorProxy<T>& to)
{
  to.resize(from.size());
  for(unsigned int i = 0; i < from.size(); ++i) CopyRecord(from[i], to[i]);
}

template<class T, unsigned int N> void CopyRecord(const T* from,
                                                  ArrayProxy<T, N>& to)
{
  for(unsigned int i = 0; i < N; ++i) CopyRecord(from[i], to[i]);
}"#;

/// `CopyRecord.cxx`: one `CopyRecord` overload per composite copying its
/// direct fields and every inherited field, plus the generic primitives.
pub struct CopyImpl<'a> {
    pub ir: &'a SchemaIr,
    pub plan: &'a EmissionPlan,
    pub mapper: &'a CppProxyMapper,
}

impl GeneratedFile for CopyImpl<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("CopyRecord.cxx")
    }

    fn render(&self) -> String {
        let meta = &self.ir.meta;

        let mut b = CodeBuilder::cpp()
            .line(&disclaimer(meta))
            .blank()
            .line(&local_include(meta, "CopyRecord.h"))
            .blank()
            .line(&local_include(meta, &format!("{}.h", meta.root_proxy)))
            .blank();

        if let Some(record_include) = &meta.record_include {
            b = b.line(&include_line(record_include)).blank();
        }

        b = b.line(&format!("namespace {}{{", meta.namespace)).blank();

        for composite in self.plan.iter_ordered(self.ir) {
            let pt = self.mapper.map_name(&composite.name);

            b = b
                .line(&format!(
                    "void CopyRecord(const {}& from, {}& to)",
                    composite.name, pt
                ))
                .line("{")
                .each(fields_with_inherited(self.ir, composite), |b, field| {
                    b.line(&format!(
                        "  CopyRecord(from.{}, to.{});",
                        field.name, field.name
                    ))
                })
                .line("}")
                .blank();
        }

        b.line(GENERIC_IMPLS).blank().line("} // namespace").build()
    }
}
