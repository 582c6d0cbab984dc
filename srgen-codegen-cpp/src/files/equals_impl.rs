//! Implementation file for the structural equality checks.

use std::path::{Path, PathBuf};

use srgen_codegen::{CodeBuilder, CppProxyMapper, EmissionPlan, TypeMapper};
use srgen_core::GeneratedFile;
use srgen_ir::SchemaIr;

use super::{disclaimer, fields_with_inherited, include_line, local_include};

/// The generic comparison primitives. Floating point values compare equal
/// when bit-identical or when both are NaN, so a round-tripped record with
/// NaN sentinels doesn't report spurious differences.
const GENERIC_IMPLS: &str = r#"template<class T>
typename std::enable_if<!std::is_floating_point<T>::value, bool>::type
AreEqual(T x, T y)
{
  return x == y;
}

template<class T>
typename std::enable_if<std::is_floating_point<T>::value, bool>::type
AreEqual(T x, T y)
{
  return x == y || (isnan(x) && isnan(y));
}

template<class T> void CheckEquals(const Proxy<T>& x, const T& y)
{
  if(!AreEqual(x.GetValue(), y)){
    std::cout << x.Name() << " differs: "
              << x.GetValue() << " vs " << y << std::endl;
  }
}

void CheckEquals(const Proxy<ULong64_t>& x, const size_t& y)
{
  CheckEquals(x, ULong64_t(y));
}

template<class T, class U> void CheckEquals(const VectorProxy<T>& x,
                                            const std::vector<U>& y)
{
  if(x.size() != y.size()){
    std::cout << x.Name() << ".size() differs. "
              << x.size() << " vs " << y.size() << std::endl;
  }

  for(unsigned int i = 0; i < std::min(x.size(), y.size()); ++i)
    CheckEquals(x[i], y[i]);
}

template<class T, unsigned int N> void CheckEquals(const ArrayProxy<T, N>& x,
                                                   const T* y)
{
  for(unsigned int i = 0; i < N; ++i) CheckEquals(x[i], y[i]);
}"#;

/// `CheckEquals.cxx`: one `CheckEquals` overload per composite comparing its
/// direct fields and every inherited field, plus the generic primitives.
pub struct EqualsImpl<'a> {
    pub ir: &'a SchemaIr,
    pub plan: &'a EmissionPlan,
    pub mapper: &'a CppProxyMapper,
}

impl GeneratedFile for EqualsImpl<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("CheckEquals.cxx")
    }

    fn render(&self) -> String {
        let meta = &self.ir.meta;

        let mut b = CodeBuilder::cpp()
            .line(&disclaimer(meta))
            .blank()
            .line(&local_include(meta, "CheckEquals.h"))
            .blank()
            .line(&local_include(meta, &format!("{}.h", meta.root_proxy)))
            .blank();

        if let Some(record_include) = &meta.record_include {
            b = b.line(&include_line(record_include)).blank();
        }

        b = b
            .line("#include <cmath>")
            .line("#include <iostream>")
            .line("#include <type_traits>")
            .blank()
            .line(&format!("namespace {}{{", meta.namespace))
            .blank();

        for composite in self.plan.iter_ordered(self.ir) {
            let pt = self.mapper.map_name(&composite.name);

            b = b
                .line(&format!(
                    "void CheckEquals(const {}& srProxy, const {}& sr)",
                    pt, composite.name
                ))
                .line("{")
                .each(fields_with_inherited(self.ir, composite), |b, field| {
                    b.line(&format!(
                        "  CheckEquals(srProxy.{}, sr.{});",
                        field.name, field.name
                    ))
                })
                .line("}")
                .blank();
        }

        b.line(GENERIC_IMPLS).blank().line("} // namespace").build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::testutil::compile;

    fn render(manifest: &str) -> String {
        let compiled = compile(manifest);
        EqualsImpl {
            ir: &compiled.ir,
            plan: &compiled.plan,
            mapper: &compiled.mapper,
        }
        .render()
    }

    #[test]
    fn test_nan_tolerant_float_comparison() {
        let content = render(
            r#"
            [record]
            namespace = "caf"
            root = "StandardRecord"

            [types.StandardRecord]
            [[types.StandardRecord.fields]]
            name = "run"
            type = "int"
        "#,
        );

        // Two NaNs compare equal; anything else falls back to ==
        assert!(content.contains("return x == y || (isnan(x) && isnan(y));"));
        // Length mismatch is reported, then elements compared up to the shorter
        assert!(content.contains(".size() differs. \""));
        assert!(content.contains("i < std::min(x.size(), y.size())"));
        // Fixed arrays compare exactly N elements
        assert!(content.contains("for(unsigned int i = 0; i < N; ++i) CheckEquals(x[i], y[i]);"));
    }

    #[test]
    fn test_per_type_function_recurses_into_base() {
        let content = render(
            r#"
            [record]
            namespace = "caf"
            root = "StandardRecord"
            record_include = "StandardRecord.h"

            [types.StandardRecord]
            [[types.StandardRecord.fields]]
            name = "run"
            type = "int"

            [types.SRObject]
            [[types.SRObject.fields]]
            name = "id"
            type = "int"

            [types.SRTrack]
            base = "SRObject"
            [[types.SRTrack.fields]]
            name = "len"
            type = "float"
        "#,
        );

        assert!(content.contains("#include \"StandardRecord.h\""));
        assert!(content.contains(
            "void CheckEquals(const SRTrackProxy& srProxy, const SRTrack& sr)\n{\n  CheckEquals(srProxy.len, sr.len);\n  CheckEquals(srProxy.id, sr.id);\n}\n"
        ));
    }
}
