//! The proxy class declarations header.

use std::path::{Path, PathBuf};

use srgen_codegen::{CodeBuilder, CppProxyMapper, EmissionPlan, TypeMapper};
use srgen_core::GeneratedFile;
use srgen_ir::SchemaIr;

use super::{disclaimer, include_line};

/// `<RootProxy>.h`: one proxy class per composite, in dependency order.
pub struct ProxyHeader<'a> {
    pub ir: &'a SchemaIr,
    pub plan: &'a EmissionPlan,
    pub mapper: &'a CppProxyMapper,
}

impl GeneratedFile for ProxyHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.h", self.ir.meta.root_proxy))
    }

    fn render(&self) -> String {
        let meta = &self.ir.meta;

        let mut b = CodeBuilder::cpp()
            .line(&disclaimer(meta))
            .blank()
            .line("#pragma once")
            .blank()
            .each(&meta.includes, |b, inc| b.line(&include_line(inc)).blank())
            .line(&format!("namespace {}", meta.namespace))
            .line("{")
            .blank();

        for composite in self.plan.iter_ordered(self.ir) {
            let pt = self.mapper.map_name(&composite.name);

            b = b.line(&format!("/// Proxy for \\ref {}", composite.name));
            b = match &composite.base {
                Some(base) => {
                    b.line(&format!("class {}: public {}", pt, self.mapper.map_name(base)))
                }
                None => b.line(&format!("class {}", pt)),
            };

            b = b
                .line("{")
                .line("public:")
                .indent()
                .line(&format!(
                    "{}(TDirectory* d, TTree* tr, const std::string& name, const long& base, int offset);",
                    pt
                ))
                .line(&format!("{}(const {}&) = delete;", pt, pt))
                .line(&format!("{}(const {}&&) = delete;", pt, pt))
                .blank()
                .each(&composite.fields, |b, field| {
                    b.line(&format!("{} {};", self.mapper.map(&field.ty), field.name))
                })
                .dedent()
                .line("};")
                .blank();
        }

        b.line("} // end namespace").build()
    }
}
