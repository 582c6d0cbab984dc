//! The proxy constructor implementation file.

use std::path::{Path, PathBuf};

use srgen_codegen::{CodeBuilder, CppProxyMapper, EmissionPlan, TypeMapper};
use srgen_core::GeneratedFile;
use srgen_ir::SchemaIr;

use super::{disclaimer, local_include};

/// The shared path-joining helper, emitted once ahead of all constructors.
const JOIN_FUNC: &str = r#"std::string Join(const std::string& a, const std::string& b)
{
  if(a.empty()) return b;
  return a+"."+b;
}"#;

/// `<RootProxy>.cxx`: one constructor per composite, chaining to the base
/// and handing each direct field its dotted branch path.
pub struct ProxyImpl<'a> {
    pub ir: &'a SchemaIr,
    pub plan: &'a EmissionPlan,
    pub mapper: &'a CppProxyMapper,
}

impl GeneratedFile for ProxyImpl<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.cxx", self.ir.meta.root_proxy))
    }

    fn render(&self) -> String {
        let meta = &self.ir.meta;

        let mut b = CodeBuilder::cpp()
            .line(&disclaimer(meta))
            .blank()
            .line(&local_include(meta, &format!("{}.h", meta.root_proxy)))
            .blank()
            .line(&format!("namespace {}{{", meta.namespace))
            .blank()
            .line(JOIN_FUNC)
            .blank();

        for composite in self.plan.iter_ordered(self.ir) {
            let pt = self.mapper.map_name(&composite.name);

            b = b.line(&format!(
                "{}::{}(TDirectory* d, TTree* tr, const std::string& name, const long& base, int offset)",
                pt, pt
            ));

            let mut inits = Vec::new();
            if let Some(base_name) = &composite.base {
                inits.push(format!(
                    "{}(d, tr, name, base, offset)",
                    self.mapper.map_name(base_name)
                ));
            }
            for field in &composite.fields {
                inits.push(format!(
                    "{}(d, tr, Join(name, \"{}\"), base, offset)",
                    field.name, field.name
                ));
            }

            if !inits.is_empty() {
                b = b.line(&format!("  : {}", inits.join(",\n    ")));
            }

            b = b.line("{").line("}").blank();
        }

        b.line("} // namespace").build()
    }
}
