//! Fixed-point dependency resolution.
//!
//! Proxy classes must be declared after the proxies they reference: the base
//! class proxy and the proxy type of every direct field. Instead of building
//! an explicit dependency graph, the resolver sweeps the not-yet-scheduled
//! composites in declaration order and schedules every one whose
//! prerequisites are already in the emitted set, repeating until a pass
//! schedules nothing. The set only ever grows, so the loop terminates; a pass
//! that schedules nothing while composites remain pending is a genuine
//! unsatisfiable dependency (typically a cycle or an undeclared type).

use indexmap::IndexSet;
use srgen_ir::{Composite, SchemaIr};

use crate::TypeMapper;

/// The monotonically growing set of proxy type names already scheduled.
#[derive(Debug, Clone, Default)]
pub struct EmittedSet {
    names: IndexSet<String>,
}

impl EmittedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the set with every fundamental's proxy name and the
    /// vector-of-that-proxy, so dependency tracking never hangs on types that
    /// are implemented by hand.
    pub fn seeded(ir: &SchemaIr, mapper: &dyn TypeMapper) -> Self {
        let mut set = Self::new();
        for name in srgen_ir::FUNDAMENTAL_TYPES
            .iter()
            .copied()
            .chain(ir.meta.enums.iter().map(String::as_str))
        {
            let pt = mapper.map_name(name);
            set.insert(format!("VectorProxy<{}>", pt));
            set.insert(pt);
        }
        set
    }

    /// Insert a proxy name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Check whether a proxy name has been scheduled.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of scheduled proxy names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been scheduled.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the scheduled names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// The resolved emission order plus the final emitted set.
#[derive(Debug, Clone)]
pub struct EmissionPlan {
    /// Composite type names in a dependency-sound order.
    pub order: Vec<String>,
    /// Every proxy name scheduled during resolution, seeds included.
    pub emitted: EmittedSet,
}

impl EmissionPlan {
    /// Iterate the scheduled composites in emission order.
    pub fn iter_ordered<'a>(&'a self, ir: &'a SchemaIr) -> impl Iterator<Item = &'a Composite> {
        self.order.iter().filter_map(|name| ir.composite(name))
    }
}

/// A composite that could not be scheduled, with the prerequisites that
/// were still missing when resolution stalled.
#[derive(Debug, Clone)]
pub struct UnresolvedDependency {
    /// The blocked composite type name.
    pub type_name: String,
    /// The proxy names it needs that never became available.
    pub missing: Vec<String>,
}

/// Resolve the schema into a total emission order.
///
/// # Errors
///
/// Returns one [`UnresolvedDependency`] per still-pending composite when a
/// full pass makes no progress.
pub fn resolve(
    ir: &SchemaIr,
    mapper: &dyn TypeMapper,
) -> Result<EmissionPlan, Vec<UnresolvedDependency>> {
    let mut emitted = EmittedSet::seeded(ir, mapper);
    let mut order = Vec::with_capacity(ir.len());
    let mut pending: Vec<&Composite> = ir.composites.iter().collect();

    loop {
        let mut any_scheduled = false;
        let mut still_pending = Vec::new();

        for composite in pending {
            if missing_prerequisites(composite, mapper, &emitted).is_empty() {
                let pt = mapper.map_name(&composite.name);
                emitted.insert(format!("VectorProxy<{}>", pt));
                emitted.insert(pt);
                order.push(composite.name.clone());
                any_scheduled = true;
            } else {
                still_pending.push(composite);
            }
        }

        pending = still_pending;

        if pending.is_empty() {
            return Ok(EmissionPlan { order, emitted });
        }

        if !any_scheduled {
            return Err(pending
                .into_iter()
                .map(|composite| UnresolvedDependency {
                    type_name: composite.name.clone(),
                    missing: missing_prerequisites(composite, mapper, &emitted),
                })
                .collect());
        }
    }
}

/// The proxy names `composite` needs that are not yet in the emitted set.
///
/// Fixed-array fields are exempt from dependency tracking; arrays are
/// restricted to fundamental elements, which is enforced by a validate lint.
fn missing_prerequisites(
    composite: &Composite,
    mapper: &dyn TypeMapper,
    emitted: &EmittedSet,
) -> Vec<String> {
    let mut missing = IndexSet::new();

    if let Some(base) = &composite.base {
        let base_pt = mapper.map_name(base);
        if !emitted.contains(&base_pt) {
            missing.insert(base_pt);
        }
    }

    for field in &composite.fields {
        if field.ty.is_fixed_array() {
            continue;
        }
        let pt = mapper.map(&field.ty);
        if !emitted.contains(&pt) {
            missing.insert(pt);
        }
    }

    missing.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use srgen_ir::{Field, RecordMeta, TypeDescriptor};

    use super::*;
    use crate::CppProxyMapper;

    fn make_meta() -> RecordMeta {
        RecordMeta {
            namespace: "caf".into(),
            root: "StandardRecord".into(),
            root_proxy: "SRProxy".into(),
            enums: vec![],
            includes: vec![],
            include_base: String::new(),
            record_include: None,
        }
    }

    fn composite(name: &str, base: Option<&str>, fields: Vec<(&str, TypeDescriptor)>) -> Composite {
        Composite {
            name: name.into(),
            base: base.map(String::from),
            fields: fields
                .into_iter()
                .map(|(n, ty)| Field { name: n.into(), ty })
                .collect(),
        }
    }

    fn fundamental(name: &str) -> TypeDescriptor {
        TypeDescriptor::Fundamental(name.into())
    }

    #[test]
    fn test_seed_contains_fundamental_proxies() {
        let ir = SchemaIr {
            meta: make_meta(),
            composites: vec![],
        };
        let mapper = CppProxyMapper::new(&ir.meta);
        let set = EmittedSet::seeded(&ir, &mapper);

        assert!(set.contains("Proxy<int>"));
        assert!(set.contains("VectorProxy<Proxy<int>>"));
        assert!(set.contains("Proxy<ULong64_t>"));
        assert!(set.contains("TVector3Proxy"));
        assert!(!set.contains("SRTrackProxy"));
    }

    #[test]
    fn test_forward_reference_resolves_in_two_passes() {
        // A and C have no composite dependencies; B needs a vector of C's
        // proxy and inherits from A, so it lands in the second pass.
        let ir = SchemaIr {
            meta: make_meta(),
            composites: vec![
                composite(
                    "A",
                    None,
                    vec![("x", fundamental("int")), ("y", fundamental("float"))],
                ),
                composite("C", None, vec![("w", fundamental("int"))]),
                composite(
                    "B",
                    Some("A"),
                    vec![(
                        "z",
                        TypeDescriptor::Sequence(Box::new(TypeDescriptor::Composite("C".into()))),
                    )],
                ),
            ],
        };
        let mapper = CppProxyMapper::new(&ir.meta);

        let plan = resolve(&ir, &mapper).unwrap();
        assert_eq!(plan.order, vec!["A", "C", "B"]);
        assert!(plan.emitted.contains("BProxy"));
        assert!(plan.emitted.contains("VectorProxy<BProxy>"));
    }

    #[test]
    fn test_base_cycle_fails_with_both_named() {
        let ir = SchemaIr {
            meta: make_meta(),
            composites: vec![
                composite("D", Some("E"), vec![]),
                composite("E", Some("D"), vec![]),
            ],
        };
        let mapper = CppProxyMapper::new(&ir.meta);

        let unresolved = resolve(&ir, &mapper).unwrap_err();
        assert_eq!(unresolved.len(), 2);
        assert_eq!(unresolved[0].type_name, "D");
        assert_eq!(unresolved[0].missing, vec!["EProxy"]);
        assert_eq!(unresolved[1].type_name, "E");
        assert_eq!(unresolved[1].missing, vec!["DProxy"]);
    }

    #[test]
    fn test_fixed_array_field_is_exempt() {
        let ir = SchemaIr {
            meta: make_meta(),
            composites: vec![composite(
                "F",
                None,
                vec![(
                    "arr",
                    TypeDescriptor::FixedArray {
                        elem: Box::new(fundamental("int")),
                        size: 4,
                    },
                )],
            )],
        };
        let mapper = CppProxyMapper::new(&ir.meta);

        let plan = resolve(&ir, &mapper).unwrap();
        assert_eq!(plan.order, vec!["F"]);
    }

    #[test]
    fn test_undeclared_field_type_reported() {
        let ir = SchemaIr {
            meta: make_meta(),
            composites: vec![composite(
                "SRTrack",
                None,
                vec![("vtx", TypeDescriptor::Composite("SRVertex".into()))],
            )],
        };
        let mapper = CppProxyMapper::new(&ir.meta);

        let unresolved = resolve(&ir, &mapper).unwrap_err();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].missing, vec!["SRVertexProxy"]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let ir = SchemaIr {
            meta: make_meta(),
            composites: vec![
                composite("A", None, vec![]),
                composite("B", Some("A"), vec![]),
                composite("C", Some("A"), vec![]),
            ],
        };
        let mapper = CppProxyMapper::new(&ir.meta);

        let first = resolve(&ir, &mapper).unwrap();
        let second = resolve(&ir, &mapper).unwrap();
        assert_eq!(first.order, second.order);
        // Declaration order breaks the tie between B and C.
        assert_eq!(first.order, vec!["A", "B", "C"]);
    }
}
