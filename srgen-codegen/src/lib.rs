//! Language-agnostic engine for the srgen proxy generator.
//!
//! This crate turns a parsed schema manifest into an ordered emission plan
//! that backends (e.g. `srgen-codegen-cpp`) consume.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Compilation phases (validate → lower → resolve)
//! - [`resolver`] - Fixed-point dependency resolution and the emitted set
//! - [`mappers`] - Type descriptor to proxy type name mapping
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`language`] - Backend abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
pub mod language;
pub mod mappers;
pub mod pipeline;
pub mod resolver;

pub use builder::{CodeBuilder, Indent};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
pub use mappers::CppProxyMapper;
pub use resolver::{EmissionPlan, EmittedSet, UnresolvedDependency, resolve};
