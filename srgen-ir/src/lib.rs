//! Intermediate representation types for the srgen proxy generator.
//!
//! This crate provides the unified type definitions used across the srgen
//! code generation pipeline. These types serve as the single source of truth
//! for the record schema being mirrored.
//!
//! # Architecture
//!
//! ```text
//! records.toml (TOML) → srgen-schema (parsing) → srgen-ir (unified types) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Backend-agnostic (no C++ text concerns, only structure)
//! - Self-contained (no external dependencies beyond serde)

mod schema;
mod types;

pub use schema::{Composite, Field, RecordMeta, SchemaIr};
pub use types::{FUNDAMENTAL_TYPES, TypeDescriptor, is_builtin_fundamental};
