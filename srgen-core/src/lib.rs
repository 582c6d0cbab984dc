//! Core utilities and types for the srgen proxy generator.
//!
//! This crate provides fundamental types and utilities used across
//! the srgen ecosystem.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::strip_scope;
