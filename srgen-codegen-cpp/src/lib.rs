//! C++ backend for the srgen proxy generator.
//!
//! Emits six files covering the four derived artifacts, all driven from one
//! resolved emission plan:
//!
//! - `<RootProxy>.h` / `<RootProxy>.cxx` - proxy class declarations and
//!   constructors
//! - `CheckEquals.h` / `CheckEquals.cxx` - structural equality checks
//! - `CopyRecord.h` / `CopyRecord.cxx` - structural copy routines

mod generator;

pub mod files;

pub use generator::Generator;
pub use srgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
