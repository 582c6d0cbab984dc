//! Built-in lints for schema validation.

mod array_of_composite;
mod duplicate_field;
mod empty_composite;
mod missing_root;

pub use array_of_composite::ArrayOfCompositeLint;
pub use duplicate_field::DuplicateFieldLint;
pub use empty_composite::EmptyCompositeLint;
pub use missing_root::MissingRootLint;
