//! Type mapper implementations.

mod cpp;

pub use cpp::CppProxyMapper;
