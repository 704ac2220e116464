//! Type-safe wrappers for key material

pub mod key;

// Re-export main types
pub use key::Key;
