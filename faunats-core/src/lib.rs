//! Core utilities and types for the faunats generator.
//!
//! This crate provides the scalar vocabulary of the schema language and the
//! file sink used to persist generated documents.

mod file;
mod scalar;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Fundamental types
pub use scalar::ScalarType;
// String utilities
pub use utils::{is_identifier, is_reserved_type_name};
