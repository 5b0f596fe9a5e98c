//! Shared code generation utilities for the faunats generator.
//!
//! This crate provides language-agnostic building blocks used by the
//! TypeScript declaration generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
