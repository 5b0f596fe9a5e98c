//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use faunats_core::{ScalarType, WriteResult};

/// Trait for mapping schema types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// Map a scalar keyword to a language-specific type string
    fn map_scalar(&self, scalar: ScalarType) -> &'static str;

    /// Type used for an opaque, non-inlined document reference
    fn reference_type(&self) -> &'static str;

    /// Map a scalar keyword given as text, passing unknown names through
    fn map_scalar_keyword<'a>(&self, keyword: &'a str) -> &'a str {
        match ScalarType::from_keyword(keyword) {
            Some(scalar) => self.map_scalar(scalar),
            None => keyword,
        }
    }
}

/// Trait for language-specific declaration generators.
pub trait LanguageCodegen {
    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug)]
pub struct GenerateResult {
    /// Files that were handed to the sink, with the outcome of each write
    pub files: Vec<(PathBuf, WriteResult)>,
    /// Collections that produced declarations
    pub generated: Vec<String>,
    /// Collections skipped because they define no fields
    pub skipped: Vec<String>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
