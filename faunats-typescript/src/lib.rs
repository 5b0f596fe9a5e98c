//! TypeScript declaration generator for Fauna collection schemas.
//!
//! Field signatures such as `Array<Ref<User>>?` are translated into
//! TypeScript types, and every collection becomes a family of declarations:
//! a read type, create/update/replace input types and their wire-level
//! counterparts used with the driver.
//!
//! # Usage
//!
//! ```ignore
//! use faunats_schema::SchemaFile;
//! use faunats_typescript::{Generator, LanguageCodegen};
//! use std::path::Path;
//!
//! let schema = SchemaFile::open("collections.json")?;
//! let generator = Generator::new(schema.collections());
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/generated"))?;
//! ```
//!
//! Translating a single signature:
//!
//! ```
//! use faunats_typescript::{RenderMode, parse};
//!
//! assert_eq!(parse("Array<Ref<User>>", RenderMode::Main), "Array<User>");
//! assert_eq!(parse("Ref<User>?", RenderMode::FaunaCreate), "DocumentReference");
//! ```

mod code_file;
mod generator;
mod type_mapper;

pub mod ast;
pub mod emitter;
pub mod signature;

pub use code_file::CodeFile;
pub use emitter::{DeclarationSet, Declarations, Emitter, TypeNames, emit};
pub use faunats_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::{GENERATED_HEADER, GeneratedDocument, Generator};
pub use signature::{RenderMode, SignatureParser, parse};
pub use type_mapper::{
    DATE_STUB, DOCUMENT_REFERENCE, DRIVER_MODULE, TIME_STUB, TypeScriptTypeMapper,
};
