//! TypeScript declaration generator for collection schemas.

use std::path::Path;

use eyre::Result;
use faunats_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use faunats_core::File;
use faunats_schema::{OutputConfig, RecordSchema};

use crate::{
    TypeScriptTypeMapper,
    ast::{Export, Import, Interface},
    code_file::CodeFile,
    emitter::{Declarations, Emitter},
    type_mapper::DRIVER_MODULE,
};

/// Comment placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "Generated by faunats. Do not edit by hand.";

/// Everything the generated file is made of.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub import: Import,
    pub declarations: Declarations,
    pub mapping: Interface,
    pub export: Export,
}

impl GeneratedDocument {
    /// Render the complete, self-contained file content.
    pub fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(self.import.clone())
            .add_all(&self.declarations.sets)
            .add(&self.mapping)
            .export(self.export.clone())
            .render()
    }
}

/// TypeScript generator for a batch of collections.
pub struct Generator<'a> {
    records: &'a [RecordSchema],
    output: OutputConfig,
    mapper: TypeScriptTypeMapper,
}

impl LanguageCodegen for Generator<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.output.file.clone(),
            content: self.document().render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let path = output_dir.join(&self.output.file);
        let document = self.document();
        let write = File::new(&path, document.render()).write()?;

        Ok(GenerateResult {
            files: vec![(path, write)],
            generated: document
                .declarations
                .sets
                .iter()
                .map(|set| set.names.main.clone())
                .collect(),
            skipped: self.skipped(),
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(records: &'a [RecordSchema]) -> Self {
        Self::with_output(records, OutputConfig::default())
    }

    /// Create a generator using the file name and mapping interface name of
    /// an `[output]` configuration. The output directory is passed to
    /// [`LanguageCodegen::generate`].
    pub fn with_output(records: &'a [RecordSchema], output: OutputConfig) -> Self {
        Self {
            records,
            output,
            mapper: TypeScriptTypeMapper,
        }
    }

    /// Assemble the document without rendering it.
    pub fn document(&self) -> GeneratedDocument {
        let declarations = Emitter::new(self.mapper).emit(self.records);

        let import = self
            .mapper
            .driver_types()
            .into_iter()
            .fold(Import::new(DRIVER_MODULE).type_only(), Import::named);

        let mut mapping = Interface::new(&self.output.mapping_interface)
            .doc("Read, create, replace and update types of every collection.");
        for field in declarations.mapping_fields() {
            mapping = mapping.field_with(field);
        }

        let export = Export::new().names(declarations.export_names()).type_only();

        GeneratedDocument {
            import,
            declarations,
            mapping,
            export,
        }
    }

    /// Names of the collections that define no fields.
    pub fn skipped(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| record.fields.is_none())
            .map(|record| record.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use faunats_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    fn records() -> Vec<RecordSchema> {
        vec![
            RecordSchema::new("User")
                .field("name", "String")
                .field("age", "Long?")
                .field("bestFriend", "Ref<User>?"),
            RecordSchema::without_fields("Audit"),
        ]
    }

    #[test]
    fn test_document_imports_driver_types() {
        let records = records();
        let content = Generator::new(&records).document().render();
        let import = "import type { DateStub, DocumentReference, TimeStub } from \"fauna\";";
        assert!(content.contains(import));
    }

    #[test]
    fn test_document_sections_in_order() {
        let records = records();
        let content = Generator::new(&records).document().render();

        let positions: Vec<_> = [
            GENERATED_HEADER,
            "import type",
            "type User = {",
            "export interface CollectionsTypeMapping {",
            "export type { User,",
        ]
        .iter()
        .map(|needle| content.find(needle).unwrap())
        .collect();
        assert!(positions.is_sorted());
    }

    #[test]
    fn test_custom_mapping_interface_name() {
        let records = records();
        let output = OutputConfig {
            mapping_interface: "DbTypes".to_string(),
            ..OutputConfig::default()
        };
        let content = Generator::with_output(&records, output).document().render();
        assert!(content.contains("export interface DbTypes {"));
        assert!(content.contains("  User: { main: User; create: User_Create;"));
        assert!(content.contains("replace: User_Replace; update: User_Update };"));
    }

    #[test]
    fn test_skipped_records() {
        let records = records();
        let generator = Generator::new(&records);
        assert_eq!(generator.skipped(), ["Audit"]);
        assert!(!generator.document().render().contains("Audit"));
    }

    #[test]
    fn test_no_records_still_renders_import_and_mapping() {
        let content = Generator::new(&[]).document().render();
        assert!(content.contains("import type {"));
        assert!(content.contains("export interface CollectionsTypeMapping {}"));
        assert!(!content.contains("export type {"));
    }

    #[test]
    fn test_preview_uses_configured_file_name() {
        let records = records();
        let files = Generator::new(&records).preview();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "fauna-types.ts");
    }

    #[test]
    fn test_generate_writes_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("src").join("generated");
        let records = records();
        let generator = Generator::new(&records);

        let result = generator.generate(&out).unwrap();
        let (path, write) = &result.files[0];
        assert_eq!(*write, WriteResult::Written);
        assert_eq!(path, &out.join("fauna-types.ts"));
        assert_eq!(result.generated, ["User"]);
        assert_eq!(result.skipped, ["Audit"]);

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, generator.preview()[0].content);

        let again = generator.generate(&out).unwrap();
        assert_eq!(again.files[0].1, WriteResult::Unchanged);
    }
}
