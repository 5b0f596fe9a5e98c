use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use faunats_core::WriteResult;
use faunats_schema::{RecordSchema, SchemaFile};
use faunats_typescript::{Generator, LanguageCodegen};

use super::{UnwrapOrExit, describe};
use crate::settings::SourceArgs;

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output directory (defaults to [output].dir or ./generated)
    #[arg(short, long, env = "FAUNATS_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Output file name (defaults to [output].file or fauna-types.ts)
    #[arg(long, env = "FAUNATS_OUTPUT_FILE")]
    pub file: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut config = self.source.load_config();
        if let Some(dir) = &self.output {
            config.output.dir = dir.clone();
        }
        if let Some(file) = &self.file {
            config.output.file = file.clone();
        }
        let settings = self.source.resolve(config)?;

        let schema = SchemaFile::open(&settings.schema).unwrap_or_exit();
        let records = schema.collections();
        let output_dir = settings.config.output.dir.clone();
        let target = settings.config.output_path();
        let generator = Generator::with_output(records, settings.config.output);

        if self.dry_run {
            Self::run_preview(&generator, &target)
        } else {
            Self::run_generation(&generator, records, &output_dir)
        }
    }

    fn run_generation(
        generator: &Generator,
        records: &[RecordSchema],
        output_dir: &Path,
    ) -> Result<()> {
        let result = generator
            .generate(output_dir)
            .wrap_err("Failed to generate TypeScript declarations")?;

        println!("Collections ({}):", result.generated.len());
        for record in records.iter().filter(|r| r.fields.is_some()) {
            println!("  {}", describe(record));
        }

        if !result.skipped.is_empty() {
            println!();
            println!("Skipped (no fields defined):");
            for name in &result.skipped {
                println!("  - {}", name);
            }
        }

        println!();
        for (path, write) in &result.files {
            match write {
                WriteResult::Written => println!("Generated: {}", path.display()),
                WriteResult::Unchanged => println!("Up to date: {}", path.display()),
            }
        }

        Ok(())
    }

    fn run_preview(generator: &Generator, target: &Path) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("Would write: {}", target.display());

        Ok(())
    }
}
