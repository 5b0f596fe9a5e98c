mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use faunats_schema::RecordSchema;
use generate::GenerateCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for faunats_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// One-line summary of a collection, e.g. `User (3 fields, 1 computed)`.
fn describe(record: &RecordSchema) -> String {
    let fields = record.field_count();
    let computed = record.computed_field_count();
    let mut line = format!(
        "{} ({} field{}",
        record.name,
        fields,
        if fields == 1 { "" } else { "s" }
    );
    if computed > 0 {
        line.push_str(&format!(", {} computed", computed));
    }
    line.push(')');
    line
}

#[derive(Parser)]
#[command(name = "faunats")]
#[command(version)]
#[command(about = "Generate TypeScript types from Fauna collection schemas")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declarations from a collection dump
    Generate(GenerateCommand),

    /// Validate a collection dump without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
