use clap::Args;
use eyre::Result;
use faunats_schema::{RecordSchema, SchemaFile};

use super::{UnwrapOrExit, describe};
use crate::settings::SourceArgs;

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let settings = self.source.resolve(self.source.load_config())?;
        let schema = SchemaFile::open(&settings.schema).unwrap_or_exit();
        let records = schema.collections();

        let mut has_warnings = false;
        for record in records.iter().filter(|r| r.fields.is_none()) {
            has_warnings = true;
            eprintln!(
                "warning: collection '{}' defines no fields and will be skipped",
                record.name
            );
        }
        if has_warnings {
            println!();
        }

        println!("✓ {} is valid\n", schema.path().display());
        for line in Self::summary(records) {
            println!("  {}", line);
        }

        Ok(())
    }

    /// Heading plus one line per collection that produces declarations.
    fn summary(records: &[RecordSchema]) -> Vec<String> {
        let listed: Vec<_> = records.iter().filter(|r| r.fields.is_some()).collect();
        let skipped = records.len() - listed.len();

        let mut heading = format!("{} collection(s)", listed.len());
        if skipped > 0 {
            heading.push_str(&format!(", {} skipped", skipped));
        }
        heading.push(':');

        let mut lines = vec![heading];
        for record in listed {
            lines.push(format!("  {}", describe(record)));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_only_listed_collections() {
        let records = [
            RecordSchema::new("User").field("name", "String"),
            RecordSchema::without_fields("Audit"),
            RecordSchema::new("Post").field("title", "String"),
        ];

        let lines = CheckCommand::summary(&records);
        assert_eq!(
            lines,
            [
                "2 collection(s), 1 skipped:",
                "  User (1 field)",
                "  Post (1 field)",
            ]
        );
    }

    #[test]
    fn test_summary_without_skipped_collections() {
        let records = [RecordSchema::new("User").field("name", "String")];
        let lines = CheckCommand::summary(&records);
        assert_eq!(lines, ["1 collection(s):", "  User (1 field)"]);
    }
}
