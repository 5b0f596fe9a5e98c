//! Merging of `faunats.toml`, environment variables and command-line flags.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, eyre};
use faunats_schema::{CONFIG_FILE, Config};

use crate::commands::UnwrapOrExit;

/// Flags shared by every command that reads a collection dump.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to faunats.toml (defaults to ./faunats.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Collection dump to read (.json or .toml)
    #[arg(short, long, env = "FAUNATS_SCHEMA")]
    pub schema: Option<PathBuf>,
}

/// Effective settings after applying overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: Config,
    pub schema: PathBuf,
}

impl SourceArgs {
    /// Load the configuration file; paths it contains are taken relative to it.
    pub fn load_config(&self) -> Config {
        let (path, required) = match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };
        let mut config = Config::load(&path, required).unwrap_or_exit();

        let base = path.parent().unwrap_or(Path::new(""));
        config.schema.path = config.schema.path.map(|p| base.join(p));
        config.output.dir = base.join(&config.output.dir);
        config
    }

    /// Resolve settings from a loaded configuration.
    pub fn resolve(&self, config: Config) -> Result<Settings> {
        let schema = self
            .schema
            .clone()
            .or_else(|| config.schema.path.clone())
            .ok_or_else(|| {
                eyre!("no schema given; pass --schema or set [schema].path in {CONFIG_FILE}")
            })?;
        Ok(Settings { config, schema })
    }
}
