//! `faunats.toml` project configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "faunats.toml";

/// Root of `faunats.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub schema: SchemaConfig,
    pub output: OutputConfig,
}

/// `[schema]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Path of the collection dump (JSON or TOML)
    pub path: Option<PathBuf>,
}

/// `[output]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the generated file is written to
    pub dir: PathBuf,
    /// Name of the generated file
    pub file: String,
    /// Name of the collection-to-types mapping interface
    pub mapping_interface: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated"),
            file: "fauna-types.ts".to_string(),
            mapping_interface: "CollectionsTypeMapping".to_string(),
        }
    }
}

impl Config {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load a configuration file, falling back to defaults when it does not
    /// exist and was not explicitly requested.
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self> {
        let path = path.as_ref();
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        Self::open(path)
    }

    /// Parse configuration from a string with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::toml(CONFIG_FILE, e, content, filename))
    }

    /// Full path of the generated file.
    pub fn output_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.file)
    }
}
