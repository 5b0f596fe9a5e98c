//! Loading collection schemas from JSON and TOML dumps.

use std::path::{Path, PathBuf};

use faunats_core::{is_identifier, is_reserved_type_name};
use miette::SourceSpan;
use serde::Deserialize;

use crate::{Error, RecordSchema, Result};

/// Listing shape: `{ "data": [ ...collections ] }`.
#[derive(Deserialize)]
struct JsonListing {
    data: Vec<RecordSchema>,
}

#[derive(Deserialize)]
struct TomlDump {
    #[serde(default)]
    collections: Vec<RecordSchema>,
}

/// Supported schema dump formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            other => Err(Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            })),
        }
    }
}

/// A schema dump loaded from disk, with its ordered collections.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: PathBuf,
    collections: Vec<RecordSchema>,
}

impl SchemaFile {
    /// Open and parse a schema dump, picking the format from the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let collections = parse_str(&content, &filename, format)?;

        Ok(Self { path, collections })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed collections, in file order.
    pub fn collections(&self) -> &[RecordSchema] {
        &self.collections
    }
}

/// Parse a schema dump in the given format.
pub fn parse_str(content: &str, filename: &str, format: Format) -> Result<Vec<RecordSchema>> {
    match format {
        Format::Json => from_json_str(content, filename),
        Format::Toml => from_toml_str(content, filename),
    }
}

/// Parse a JSON dump: either an array of collections or a `{ "data": [...] }` listing.
pub fn from_json_str(content: &str, filename: &str) -> Result<Vec<RecordSchema>> {
    let collections = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<RecordSchema>>(content)
    } else {
        serde_json::from_str::<JsonListing>(content).map(|listing| listing.data)
    }
    .map_err(|e| Error::json(e, content, filename))?;

    validate(&collections, content, filename)?;
    Ok(collections)
}

/// Parse a TOML dump made of `[[collections]]` tables.
pub fn from_toml_str(content: &str, filename: &str) -> Result<Vec<RecordSchema>> {
    let dump: TomlDump =
        toml::from_str(content).map_err(|e| Error::toml("schema TOML", e, content, filename))?;

    validate(&dump.collections, content, filename)?;
    Ok(dump.collections)
}

fn validate(collections: &[RecordSchema], src: &str, filename: &str) -> Result<()> {
    for (i, record) in collections.iter().enumerate() {
        let name = record.name.as_str();

        if let Some(reason) = invalid_name_reason(name) {
            let span = find_name_span(src, name, 0);
            return Err(Error::invalid_collection_name(
                name, reason, src, filename, span,
            ));
        }

        let earlier = collections[..i].iter().filter(|r| r.name == name).count();
        if earlier > 0 {
            let span = find_name_span(src, name, earlier);
            return Err(Error::duplicate_collection(name, src, filename, span));
        }
    }
    Ok(())
}

fn invalid_name_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("name cannot be empty")
    } else if !is_identifier(name) {
        Some("name must be a valid identifier")
    } else if is_reserved_type_name(name) {
        Some("name shadows a TypeScript built-in type")
    } else {
        None
    }
}

/// Find the `nth` quoted occurrence of a collection name in the source.
fn find_name_span(src: &str, name: &str, nth: usize) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", name);
    src.match_indices(&quoted)
        .nth(nth)
        // +1 to skip the opening quote
        .map(|(pos, _)| SourceSpan::from((pos + 1, name.len())))
}
