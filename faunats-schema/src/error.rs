use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the path given by --schema or the [schema] table of faunats.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema JSON")]
    #[diagnostic(code(faunats::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {what}")]
    #[diagnostic(code(faunats::toml_error))]
    Toml {
        what: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported schema format '{extension}'")]
    #[diagnostic(
        code(faunats::unsupported_format),
        help("schema files must end in .json or .toml")
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("duplicate collection '{name}'")]
    #[diagnostic(
        code(faunats::duplicate_collection),
        help("each collection may only appear once in a schema dump")
    )]
    DuplicateCollection {
        #[source_code]
        src: NamedSource<String>,
        #[label("defined again here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("invalid collection name '{name}'")]
    #[diagnostic(
        code(faunats::invalid_collection_name),
        help("{reason}. Collection names become TypeScript type names.")
    )]
    InvalidCollectionName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = if source.line() > 0 {
            let offset = SourceOffset::from_location(src, source.line(), source.column());
            Some(SourceSpan::new(offset, 0))
        } else {
            None
        };
        Box::new(Error::Json {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn toml(
        what: impl Into<String>,
        source: toml::de::Error,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            what: what.into(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a duplicate collection error
    pub fn duplicate_collection(
        name: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::DuplicateCollection {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
        })
    }

    /// Create an invalid collection name error
    pub fn invalid_collection_name(
        name: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidCollectionName {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }
}
