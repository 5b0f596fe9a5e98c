//! Collection schema loading and configuration for the faunats generator.
//!
//! This crate is the schema source of the generator: it reads collection
//! definitions exported from the database (JSON or TOML) into ordered
//! [`RecordSchema`] values, and parses the `faunats.toml` project file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod record;
mod source;

pub use config::{CONFIG_FILE, Config, OutputConfig, SchemaConfig};
pub use error::{Error, Result};
pub use record::{RecordSchema, Signatures, UNKNOWN_SIGNATURE};
pub use source::{Format, SchemaFile, from_json_str, from_toml_str, parse_str};
