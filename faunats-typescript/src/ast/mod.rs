//! TypeScript AST builders for declarations, imports and exports.
//!
//! Nodes implement [`Renderable`](faunats_codegen::Renderable) and are
//! rendered through [`CodeBuilder`](faunats_codegen::CodeBuilder).

mod exports;
mod imports;
mod interface;
mod types;

pub use exports::Export;
pub use imports::Import;
pub use interface::Interface;
pub use types::{Field, ObjectType, TypeAlias};
