//! TypeScript export builder.

use faunats_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `export { ... };` statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Export several named items.
    pub fn names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only export (`export type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        // `export {}` is valid but meaningless
        if self.named.is_empty() {
            return Vec::new();
        }

        let type_kw = if self.type_only { "type " } else { "" };
        vec![CodeFragment::Line(format!(
            "export {}{{ {} }};",
            type_kw,
            self.named.join(", ")
        ))]
    }
}
