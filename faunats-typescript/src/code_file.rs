//! CodeFile abstraction for structured TypeScript file generation.

use faunats_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a TypeScript file.
///
/// Organizes code into three sections: imports, body, and exports.
/// Sections and body elements are separated by blank lines.
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leading comment line (rendered as `// text`).
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Add an export statement. Empty exports are dropped.
    pub fn export(mut self, export: Export) -> Self {
        if !export.is_empty() {
            self.exports.push(export);
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let sections = [
            self.header
                .iter()
                .map(|line| vec![CodeFragment::Line(format!("// {}", line))])
                .collect::<Vec<_>>(),
            self.imports.iter().map(|i| i.to_fragments()).collect(),
            self.body.clone(),
            self.exports.iter().map(|e| e.to_fragments()).collect(),
        ];

        let mut builder = CodeBuilder::new(indent);
        let mut first_section = true;
        for (kind, section) in sections.iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            if !first_section {
                builder.push_blank();
            }
            first_section = false;

            // body elements get a blank line between each other
            let spaced = kind == 2;
            for (i, fragments) in section.iter().enumerate() {
                if spaced && i > 0 {
                    builder.push_blank();
                }
                for fragment in fragments {
                    builder.apply_fragment(fragment.clone());
                }
            }
        }

        builder.build()
    }
}
