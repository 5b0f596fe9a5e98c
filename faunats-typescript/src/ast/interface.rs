//! TypeScript interface builder.

use faunats_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::Field;

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    fields: Vec<Field>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a field.
    pub fn field_with(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        if self.fields.is_empty() {
            let line = format!("export interface {} {{}}", self.name);
            fragments.push(CodeFragment::Line(line));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("export interface {} {{", self.name),
                body: self
                    .fields
                    .iter()
                    .map(|field| CodeFragment::Line(field.to_line()))
                    .collect(),
                close: Some("}".to_string()),
            });
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("Mapping")
            .field_with(Field::new("User", "{ main: User }"))
            .field_with(Field::new("Post", "{ main: Post }").optional())
            .build();
        assert_eq!(
            i,
            "export interface Mapping {\n  User: { main: User };\n  Post?: { main: Post };\n}\n"
        );
    }

    #[test]
    fn test_interface_with_doc() {
        let i = Interface::new("Types")
            .doc("all types")
            .field_with(Field::new("x", "number"))
            .build();
        assert!(i.starts_with("/** all types */\nexport interface Types {"));
    }
}
