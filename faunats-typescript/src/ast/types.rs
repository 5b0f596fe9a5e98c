//! TypeScript object type and type alias builders.

use faunats_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A property of a TypeScript object type or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Render as a single `name?: type;` line.
    pub fn to_line(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {};", self.name, optional, self.ty)
    }
}

/// Builder for TypeScript object types (`type Foo = { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    doc: Option<String>,
    fields: Vec<Field>,
    exported: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the object type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{}type {} = {{}};",
                export, self.name
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{}type {} = {{", export, self.name),
                body: self
                    .fields
                    .iter()
                    .map(|field| CodeFragment::Line(field.to_line()))
                    .collect(),
                close: Some("};".to_string()),
            });
        }

        fragments
    }
}

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            exported: true,
        }
    }

    /// Alias wrapping another type in `Partial<...>`.
    pub fn partial(name: impl Into<String>, of: &str) -> Self {
        Self::new(name, format!("Partial<{}>", of))
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let line = format!("{}type {} = {};", export, self.name, self.ty);
        vec![CodeFragment::Line(line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_line() {
        assert_eq!(Field::new("name", "string").to_line(), "name: string;");
        assert_eq!(
            Field::new("age", "number").optional().to_line(),
            "age?: number;"
        );
    }

    #[test]
    fn test_object_type_empty() {
        let t = ObjectType::new("Empty").build();
        assert_eq!(t, "export type Empty = {};\n");
    }

    #[test]
    fn test_object_type_with_fields() {
        let t = ObjectType::new("User")
            .private()
            .fields([
                Field::new("name", "string"),
                Field::new("age", "number").optional(),
            ])
            .build();
        assert_eq!(t, "type User = {\n  name: string;\n  age?: number;\n};\n");
    }

    #[test]
    fn test_object_type_with_doc() {
        let t = ObjectType::new("User")
            .doc("A user document")
            .fields([Field::new("name", "string")])
            .build();
        assert!(t.starts_with("/** A user document */\nexport type User = {"));
    }

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("User_Replace", "User_Create").build();
        assert_eq!(t, "export type User_Replace = User_Create;\n");
    }

    #[test]
    fn test_partial_alias() {
        let t = TypeAlias::partial("User_Update", "User_Create")
            .private()
            .build();
        assert_eq!(t, "type User_Update = Partial<User_Create>;\n");
    }
}
