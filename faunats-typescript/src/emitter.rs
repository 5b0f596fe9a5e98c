//! Per-collection declaration emission.
//!
//! Every collection with a field map yields seven declarations:
//!
//! | name                 | definition                          |
//! |----------------------|-------------------------------------|
//! | `User`               | read type, includes computed fields |
//! | `User_Create`        | input type, refs accept values      |
//! | `User_Update`        | `Partial<User_Create>`              |
//! | `User_Replace`       | `User_Create`                       |
//! | `User_FaunaCreate`   | wire type, refs are references      |
//! | `User_FaunaUpdate`   | `Partial<User_FaunaCreate>`         |
//! | `User_FaunaReplace`  | `User_FaunaCreate`                  |

use faunats_codegen::{CodeFragment, Renderable, TypeMapper};
use faunats_schema::{RecordSchema, Signatures};

use crate::{
    TypeScriptTypeMapper,
    ast::{Field, ObjectType, TypeAlias},
    signature::{RenderMode, SignatureParser, scan, strip_optional},
};

/// Names of the seven declarations generated for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    pub main: String,
    pub create: String,
    pub update: String,
    pub replace: String,
    pub fauna_create: String,
    pub fauna_update: String,
    pub fauna_replace: String,
}

impl TypeNames {
    pub fn new(record: &str) -> Self {
        Self {
            main: record.to_string(),
            create: format!("{record}_Create"),
            update: format!("{record}_Update"),
            replace: format!("{record}_Replace"),
            fauna_create: format!("{record}_FaunaCreate"),
            fauna_update: format!("{record}_FaunaUpdate"),
            fauna_replace: format!("{record}_FaunaReplace"),
        }
    }

    /// All names in declaration order.
    pub fn all(&self) -> [&str; 7] {
        [
            &self.main,
            &self.create,
            &self.update,
            &self.replace,
            &self.fauna_create,
            &self.fauna_update,
            &self.fauna_replace,
        ]
    }

    /// Operation-to-type object used in the mapping interface.
    ///
    /// Wire types are left out, they are internal to the driver layer.
    pub fn mapping_type(&self) -> String {
        format!(
            "{{ main: {}; create: {}; replace: {}; update: {} }}",
            self.main, self.create, self.replace, self.update
        )
    }
}

/// The declarations generated for one collection.
#[derive(Debug, Clone)]
pub struct DeclarationSet {
    pub names: TypeNames,
    pub main: ObjectType,
    pub create: ObjectType,
    pub update: TypeAlias,
    pub replace: TypeAlias,
    pub fauna_create: ObjectType,
    pub fauna_update: TypeAlias,
    pub fauna_replace: TypeAlias,
}

impl DeclarationSet {
    /// Entry of this collection in the mapping interface.
    pub fn mapping_field(&self) -> Field {
        Field::new(self.names.main.clone(), self.names.mapping_type())
    }
}

impl Renderable for DeclarationSet {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        fragments.extend(self.main.to_fragments());
        fragments.push(CodeFragment::Blank);
        fragments.extend(self.create.to_fragments());
        fragments.extend(self.update.to_fragments());
        fragments.extend(self.replace.to_fragments());
        fragments.push(CodeFragment::Blank);
        fragments.extend(self.fauna_create.to_fragments());
        fragments.extend(self.fauna_update.to_fragments());
        fragments.extend(self.fauna_replace.to_fragments());
        fragments
    }
}

/// Declarations for a batch of collections, in input order.
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    pub sets: Vec<DeclarationSet>,
}

impl Declarations {
    /// Every generated type name, collection by collection.
    pub fn export_names(&self) -> Vec<String> {
        self.sets
            .iter()
            .flat_map(|set| set.names.all().map(str::to_string))
            .collect()
    }

    /// Mapping interface entries, one per collection.
    pub fn mapping_fields(&self) -> Vec<Field> {
        self.sets
            .iter()
            .map(DeclarationSet::mapping_field)
            .collect()
    }
}

/// Builds declaration sets from collection schemas.
#[derive(Debug, Clone, Default)]
pub struct Emitter<M> {
    parser: SignatureParser<M>,
}

impl<M: TypeMapper> Emitter<M> {
    pub fn new(mapper: M) -> Self {
        Self {
            parser: SignatureParser::new(mapper),
        }
    }

    /// Emit declarations for every record that has a field map.
    ///
    /// Records without `fields` are skipped: they produce no declaration,
    /// no export and no mapping entry.
    pub fn emit(&self, records: &[RecordSchema]) -> Declarations {
        Declarations {
            sets: records
                .iter()
                .filter_map(|record| self.emit_record(record))
                .collect(),
        }
    }

    /// Emit the declaration set of a single record.
    pub fn emit_record(&self, record: &RecordSchema) -> Option<DeclarationSet> {
        let fields = record.fields.as_ref()?;
        let names = TypeNames::new(&record.name);

        let mut main_fields = self.render_fields(fields, RenderMode::Main);
        if let Some(computed) = &record.computed_fields {
            main_fields.extend(self.render_fields(computed, RenderMode::Main));
        }

        let main = ObjectType::new(&names.main)
            .private()
            .doc(format!("Document of the `{}` collection.", record.name))
            .fields(main_fields);
        let create = ObjectType::new(&names.create)
            .private()
            .fields(self.render_fields(fields, RenderMode::Create));
        let update = TypeAlias::partial(&names.update, &names.create).private();
        let replace = TypeAlias::new(&names.replace, &names.create).private();
        let fauna_create = ObjectType::new(&names.fauna_create)
            .private()
            .fields(self.render_fields(fields, RenderMode::FaunaCreate));
        let fauna_update = TypeAlias::partial(&names.fauna_update, &names.fauna_create).private();
        let fauna_replace = TypeAlias::new(&names.fauna_replace, &names.fauna_create).private();

        Some(DeclarationSet {
            names,
            main,
            create,
            update,
            replace,
            fauna_create,
            fauna_update,
            fauna_replace,
        })
    }

    fn render_fields(&self, signatures: &Signatures, mode: RenderMode) -> Vec<Field> {
        signatures
            .iter()
            .map(|(name, signature)| self.render_field(name, signature, mode))
            .collect()
    }

    /// Render one field; an outer `?` makes the field itself optional.
    pub fn render_field(&self, name: &str, signature: &str, mode: RenderMode) -> Field {
        let (text, optional) = strip_optional(signature);

        let ty = match scan::unwrap_generic(text, "Array<") {
            Some(element) => format!("Array<{}>", self.resolve_alternatives(element, mode)),
            None => self.resolve_alternatives(text, mode),
        };

        let field = Field::new(name, ty);
        if optional { field.optional() } else { field }
    }

    fn resolve_alternatives(&self, text: &str, mode: RenderMode) -> String {
        scan::split_top_level(text, '|')
            .into_iter()
            .map(|alternative| self.parser.parse(alternative, mode))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Emit declarations using the TypeScript type mapping.
pub fn emit(records: &[RecordSchema]) -> Declarations {
    Emitter::new(TypeScriptTypeMapper).emit(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> RecordSchema {
        RecordSchema::new("User")
            .field("name", "String")
            .field("age", "Long?")
            .field("bestFriend", "Ref<User>?")
    }

    /// Declaration set of a record that defines fields.
    fn set(record: &RecordSchema) -> DeclarationSet {
        Emitter::new(TypeScriptTypeMapper)
            .emit_record(record)
            .expect("record defines fields")
    }

    fn field(signature: &str, mode: RenderMode) -> String {
        Emitter::new(TypeScriptTypeMapper)
            .render_field("f", signature, mode)
            .to_line()
    }

    #[test]
    fn test_user_main_create_and_wire_types() {
        let set = set(&user());

        let main = set.main.build();
        assert!(main.contains("name: string;"));
        assert!(main.contains("age?: number;"));
        assert!(main.contains("bestFriend?: User;"));

        let create = set.create.build();
        assert!(create.contains("type User_Create = {"));
        assert!(create.contains("bestFriend?: User | DocumentReference;"));

        let fauna_create = set.fauna_create.build();
        assert!(fauna_create.contains("type User_FaunaCreate = {"));
        assert!(fauna_create.contains("bestFriend?: DocumentReference;"));
    }

    #[test]
    fn test_update_and_replace_are_aliases() {
        let set = set(&user());

        assert_eq!(
            set.update.build(),
            "type User_Update = Partial<User_Create>;\n"
        );
        assert_eq!(set.replace.build(), "type User_Replace = User_Create;\n");
        assert_eq!(
            set.fauna_update.build(),
            "type User_FaunaUpdate = Partial<User_FaunaCreate>;\n"
        );
        assert_eq!(
            set.fauna_replace.build(),
            "type User_FaunaReplace = User_FaunaCreate;\n"
        );
    }

    #[test]
    fn test_field_order_is_preserved() {
        let record = RecordSchema::new("Thing")
            .field("b", "String")
            .field("a", "Int")
            .field("c", "Boolean");

        let main = set(&record).main.build();
        let b = main.find("b: string;").unwrap();
        let a = main.find("a: number;").unwrap();
        let c = main.find("c: boolean;").unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn test_computed_fields_only_in_main() {
        let set = set(&user().computed_field("friendName", "String?"));

        let main = set.main.build();
        assert!(main.contains("friendName?: string;"));
        assert!(main.find("bestFriend") < main.find("friendName"));
        assert!(!set.create.build().contains("friendName"));
        assert!(!set.fauna_create.build().contains("friendName"));
    }

    #[test]
    fn test_records_without_fields_are_skipped() {
        let records = vec![
            RecordSchema::new("A").field("x", "Int"),
            RecordSchema::without_fields("Skipped"),
            RecordSchema::new("B").field("y", "String"),
        ];
        let declarations = emit(&records);

        assert_eq!(declarations.sets.len(), 2);
        let exports = declarations.export_names();
        assert_eq!(exports.len(), 14);
        assert!(!exports.iter().any(|name| name.starts_with("Skipped")));
        let mapped: Vec<_> = declarations
            .mapping_fields()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(mapped, ["A", "B"]);
    }

    #[test]
    fn test_empty_field_map_still_emits() {
        let set = set(&RecordSchema::new("Empty"));
        assert_eq!(set.create.build(), "type Empty_Create = {};\n");
        assert_eq!(set.main.build().lines().last(), Some("type Empty = {};"));
    }

    #[test]
    fn test_export_names_order() {
        let declarations = emit(&[user()]);
        assert_eq!(
            declarations.export_names(),
            [
                "User",
                "User_Create",
                "User_Update",
                "User_Replace",
                "User_FaunaCreate",
                "User_FaunaUpdate",
                "User_FaunaReplace",
            ]
        );
    }

    #[test]
    fn test_mapping_excludes_wire_types() {
        let field = emit(&[user()]).mapping_fields().remove(0);
        assert_eq!(
            field.to_line(),
            "User: { main: User; create: User_Create; replace: User_Replace; update: User_Update };"
        );
        assert!(!field.ty.contains("Fauna"));
    }

    #[test]
    fn test_array_fields() {
        assert_eq!(
            field("Array<Ref<User>>?", RenderMode::Create),
            "f?: Array<User | DocumentReference>;"
        );
        assert_eq!(
            field("Array<String | Null>", RenderMode::Main),
            "f: Array<string | null>;"
        );
        assert_eq!(
            field("Array<{ sku: String, qty?: Int }>", RenderMode::Main),
            "f: Array<{ sku: string; qty?: number }>;"
        );
    }

    #[test]
    fn test_union_fields() {
        assert_eq!(
            field("Ref<User> | Ref<Team>", RenderMode::FaunaCreate),
            "f: DocumentReference | DocumentReference;"
        );
        assert_eq!(
            field("Array<String> | Null", RenderMode::Main),
            "f: Array<string> | null;"
        );
    }

    #[test]
    fn test_union_nested_in_object_field() {
        assert_eq!(
            field("{ kind: String | Int, at: Time }?", RenderMode::Main),
            "f?: { kind: string | number; at: TimeStub };"
        );
    }
}
