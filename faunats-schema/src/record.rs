use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Signature used for a computed field whose definition carries none.
pub const UNKNOWN_SIGNATURE: &str = "unknown";

/// Ordered mapping of field name to signature text.
pub type Signatures = IndexMap<String, String>;

/// One collection's schema: its name and the signatures of its fields.
///
/// `fields` is `None` when the collection defines no field schema at all;
/// such records are skipped by the generator. `computed_fields` only ever
/// contributes to the read type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordSchema {
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_signatures")]
    pub fields: Option<Signatures>,

    #[serde(default, deserialize_with = "deserialize_signatures")]
    pub computed_fields: Option<Signatures>,
}

impl RecordSchema {
    /// Create a record with an empty field map.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Some(Signatures::new()),
            computed_fields: None,
        }
    }

    /// Create a record without a field map.
    pub fn without_fields(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: None,
            computed_fields: None,
        }
    }

    /// Add a field signature.
    pub fn field(mut self, name: impl Into<String>, signature: impl Into<String>) -> Self {
        self.fields
            .get_or_insert_with(Signatures::new)
            .insert(name.into(), signature.into());
        self
    }

    /// Add a computed field signature.
    pub fn computed_field(mut self, name: impl Into<String>, signature: impl Into<String>) -> Self {
        self.computed_fields
            .get_or_insert_with(Signatures::new)
            .insert(name.into(), signature.into());
        self
    }

    /// Number of declared (non-computed) fields.
    pub fn field_count(&self) -> usize {
        self.fields.as_ref().map_or(0, IndexMap::len)
    }

    /// Number of computed fields.
    pub fn computed_field_count(&self) -> usize {
        self.computed_fields.as_ref().map_or(0, IndexMap::len)
    }
}

/// A field definition as found in a collection dump.
///
/// Field values are either the bare signature or the full definition
/// object, from which only `signature` is read.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldDefinition {
    Signature(String),
    Detailed {
        #[serde(default)]
        signature: Option<String>,
    },
}

impl FieldDefinition {
    fn into_signature(self) -> String {
        match self {
            FieldDefinition::Signature(s) => s,
            FieldDefinition::Detailed { signature } => {
                signature.unwrap_or_else(|| UNKNOWN_SIGNATURE.to_string())
            }
        }
    }
}

fn deserialize_signatures<'de, D>(deserializer: D) -> Result<Option<Signatures>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, FieldDefinition>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|defs| {
        defs.into_iter()
            .map(|(name, def)| (name, def.into_signature()))
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let record = RecordSchema::new("User")
            .field("b", "String")
            .field("a", "Int")
            .field("c", "Boolean");
        let names: Vec<_> = record.fields.unwrap().into_keys().collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_without_fields() {
        let record = RecordSchema::without_fields("Log");
        assert!(record.fields.is_none());
        assert_eq!(record.field_count(), 0);
    }

    #[test]
    fn test_field_on_fieldless_record_creates_map() {
        let record = RecordSchema::without_fields("Log").field("at", "Time");
        assert_eq!(record.field_count(), 1);
    }

    #[test]
    fn test_deserialize_both_field_shapes() {
        let record: RecordSchema = serde_json::from_str(
            r#"{
                "name": "Order",
                "fields": {
                    "total": "Long",
                    "customer": { "signature": "Ref<Customer>" }
                },
                "computed_fields": {
                    "label": { "body": "(doc) => doc.id", "signature": "String" },
                    "inferred": { "body": "(doc) => 1" }
                }
            }"#,
        )
        .unwrap();

        let fields = record.fields.unwrap();
        assert_eq!(fields["total"], "Long");
        assert_eq!(fields["customer"], "Ref<Customer>");

        let computed = record.computed_fields.unwrap();
        assert_eq!(computed["label"], "String");
        assert_eq!(computed["inferred"], UNKNOWN_SIGNATURE);
    }

    #[test]
    fn test_deserialize_null_and_missing_fields() {
        let nulled: RecordSchema =
            serde_json::from_str(r#"{ "name": "A", "fields": null }"#).unwrap();
        let missing: RecordSchema = serde_json::from_str(r#"{ "name": "B" }"#).unwrap();
        assert!(nulled.fields.is_none());
        assert!(missing.fields.is_none());
        assert!(missing.computed_fields.is_none());
    }
}
