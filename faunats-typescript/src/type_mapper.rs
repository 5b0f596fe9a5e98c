//! TypeScript type mapper implementation.

use faunats_codegen::TypeMapper;
use faunats_core::ScalarType;

/// Package the auxiliary types are imported from.
pub const DRIVER_MODULE: &str = "fauna";

/// Driver type for an opaque document reference.
pub const DOCUMENT_REFERENCE: &str = "DocumentReference";

/// Driver type for `Time` values.
pub const TIME_STUB: &str = "TimeStub";

/// Driver type for `Date` values.
pub const DATE_STUB: &str = "DateStub";

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    /// Auxiliary driver types the generated document refers to, sorted.
    pub fn driver_types(&self) -> [&'static str; 3] {
        [DATE_STUB, DOCUMENT_REFERENCE, TIME_STUB]
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn map_scalar(&self, scalar: ScalarType) -> &'static str {
        match scalar {
            ScalarType::String => "string",
            ScalarType::Boolean => "boolean",
            ScalarType::Long => "number",
            ScalarType::Int => "number",
            ScalarType::Time => TIME_STUB,
            ScalarType::Date => DATE_STUB,
            ScalarType::Null => "null",
        }
    }

    fn reference_type(&self) -> &'static str {
        DOCUMENT_REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_scalar_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_scalar(ScalarType::String), "string");
        assert_eq!(mapper.map_scalar(ScalarType::Boolean), "boolean");
        assert_eq!(mapper.map_scalar(ScalarType::Long), "number");
        assert_eq!(mapper.map_scalar(ScalarType::Int), "number");
        assert_eq!(mapper.map_scalar(ScalarType::Time), "TimeStub");
        assert_eq!(mapper.map_scalar(ScalarType::Date), "DateStub");
        assert_eq!(mapper.map_scalar(ScalarType::Null), "null");
    }

    #[test]
    fn test_keyword_mapping_passes_unknown_through() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_scalar_keyword("Long"), "number");
        assert_eq!(mapper.map_scalar_keyword("Decimal"), "Decimal");
    }

    #[test]
    fn test_driver_types_are_sorted() {
        let types = TypeScriptTypeMapper.driver_types();
        let mut sorted = types;
        sorted.sort();
        assert_eq!(types, sorted);
    }
}
