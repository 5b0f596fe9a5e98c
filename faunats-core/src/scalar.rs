//! Scalar keywords of the schema signature language.

use std::fmt;

/// Primitive type keywords that can appear in a field signature.
///
/// This is a language-agnostic representation of scalar types.
/// Use a `TypeMapper` to convert to language-specific type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Boolean,
    Long,
    Int,
    Time,
    Date,
    Null,
}

impl ScalarType {
    /// All scalar keywords, in declaration order.
    pub const ALL: [ScalarType; 7] = [
        ScalarType::String,
        ScalarType::Boolean,
        ScalarType::Long,
        ScalarType::Int,
        ScalarType::Time,
        ScalarType::Date,
        ScalarType::Null,
    ];

    /// Get the keyword as written in a signature.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Boolean => "Boolean",
            ScalarType::Long => "Long",
            ScalarType::Int => "Int",
            ScalarType::Time => "Time",
            ScalarType::Date => "Date",
            ScalarType::Null => "Null",
        }
    }

    /// Match a keyword exactly (case-sensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == keyword)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
