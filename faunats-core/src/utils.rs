//! Shared string utilities.

/// TypeScript built-in type names that a generated declaration must not shadow.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "any",
    "bigint",
    "boolean",
    "never",
    "null",
    "number",
    "object",
    "string",
    "symbol",
    "undefined",
    "unknown",
    "void",
    "Array",
    "Partial",
    "Record",
];

/// Check that a name can be used verbatim as a TypeScript type identifier.
///
/// Returns `true` for names made of ASCII letters, digits, `_` and `$` that
/// do not start with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Check whether a name collides with a TypeScript built-in type.
pub fn is_reserved_type_name(name: &str) -> bool {
    RESERVED_TYPE_NAMES.contains(&name)
}
