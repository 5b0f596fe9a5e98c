//! Translation of field signatures into TypeScript type expressions.
//!
//! A signature is the textual type of a collection field, e.g.
//! `Array<Ref<User>>?` or `{ street: String, zip: Int? }`. [`parse`] turns
//! it into the equivalent TypeScript type. Translation never fails: text
//! that is not understood is passed through unchanged so that new or
//! user-defined type names survive generation.

pub mod scan;

use faunats_codegen::TypeMapper;

use crate::TypeScriptTypeMapper;

/// How `Ref<...>` signatures are rendered.
///
/// Only references are affected; arrays, objects and unions pass the mode
/// through to their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Read type: a reference reads back as the referenced document type.
    Main,
    /// Input type: either a full value or a document reference.
    Create,
    /// Wire payload: always a document reference.
    FaunaCreate,
}

/// Strip one trailing optional marker.
///
/// Returns the remaining text and whether a marker was present.
pub fn strip_optional(signature: &str) -> (&str, bool) {
    let trimmed = signature.trim();
    match trimmed.strip_suffix('?') {
        Some(rest) => (rest.trim_end(), true),
        None => (trimmed, false),
    }
}

/// Translate a signature using the TypeScript type mapping.
pub fn parse(signature: &str, mode: RenderMode) -> String {
    SignatureParser::new(TypeScriptTypeMapper).parse(signature, mode)
}

/// Recursive-descent translator over signature text.
#[derive(Debug, Clone, Default)]
pub struct SignatureParser<M> {
    mapper: M,
}

impl<M: TypeMapper> SignatureParser<M> {
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    /// Translate `signature`. The result never carries the optional marker;
    /// callers attach it to the field name.
    pub fn parse(&self, signature: &str, mode: RenderMode) -> String {
        let (text, _) = strip_optional(signature);

        if scan::has_top_level(text, '|') {
            return self.parse_union(text, mode);
        }

        if let Some(body) = text.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
            return self.parse_object(body, mode);
        }

        if let Some(inner) = scan::unwrap_generic(text, "Array<") {
            return format!("Array<{}>", self.parse(inner, mode));
        }

        if let Some(target) = scan::unwrap_generic(text, "Ref<") {
            return self.render_ref(target.trim(), mode);
        }

        self.mapper.map_scalar_keyword(text).to_string()
    }

    fn parse_union(&self, text: &str, mode: RenderMode) -> String {
        scan::split_top_level(text, '|')
            .into_iter()
            .map(|branch| self.parse(branch, mode))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn parse_object(&self, body: &str, mode: RenderMode) -> String {
        let properties: Vec<String> = scan::split_top_level(body, ',')
            .into_iter()
            .filter(|property| !property.is_empty())
            .map(|property| match property.split_once(':') {
                // the name keeps its own `?`
                Some((name, value)) => format!("{}: {}", name.trim(), self.parse(value, mode)),
                None => property.to_string(),
            })
            .collect();

        if properties.is_empty() {
            "{}".to_string()
        } else {
            format!("{{ {} }}", properties.join("; "))
        }
    }

    fn render_ref(&self, target: &str, mode: RenderMode) -> String {
        match mode {
            RenderMode::Main => target.to_string(),
            RenderMode::Create => format!("{} | {}", target, self.mapper.reference_type()),
            RenderMode::FaunaCreate => self.mapper.reference_type().to_string(),
        }
    }
}
