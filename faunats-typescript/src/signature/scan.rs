//! Bracket-depth aware scanning of signature text.
//!
//! `{` and `<` open a nesting level, `}` and `>` close one. Separators are
//! only significant at depth 0, so `{ a: String | Int }` contains no
//! top-level `|` and `Array<{ a: Int, b: Int }>` no top-level `,`.

/// Iterate over the byte offsets of `sep` occurring at depth 0.
fn top_level_positions(text: &str, sep: char) -> impl Iterator<Item = usize> + '_ {
    let mut depth: i32 = 0;
    text.char_indices().filter_map(move |(i, c)| {
        match c {
            '{' | '<' => depth += 1,
            '}' | '>' => depth -= 1,
            _ if c == sep && depth == 0 => return Some(i),
            _ => {}
        }
        None
    })
}

/// Whether `sep` occurs outside of any brackets.
pub fn has_top_level(text: &str, sep: char) -> bool {
    top_level_positions(text, sep).next().is_some()
}

/// Split on every depth-0 occurrence of `sep`, trimming each part.
///
/// Text without a top-level separator yields a single part.
pub fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for pos in top_level_positions(text, sep) {
        parts.push(text[start..pos].trim());
        start = pos + sep.len_utf8();
    }
    parts.push(text[start..].trim());
    parts
}

/// Return the inner text of `prefix ... >` when the `<` ending `prefix` is
/// closed by the final `>` of `text`.
///
/// `unwrap_generic("Array<Ref<User>>", "Array<")` yields `Ref<User>`, while
/// `Array<String> | Array<Int>` is not a single generic and yields `None`.
pub fn unwrap_generic<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let inner = text.strip_prefix(prefix)?.strip_suffix('>')?;
    let mut depth: i32 = 0;
    for c in inner.chars() {
        match c {
            '{' | '<' => depth += 1,
            '}' | '>' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    Some(inner)
}
