//! Method signature parser.
//!
//! Locates the `def` header of a candidate block and extracts the method
//! name and the raw parameter-list text. The parameter list is delimited
//! with an explicit depth scan rather than a single pattern, so defaults
//! containing parentheses do not truncate it.

use regex::Regex;
use std::sync::LazyLock;

static RE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(async[ \t]+)?def[ \t]+(\w+)[ \t]*\(").unwrap()
});

/// The parsed declaration header of one block.
pub struct Signature<'a> {
    pub name: &'a str,
    pub is_async: bool,
    /// Raw text between the header parentheses, as written.
    pub raw_params: &'a str,
    /// Byte offset of the first character after the header's closing colon.
    pub body_start: usize,
}

/// Parse the declaration header of a block.
///
/// Returns `None` when the block is not a documentable method: no header,
/// an unterminated header, or a private (`_`-prefixed) name. Private names
/// are rejected before the parameter list is even looked at.
pub fn parse(block: &str) -> Option<Signature<'_>> {
    let caps = RE_DECL.captures(block)?;
    let name = caps.get(2).map(|m| m.as_str())?;
    if name.starts_with('_') {
        return None;
    }

    let open = caps.get(0)?.end();
    let close = matching_paren(block, open)?;
    let body_start = close + 1 + header_colon(&block[close + 1..])?;

    Some(Signature {
        name,
        is_async: caps.get(1).is_some(),
        raw_params: &block[open..close],
        body_start,
    })
}

/// Find the `)` matching the paren just before `start`, tracking nesting of
/// all bracket kinds. `None` when the list never closes.
fn matching_paren(text: &str, start: usize) -> Option<usize> {
    let mut depth = 1u32;
    for (i, c) in text[start..].char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth -= 1;
                if depth == 0 {
                    return (c == ')').then_some(start + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Accept an optional `-> ...` return annotation (ignored) followed by the
/// terminating `:`; returns the offset just past the colon. Anything else
/// between the parameter list and the colon means this is not a header.
fn header_colon(rest: &str) -> Option<usize> {
    let mut depth = 0u32;
    for (i, c) in rest.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                let before = rest[..i].trim();
                return (before.is_empty() || before.starts_with("->")).then_some(i + 1);
            }
            _ => {}
        }
    }
    None
}
