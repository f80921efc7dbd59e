//! Parameter list tokenizer — explicit scanner with depth tracking.
//!
//! A naive comma split would fragment parameters whose type or default
//! contains a comma inside brackets (`Dict[str, int]`, `(1, 2)`), so the
//! scanner splits only at top-level commas and locates the `:` and `=`
//! markers at top level within each fragment.

use crate::model::ParamDoc;
use crate::types;

/// Tokenize raw parameter-list text into descriptors, in declaration order.
///
/// The receiver (`self`/`cls` in first position) is dropped, as is any
/// fragment with no recoverable name token — a malformed fragment never
/// aborts the method.
pub fn parse(raw: &str) -> Vec<ParamDoc> {
    let mut params = Vec::new();
    for (i, fragment) in split_top_level(raw).into_iter().enumerate() {
        let Some((name, raw_type, default)) = parse_fragment(fragment) else {
            continue;
        };
        if i == 0 && (name == "self" || name == "cls") {
            continue;
        }
        let display_type = types::normalize(raw_type.as_deref());
        let required = default.is_none();
        params.push(ParamDoc {
            name,
            raw_type,
            display_type,
            default,
            required,
            description: String::new(),
        });
    }
    params
}

/// Split at commas outside any `()`/`[]`/`{}` nesting.
fn split_top_level(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0u32;
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}

/// Split one fragment into (name, raw type, raw default).
///
/// The first top-level `:` begins the type annotation and the first
/// top-level `=` begins the default; a `:` after the `=` belongs to the
/// default (e.g. a lambda). Returns `None` when no name token is present.
fn parse_fragment(fragment: &str) -> Option<(String, Option<String>, Option<String>)> {
    let mut depth = 0u32;
    let mut colon = None;
    let mut eq = None;
    for (i, c) in fragment.char_indices() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ':' if depth == 0 && colon.is_none() && eq.is_none() => colon = Some(i),
            '=' if depth == 0 && eq.is_none() => eq = Some(i),
            _ => {}
        }
    }

    let name_end = colon.or(eq).unwrap_or(fragment.len());
    let name = fragment[..name_end]
        .trim()
        .trim_start_matches('*')
        .to_string();
    if name.is_empty() || !is_identifier(&name) {
        return None;
    }

    let raw_type = colon.map(|c| {
        let end = eq.unwrap_or(fragment.len());
        fragment[c + 1..end].trim().to_string()
    });
    let raw_type = raw_type.filter(|t| !t.is_empty());

    let default = eq.map(|e| fragment[e + 1..].trim().to_string());
    let default = default.filter(|d| !d.is_empty());

    Some((name, raw_type, default))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receiver_dropped() {
        let params = parse("self, amount: float");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "amount");
    }

    #[test]
    fn receiver_only_dropped_in_first_position() {
        let params = parse("ctx, self");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn nested_commas_do_not_split() {
        let params = parse("self, a: Dict[str, int] = {}, b: int = 1");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "a");
        assert_eq!(params[1].name, "b");
    }

    #[test]
    fn default_with_tuple() {
        let params = parse("x=(1, 2), y=3");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].default.as_deref(), Some("(1, 2)"));
    }

    #[test]
    fn required_iff_no_default() {
        let params = parse("self, amount: float, category_id: str = None");
        assert!(params[0].required);
        assert!(!params[1].required);
    }

    #[test]
    fn type_normalized_for_display() {
        let params = parse("self, ids: Optional[List[str]] = None");
        assert_eq!(params[0].display_type, "List[str] | None");
        assert_eq!(params[0].raw_type.as_deref(), Some("Optional[List[str]]"));
    }

    #[test]
    fn missing_annotation_displays_any() {
        let params = parse("self, value");
        assert_eq!(params[0].display_type, "Any");
        assert!(params[0].raw_type.is_none());
    }

    #[test]
    fn variadics_use_bare_name() {
        let params = parse("self, *args, **kwargs");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "args");
        assert_eq!(params[1].name, "kwargs");
    }

    #[test]
    fn nameless_fragment_dropped() {
        let params = parse("self, a: int, , 123");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "a");
    }

    #[test]
    fn trailing_comma_tolerated() {
        let params = parse("self, a: int,");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn lambda_default_keeps_colon() {
        let params = parse("self, key=lambda x: x");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "key");
        assert_eq!(params[0].default.as_deref(), Some("lambda x: x"));
        assert!(params[0].raw_type.is_none());
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("self").is_empty());
    }
}
