//! Type expression normalization.
//!
//! Rewrites raw Python type annotations into the display form used in the
//! rendered documentation, recursively unwrapping the known generic
//! wrappers (`Optional`, `List`, `Dict`). Anything unrecognized passes
//! through unchanged; unmatched brackets are treated as literal text.

/// Normalize an optional raw annotation; absent or empty input is `Any`.
pub fn normalize(raw: Option<&str>) -> String {
    match raw {
        Some(t) if !t.trim().is_empty() => normalize_type(t),
        _ => "Any".to_string(),
    }
}

fn normalize_type(t: &str) -> String {
    let t = t.trim();
    if t.is_empty() {
        return "Any".to_string();
    }
    if let Some(inner) = unwrap_generic(t, "Optional") {
        return format!("{} | None", normalize_type(inner));
    }
    if let Some(inner) = unwrap_generic(t, "List") {
        return format!("List[{}]", normalize_type(inner));
    }
    if let Some(inner) = unwrap_generic(t, "Dict") {
        if let Some((key, value)) = split_pair(inner) {
            return format!("Dict[{}, {}]", normalize_type(key), normalize_type(value));
        }
        return t.to_string();
    }
    t.to_string()
}

/// Return the inner expression of `Wrapper[...]`, but only when the bracket
/// that follows the wrapper name pairs with the final character of `t`.
/// Anything else (trailing text, unmatched brackets) is not a wrapper match.
fn unwrap_generic<'a>(t: &'a str, wrapper: &str) -> Option<&'a str> {
    let rest = t.strip_prefix(wrapper)?.strip_prefix('[')?;
    let mut depth = 1u32;
    for (i, c) in rest.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    // Must close exactly at the end of the expression.
                    return if i == rest.len() - 1 {
                        Some(&rest[..i])
                    } else {
                        None
                    };
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `K, V` at the first top-level comma.
fn split_pair(inner: &str) -> Option<(&str, &str)> {
    let mut depth = 0u32;
    for (i, c) in inner.char_indices() {
        match c {
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some((&inner[..i], &inner[i + 1..])),
            _ => {}
        }
    }
    None
}
