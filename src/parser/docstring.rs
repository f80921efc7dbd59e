//! Docstring parser.
//!
//! Extracts the free-text description, per-parameter descriptions, and the
//! return description from a method's documentation comment. Two
//! conventions are supported as independent passes: the field-tag style
//! (`:param name:` / `:return:`) and the labeled-section style
//! (`Args:` / `Returns:`). On a per-parameter collision the field-tag
//! match wins; for the return text the labeled section wins.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_PARAM_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":param\s+(\w+):").unwrap());

static RE_FIELD_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":param\s+\w+:|:returns?:").unwrap());

static RE_RETURN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":returns?:").unwrap());

static RE_RETURNS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*Returns:").unwrap());

static RE_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Parsed documentation comment.
#[derive(Debug, Default)]
pub struct Docstring {
    pub description: String,
    pub param_docs: HashMap<String, String>,
    pub returns: String,
}

/// Extract the quoted docstring body that immediately follows a method
/// header (only whitespace between the colon and the opening delimiter).
/// An unmatched closing delimiter counts as no docstring.
pub fn extract(body: &str) -> Option<&str> {
    let trimmed = body.trim_start();
    for delim in ["\"\"\"", "'''"] {
        if let Some(rest) = trimmed.strip_prefix(delim) {
            let end = rest.find(delim)?;
            return Some(&rest[..end]);
        }
    }
    None
}

pub fn parse(doc: &str) -> Docstring {
    Docstring {
        description: parse_description(doc),
        param_docs: parse_param_docs(doc),
        returns: parse_returns(doc),
    }
}

/// A line that ends the free-text description.
fn is_marker(line: &str) -> bool {
    line.starts_with(":param")
        || line.starts_with(":return")
        || line.starts_with("Args:")
        || line.starts_with("Returns:")
}

/// Everything before the first marker, blank lines skipped, joined with
/// single spaces.
fn parse_description(doc: &str) -> String {
    let mut parts = Vec::new();
    for line in doc.lines() {
        let line = line.trim();
        if is_marker(line) {
            break;
        }
        if !line.is_empty() {
            parts.push(line);
        }
    }
    parts.join(" ")
}

fn parse_param_docs(doc: &str) -> HashMap<String, String> {
    let mut docs = HashMap::new();

    // Field-tag pass runs first; its entries win on collision.
    let tag_starts: Vec<usize> = RE_FIELD_TAG.find_iter(doc).map(|m| m.start()).collect();
    for caps in RE_PARAM_TAG.captures_iter(doc) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = tag_starts
            .iter()
            .copied()
            .find(|&s| s > whole.start())
            .unwrap_or(doc.len());
        let text = collapse(&doc[whole.end()..end]);
        docs.entry(name.as_str().to_string()).or_insert(text);
    }

    // Labeled-section pass only fills parameters the field tags missed.
    for (name, text) in parse_args_section(doc) {
        docs.entry(name).or_insert(text);
    }

    docs
}

/// `NAME: TEXT` lines between an `Args:` header and a `Returns:` header
/// (or the end); indented continuation lines fold into the open entry.
fn parse_args_section(doc: &str) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = Vec::new();
    let mut in_args = false;
    for line in doc.lines() {
        let line = line.trim();
        if !in_args {
            if line.starts_with("Args:") {
                in_args = true;
            }
            continue;
        }
        if line.starts_with("Returns:") {
            break;
        }
        if let Some((name, text)) = split_entry(line) {
            entries.push((name.to_string(), text.trim().to_string()));
        } else if !line.is_empty() {
            if let Some(last) = entries.last_mut() {
                if !last.1.is_empty() {
                    last.1.push(' ');
                }
                last.1.push_str(line);
            }
        }
    }
    entries
}

/// Split a `name: text` entry line; `None` for continuation lines.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let name = &line[..colon];
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, &line[colon + 1..]))
}

fn parse_returns(doc: &str) -> String {
    let mut returns = String::new();

    if let Some(m) = RE_RETURN_TAG.find(doc) {
        let end = RE_FIELD_TAG
            .find_iter(doc)
            .map(|t| t.start())
            .find(|&s| s > m.start())
            .unwrap_or(doc.len());
        returns = collapse(&doc[m.end()..end]);
    }

    // The labeled section is evaluated second and overrides the field tag.
    if let Some(m) = RE_RETURNS_HEADER.find(doc) {
        let text = collapse(&doc[m.end()..]);
        if !text.is_empty() {
            returns = text;
        }
    }

    returns
}

/// Collapse embedded newlines and runs of whitespace to single spaces.
fn collapse(text: &str) -> String {
    RE_WS.replace_all(text, " ").trim().to_string()
}
