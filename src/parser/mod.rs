//! Source parsing — block splitting and per-method composition.

pub mod docstring;
pub mod params;
pub mod signature;

use crate::model::MethodDoc;
use regex::Regex;
use std::sync::LazyLock;

static RE_DECL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:async[ \t]+)?def[ \t]+\w").unwrap());

static RE_OPERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"operation\s*=\s*["']([^"']+)["']"#).unwrap());

static RE_GQL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)gql\s*\(\s*"""(.*?)""""#).unwrap());

/// Parse a full source listing into documented methods, in source order.
/// Blocks that are not documentable methods are skipped silently.
pub fn parse(source: &str) -> Vec<MethodDoc> {
    split_blocks(source).filter_map(parse_block).collect()
}

/// Cut the source into candidate blocks at method-declaration boundaries.
///
/// A declaration line belongs to the block it opens; text before the first
/// declaration forms a block of its own, which the signature parser
/// rejects. Single-pass, consume once.
pub fn split_blocks(source: &str) -> impl Iterator<Item = &str> + '_ {
    let mut starts: Vec<usize> = RE_DECL_LINE.find_iter(source).map(|m| m.start()).collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }
    (0..starts.len()).map(move |i| {
        let end = starts.get(i + 1).copied().unwrap_or(source.len());
        &source[starts[i]..end]
    })
}

/// Build one method record from one block. `None` when the block is not a
/// public documented method; presentation metadata stays at its default
/// here and is resolved by the orchestrator.
fn parse_block(block: &str) -> Option<MethodDoc> {
    let sig = signature::parse(block)?;
    let mut params = params::parse(sig.raw_params);

    let body = &block[sig.body_start..];
    let doc = docstring::extract(body)
        .map(docstring::parse)
        .unwrap_or_default();

    for param in &mut params {
        if let Some(text) = doc.param_docs.get(&param.name) {
            param.description = text.clone();
        }
    }

    let graphql_operation = RE_OPERATION.captures(block).map(|c| c[1].to_string());
    let graphql_query = RE_GQL
        .captures(block)
        .map(|c| unindent(&c[1]).trim().to_string());

    Some(MethodDoc {
        name: sig.name.to_string(),
        is_async: sig.is_async,
        params,
        description: doc.description,
        returns: doc.returns,
        graphql_operation,
        graphql_query,
        metadata: Default::default(),
    })
}

/// Remove common leading indentation from a multi-line string.
fn unindent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(0);
    if start >= lines.len() {
        return text.to_string();
    }

    let min_indent = lines[start..]
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    lines[start..]
        .iter()
        .map(|l| if l.len() >= min_indent { &l[min_indent..] } else { "" })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"import asyncio

class MonarchMoney(object):
    def __init__(self, session_file: str = "session") -> None:
        self._headers = {}

    async def get_accounts(self) -> Dict[str, Any]:
        """
        Fetch all accounts.

        :return: list of accounts
        """
        query = gql(
            """
            query GetAccounts {
              accounts {
                id
              }
            }
            """
        )
        return await self.gql_call(operation="GetAccounts", graphql_query=query)

    async def _refresh(self):
        """Internal refresh helper."""
        pass

    async def create_transaction(self, amount: float, category_id: str = None):
        """
        Creates a transaction.

        Args:
            amount: The amount of the transaction
            category_id: The category to file it under
        """
        pass
"#;

    #[test]
    fn splits_at_declarations_only() {
        let blocks: Vec<&str> = split_blocks(SOURCE).collect();
        // preamble + __init__ + get_accounts + _refresh + create_transaction
        assert_eq!(blocks.len(), 5);
        assert!(blocks[0].starts_with("import asyncio"));
        assert!(blocks[2].trim_start().starts_with("async def get_accounts"));
    }

    #[test]
    fn blocks_reassemble_to_source() {
        let joined: String = split_blocks(SOURCE).collect();
        assert_eq!(joined, SOURCE);
    }

    #[test]
    fn private_and_preamble_blocks_skipped() {
        let methods = parse(SOURCE);
        let names: Vec<&str> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["get_accounts", "create_transaction"]);
    }

    #[test]
    fn docstring_attached_to_params() {
        let methods = parse(SOURCE);
        let create = &methods[1];
        assert_eq!(create.params.len(), 2);
        assert_eq!(create.params[0].description, "The amount of the transaction");
        assert!(create.params[0].required);
        assert!(!create.params[1].required);
    }

    #[test]
    fn graphql_details_extracted() {
        let methods = parse(SOURCE);
        let accounts = &methods[0];
        assert_eq!(accounts.graphql_operation.as_deref(), Some("GetAccounts"));
        let query = accounts.graphql_query.as_deref().unwrap();
        assert!(query.starts_with("query GetAccounts {"));
        assert!(query.contains("\n  accounts {"));
    }

    #[test]
    fn returns_extracted() {
        let methods = parse(SOURCE);
        assert_eq!(methods[0].returns, "list of accounts");
    }

    #[test]
    fn method_without_gql_has_no_protocol_details() {
        let methods = parse(SOURCE);
        assert!(methods[1].graphql_operation.is_none());
        assert!(methods[1].graphql_query.is_none());
    }

    #[test]
    fn unindent_strips_common_prefix() {
        assert_eq!(unindent("  a\n    b\n  c"), "a\n  b\nc");
        assert_eq!(unindent("\n  a\n  b"), "a\nb");
    }
}
