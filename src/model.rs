//! Data model for parsed API documentation — format-agnostic.

/// A single documented API method.
#[derive(Debug, Default)]
pub struct MethodDoc {
    pub name: String,
    /// Whether the declaration was `async def` (plain `def` otherwise).
    pub is_async: bool,
    /// Parameters in declaration order, receiver (`self`/`cls`) excluded.
    pub params: Vec<ParamDoc>,
    /// Free-text description from the docstring; empty when undocumented.
    pub description: String,
    /// Return description from `:return:` or `Returns:`; empty when absent.
    pub returns: String,
    /// GraphQL operation name, from an `operation = "..."` assignment.
    pub graphql_operation: Option<String>,
    /// Literal GraphQL query, from a `gql("""...""")` call.
    pub graphql_query: Option<String>,
    pub metadata: Metadata,
}

/// A single method parameter.
#[derive(Debug)]
pub struct ParamDoc {
    pub name: String,
    /// Raw type annotation text as written in the signature.
    pub raw_type: Option<String>,
    /// Normalized display type; `Any` when no annotation is present.
    pub display_type: String,
    /// Raw default-value text as written in the signature.
    pub default: Option<String>,
    /// True iff the parameter has no default.
    pub required: bool,
    /// Per-parameter docstring text; empty when undocumented.
    pub description: String,
}

/// Presentation metadata: how a method is grouped and labeled in output.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub category: &'static str,
    /// Sort rank within the category; not unique across categories.
    pub order: u32,
    pub badge: Badge,
}

impl Default for Metadata {
    fn default() -> Self {
        Metadata {
            category: "Other",
            order: 99,
            badge: Badge::Query,
        }
    }
}

/// Kind label shown next to a method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Query,
    Mutation,
    Utility,
    Post,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Query => "query",
            Badge::Mutation => "mutation",
            Badge::Utility => "utility",
            Badge::Post => "post",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
