//! Canonical markdown renderer.
//!
//! Produces one MDX-safe document per method, in a fixed section order:
//! front matter, title, badge, description, signature, parameter table,
//! returns, usage example, GraphQL details, closing section. Every field
//! has a fallback, so rendering never fails.

use crate::model::{MethodDoc, ParamDoc};
use crate::render::{RenderOptions, Renderer};

pub struct MarkdownRenderer {
    package: String,
    client: String,
}

impl MarkdownRenderer {
    pub fn new(opts: &RenderOptions) -> Self {
        MarkdownRenderer {
            package: opts.package.clone(),
            client: opts.client.clone(),
        }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, m: &MethodDoc) -> String {
        let mut md = String::new();

        // Front matter: sidebar_position is what the site build reads;
        // category makes the grouping observable in the artifact itself.
        md.push_str(&format!(
            "---\nsidebar_position: {}\ncategory: {}\n---\n\n",
            m.metadata.order, m.metadata.category
        ));

        md.push_str(&format!("# {}\n\n", m.name));
        md.push_str(&format!("**Type:** {}\n\n", m.metadata.badge));

        if m.description.is_empty() {
            md.push_str("No description available.\n\n");
        } else {
            md.push_str(&escape_mdx(&m.description));
            md.push_str("\n\n");
        }

        md.push_str("## Signature\n\n```python\n");
        let keyword = if m.is_async { "async def" } else { "def" };
        md.push_str(&format!("{} {}(\n", keyword, m.name));
        if m.params.is_empty() {
            md.push_str("    # No parameters\n");
        } else {
            let lines: Vec<String> = m.params.iter().map(signature_line).collect();
            md.push_str(&lines.join(",\n"));
            md.push('\n');
        }
        md.push_str(") -> Dict[str, Any]\n```\n\n");

        if !m.params.is_empty() {
            md.push_str("## Parameters\n\n");
            md.push_str("| Parameter | Type | Required | Description |\n");
            md.push_str("|-----------|------|----------|-------------|\n");
            for p in &m.params {
                md.push_str(&format!(
                    "| `{}` | `{}` | {} | {} |\n",
                    p.name,
                    escape_pipes(&p.display_type),
                    if p.required { "Yes" } else { "No" },
                    table_cell(&p.description)
                ));
            }
            md.push('\n');
        }

        if !m.returns.is_empty() {
            md.push_str(&format!("## Returns\n\n{}\n\n", escape_mdx(&m.returns)));
        }

        md.push_str("## Example\n\n```python\n");
        md.push_str(&format!("from {} import {}\n\n", self.package, self.client));
        md.push_str(&format!("mm = {}()\n", self.client));
        md.push_str("await mm.login(email, password)\n\n");
        let args: Vec<String> = m
            .params
            .iter()
            .filter(|p| p.required)
            .map(example_value)
            .collect();
        md.push_str(&format!("result = await mm.{}({})\n", m.name, args.join(", ")));
        md.push_str("print(result)\n```\n\n");

        if let Some(ref operation) = m.graphql_operation {
            md.push_str(&format!(
                "## GraphQL Operation\n\n**Operation Name:** `{}`\n\n",
                operation
            ));
        }
        if let Some(ref query) = m.graphql_query {
            md.push_str(&format!("### GraphQL Query\n\n```graphql\n{}\n```\n\n", query));
        }

        md.push_str("## Try It Out\n\nTo test this API method locally:\n\n");
        md.push_str(&format!("1. Install the package: `pip install {}`\n", self.package));
        md.push_str("2. Create a Python script with the example code above\n");
        md.push_str("3. Replace `email` and `password` with your account credentials\n");
        md.push_str("4. Run the script\n\n");
        md.push_str("See the [Authentication Guide](/docs/guides/authentication) for details on logging in.\n");

        md
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// One reconstructed signature line, `    name: Type` plus default.
fn signature_line(p: &ParamDoc) -> String {
    let mut line = format!("    {}: {}", p.name, p.display_type);
    if let Some(ref default) = p.default {
        line.push_str(&format!(" = {}", default));
    }
    line
}

/// Synthesize an illustrative literal for a required parameter, by exact
/// match on the normalized type. Unknown types fall back to the bare
/// parameter name as a placeholder variable.
fn example_value(p: &ParamDoc) -> String {
    match p.display_type.as_str() {
        "str" => format!("\"example_{}\"", p.name),
        "int" => "123".to_string(),
        "float" => "100.0".to_string(),
        "bool" => "True".to_string(),
        t if t.starts_with("List[") => "[]".to_string(),
        t if t.starts_with("Dict[") => "{}".to_string(),
        _ => p.name.clone(),
    }
}

/// Escape markup-reserved characters so text cannot open a JSX expression
/// or tag in the rendered MDX.
fn escape_mdx(text: &str) -> String {
    text.replace('{', "&#123;")
        .replace('}', "&#125;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Make text safe inside a table cell: MDX escaping plus newline collapse
/// and pipe escaping; empty text renders as a dash.
fn table_cell(text: &str) -> String {
    if text.is_empty() {
        return "-".to_string();
    }
    escape_pipes(&escape_mdx(text)).replace('\n', " ").trim().to_string()
}

fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}
