//! JSON renderer — structured descriptor output for tooling integration.
//!
//! Hand-rolled serialization of one method record per document; this is
//! the hand-off surface for collaborators that consume parameter
//! descriptors as data (sidebar generation, the request-tester widget).

use crate::model::MethodDoc;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, m: &MethodDoc) -> String {
        let mut out = String::new();
        out.push_str("{\n");

        out.push_str(&format!("  \"name\": \"{}\",\n", json_escape(&m.name)));
        out.push_str(&format!("  \"async\": {},\n", m.is_async));

        out.push_str(&format!(
            "  \"category\": \"{}\",\n",
            json_escape(m.metadata.category)
        ));
        out.push_str(&format!("  \"order\": {},\n", m.metadata.order));
        out.push_str(&format!("  \"badge\": \"{}\",\n", m.metadata.badge));

        out.push_str(&format!(
            "  \"description\": \"{}\",\n",
            json_escape(&m.description)
        ));

        out.push_str("  \"params\": [");
        if m.params.is_empty() {
            out.push_str("],\n");
        } else {
            out.push('\n');
            for (i, p) in m.params.iter().enumerate() {
                let comma = if i < m.params.len() - 1 { "," } else { "" };
                out.push_str("    {\n");
                out.push_str(&format!("      \"name\": \"{}\",\n", json_escape(&p.name)));
                out.push_str(&format!(
                    "      \"type\": \"{}\",\n",
                    json_escape(&p.display_type)
                ));
                out.push_str(&format!("      \"required\": {},\n", p.required));
                write_opt_field(&mut out, "      ", "default", &p.default, true);
                out.push_str(&format!(
                    "      \"description\": \"{}\"\n",
                    json_escape(&p.description)
                ));
                out.push_str(&format!("    }}{}\n", comma));
            }
            out.push_str("  ],\n");
        }

        out.push_str(&format!(
            "  \"returns\": \"{}\",\n",
            json_escape(&m.returns)
        ));
        write_opt_field(&mut out, "  ", "graphql_operation", &m.graphql_operation, true);
        write_opt_field(&mut out, "  ", "graphql_query", &m.graphql_query, false);

        out.push_str("}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn write_opt_field(
    out: &mut String,
    indent: &str,
    name: &str,
    value: &Option<String>,
    trailing_comma: bool,
) {
    let comma = if trailing_comma { "," } else { "" };
    match value {
        Some(v) => {
            out.push_str(&format!(
                "{}\"{}\": \"{}\"{}\n",
                indent,
                name,
                json_escape(v),
                comma
            ));
        }
        None => {
            out.push_str(&format!("{}\"{}\": null{}\n", indent, name, comma));
        }
    }
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParamDoc;

    #[test]
    fn renders_valid_shape() {
        let method = MethodDoc {
            name: "get_accounts".to_string(),
            is_async: true,
            returns: "list of accounts".to_string(),
            graphql_operation: Some("GetAccounts".to_string()),
            ..Default::default()
        };
        let out = JsonRenderer.render(&method);
        assert!(out.contains("\"name\": \"get_accounts\""));
        assert!(out.contains("\"async\": true"));
        assert!(out.contains("\"params\": []"));
        assert!(out.contains("\"graphql_operation\": \"GetAccounts\""));
        assert!(out.contains("\"graphql_query\": null"));
    }

    #[test]
    fn params_carry_descriptors() {
        let method = MethodDoc {
            name: "f".to_string(),
            params: vec![ParamDoc {
                name: "amount".to_string(),
                raw_type: Some("float".to_string()),
                display_type: "float".to_string(),
                default: None,
                required: true,
                description: "The amount".to_string(),
            }],
            ..Default::default()
        };
        let out = JsonRenderer.render(&method);
        assert!(out.contains("\"type\": \"float\""));
        assert!(out.contains("\"required\": true"));
        assert!(out.contains("\"default\": null"));
        assert!(out.contains("\"description\": \"The amount\""));
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        let method = MethodDoc {
            name: "f".to_string(),
            graphql_query: Some("query \"Q\" {\n  x\n}".to_string()),
            ..Default::default()
        };
        let out = JsonRenderer.render(&method);
        assert!(out.contains("query \\\"Q\\\" {\\n  x\\n}"));
    }
}
