//! apidoc — generate API reference documentation from an annotated Python
//! client source file.
//!
//! Parses method declarations and docstrings out of one source file and
//! writes one documentation artifact per public method. Two modes:
//!
//! - **stdin mode**: `apidoc < client.py` renders every method to stdout
//! - **file mode**: `apidoc client.py -o docs/api` writes one file per method

mod metadata;
mod model;
mod parser;
mod render;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "apidoc",
    about = "Generate API reference documentation from a Python client source file"
)]
struct Cli {
    /// Python source file to document. If omitted, reads from stdin.
    source: Option<PathBuf>,

    /// Output directory (required when a source file is given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Python package name used in generated examples
    #[arg(long, default_value = "monarchmoney")]
    package: String,

    /// Client class name used in generated examples
    #[arg(long, default_value = "MonarchMoney")]
    client: String,
}

impl Cli {
    fn render_options(&self) -> render::RenderOptions {
        render::RenderOptions {
            package: self.package.clone(),
            client: self.client.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.source.is_none() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read from stdin, render every method to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let methods = parse_source(&input);
    let renderer = render::create_renderer(&cli.format, &cli.render_options())?;
    for method in &methods {
        print!("{}", renderer.render(method));
    }
    Ok(())
}

/// file mode: parse the source file, write one document per method into
/// the output directory, report a summary.
fn file_mode(cli: &Cli) -> Result<()> {
    let source_path = cli
        .source
        .as_deref()
        .context("source file is required in file mode")?;
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when a source file is given")?;

    let content = fs::read_to_string(source_path)
        .with_context(|| format!("failed to read {}", source_path.display()))?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let methods = parse_source(&content);
    println!("Found {} public methods", methods.len());

    let renderer = render::create_renderer(&cli.format, &cli.render_options())?;
    let ext = renderer.file_extension();

    for method in &methods {
        let out_path = output_dir.join(format!("{}.{}", method.name, ext));
        fs::write(&out_path, renderer.render(method))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        println!("Generated: {}.{}", method.name, ext);
    }

    println!("API documentation generation complete!");
    Ok(())
}

/// Run the parsing pipeline and resolve presentation metadata per method.
fn parse_source(input: &str) -> Vec<model::MethodDoc> {
    let table = metadata::MetadataTable::builtin();
    let mut methods = parser::parse(input);
    for method in &mut methods {
        method.metadata = table.resolve(&method.name);
    }
    methods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_resolves_known_metadata() {
        let source = "async def get_accounts(self):\n    \"\"\"Fetch all accounts.\n\n    :return: list of accounts\n    \"\"\"\n    pass\n";
        let methods = parse_source(source);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].metadata.category, "Accounts");
        assert_eq!(methods[0].returns, "list of accounts");
    }

    #[test]
    fn pipeline_defaults_unknown_metadata() {
        let source = "async def poke_server(self):\n    \"\"\"Poke.\"\"\"\n    pass\n";
        let methods = parse_source(source);
        assert_eq!(methods[0].metadata.category, "Other");
        assert_eq!(methods[0].metadata.order, 99);
        assert_eq!(methods[0].metadata.badge, model::Badge::Query);
    }

    #[test]
    fn pipeline_excludes_private_methods() {
        let source = "async def _internal_helper(self):\n    \"\"\"Hidden.\"\"\"\n    pass\n\nasync def visible(self):\n    \"\"\"Shown.\"\"\"\n    pass\n";
        let methods = parse_source(source);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "visible");
    }

    #[test]
    fn malformed_block_does_not_stop_the_batch() {
        let source = "async def broken(self\n    pass\n\nasync def fine(self):\n    \"\"\"Works.\"\"\"\n    pass\n";
        let methods = parse_source(source);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "fine");
    }
}
