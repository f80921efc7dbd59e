//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::MethodDoc;
use anyhow::{anyhow, Result};

/// Options shared by renderers that synthesize usage examples.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Python package name used in example imports.
    pub package: String,
    /// Client class name used in example code.
    pub client: String,
}

/// Trait for rendering one method record into a specific output format.
pub trait Renderer {
    fn render(&self, method: &MethodDoc) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, opts: &RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(opts))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}
