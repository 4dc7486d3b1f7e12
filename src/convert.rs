//! Single document conversion pipeline.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::markdown::{MarkdownRenderer, RenderedPage};
use crate::page::page_wrapper;

/// Renders markdown source into a complete HTML document string.
///
/// # Errors
///
/// Returns error if rendering fails
pub fn convert_str(renderer: &MarkdownRenderer<'_>, markdown: &str) -> Result<String> {
    render_page(renderer, markdown).map(|(_, html)| html)
}

fn render_page(
    renderer: &MarkdownRenderer<'_>,
    markdown: &str,
) -> Result<(Option<String>, String)> {
    let RenderedPage { title, body } = renderer.render(markdown)?;
    let html = page_wrapper(title.as_deref(), &body).into_string();
    Ok((title, html))
}

/// Converts markdown file into a standalone HTML file.
///
/// Reads the whole input, renders it, and writes the page to `output`,
/// replacing any existing file. Nothing is cleaned up on failure.
///
/// # Arguments
///
/// * `renderer`: Configured markdown renderer
/// * `input`: Markdown file path
/// * `output`: HTML file path
///
/// # Returns
///
/// Extracted page title, if any
///
/// # Errors
///
/// Returns error if input cannot be read as UTF8, rendering fails, or output
/// cannot be written
pub fn convert_file(
    renderer: &MarkdownRenderer<'_>,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<Option<String>> {
    let input = input.as_ref();
    let output = output.as_ref();

    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read markdown file: {}", input.display()))?;

    let (title, html) = render_page(renderer, &markdown)
        .with_context(|| format!("Failed to render markdown file: {}", input.display()))?;

    fs::write(output, html)
        .with_context(|| format!("Failed to write HTML file: {}", output.display()))?;

    info!(
        "Converted {} -> {} (title: {})",
        input.display(),
        output.display(),
        title.as_deref().unwrap_or("<none>")
    );

    Ok(title)
}
