//! Markdown parsing and HTML fragment rendering.

use anyhow::{Context, Result};
use comrak::{Arena, Options, format_html, parse_document};
use log::debug;

use super::{LinkRewriter, extract_title};
use crate::highlight::Highlighter;

/// Rendered markdown document ready for page assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Text of the first plain run of the first top level heading
    pub title: Option<String>,
    /// HTML fragment for the page body
    pub body: String,
}

/// Renders markdown to HTML through the comrak document tree.
///
/// Parsing produces an arena backed tree which is rewritten in place
/// (relative links, optional code highlighting) before rendering. The title
/// is read from the same tree.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    link_rewriter: LinkRewriter,
    highlighter: Option<Highlighter>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer for plain CommonMark.
    ///
    /// Raw HTML in the source passes through unchanged.
    pub fn new() -> Self {
        let mut options = Options::default();

        // Documentation sources are trusted
        options.render.unsafe_ = true;

        Self {
            options,
            link_rewriter: LinkRewriter::new(),
            highlighter: None,
        }
    }

    /// Enables GitHub Flavored Markdown extensions.
    ///
    /// Tables, strikethrough, autolinks, task lists and footnotes.
    pub fn with_gfm(mut self) -> Self {
        self.options.extension.strikethrough = true;
        self.options.extension.table = true;
        self.options.extension.autolink = true;
        self.options.extension.tasklist = true;
        self.options.extension.footnotes = true;
        self
    }

    /// Replaces link rewriter.
    pub fn with_link_rewriter(mut self, link_rewriter: LinkRewriter) -> Self {
        self.link_rewriter = link_rewriter;
        self
    }

    /// Enables fenced code block highlighting.
    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Renders markdown content to a page body and title.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown source text
    ///
    /// # Errors
    ///
    /// Returns error if code highlighting fails or rendered HTML is not UTF8
    pub fn render(&self, content: &str) -> Result<RenderedPage> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        let rewritten = self.link_rewriter.rewrite_links(root, content);
        debug!("Rewrote {} relative links", rewritten);

        let title = extract_title(root);

        if let Some(highlighter) = &self.highlighter {
            let count = highlighter
                .highlight_code_blocks(root)
                .context("Failed to highlight code blocks")?;
            debug!("Highlighted {} code blocks", count);
        }

        let mut html = Vec::with_capacity(content.len() * 2);
        format_html(root, &self.options, &mut html).context("Failed to render HTML")?;
        let body = String::from_utf8(html).context("Rendered HTML is not valid UTF8")?;

        Ok(RenderedPage { title, body })
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}
