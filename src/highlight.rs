//! Fenced code block highlighting with syntect.

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use log::debug;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Highlights fenced code blocks using a built-in syntect theme.
///
/// Output uses inline styles so the page needs no extra stylesheet.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Creates highlighter for a named built-in theme.
    ///
    /// # Arguments
    ///
    /// * `theme_name`: syntect theme name (InspiredGitHub, base16-ocean.dark, etc)
    ///
    /// # Errors
    ///
    /// Returns error if no built-in theme has this name
    pub fn new(theme_name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(theme_name).with_context(|| {
            let known: Vec<_> = themes.themes.keys().map(String::as_str).collect();
            format!(
                "Unknown highlight theme: {} (available: {})",
                theme_name,
                known.join(", ")
            )
        })?;

        Ok(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Highlights code for the given language token.
    ///
    /// # Returns
    ///
    /// Styled `<pre>` block, or None if the language is unknown
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails while highlighting
    pub fn highlight(&self, code: &str, language: &str) -> Result<Option<String>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return Ok(None);
        };

        highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme)
            .map(Some)
            .with_context(|| format!("Failed to highlight {} code block", language))
    }

    /// Replaces fenced code blocks in the tree with highlighted HTML blocks.
    ///
    /// Only fenced blocks whose info string starts with a known language are
    /// replaced. Indented blocks and unknown languages are left for the
    /// renderer to emit as plain `<pre><code>`.
    ///
    /// # Returns
    ///
    /// Number of highlighted blocks
    ///
    /// # Errors
    ///
    /// Returns error if highlighting any block fails
    pub fn highlight_code_blocks<'a>(&self, root: &'a AstNode<'a>) -> Result<usize> {
        let mut highlighted = 0;

        for node in root.descendants() {
            let mut ast = node.data.borrow_mut();

            let html = {
                let NodeValue::CodeBlock(block) = &ast.value else {
                    continue;
                };
                if !block.fenced {
                    continue;
                }
                let Some(language) = block.info.split_whitespace().next() else {
                    continue;
                };
                match self.highlight(&block.literal, language)? {
                    Some(html) => {
                        debug!("Highlighted {} code block", language);
                        html
                    }
                    None => continue,
                }
            };

            ast.value = NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 0,
                literal: html,
            });
            highlighted += 1;
        }

        Ok(highlighted)
    }
}
