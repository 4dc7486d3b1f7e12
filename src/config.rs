//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::highlight::Highlighter;
use crate::markdown::{LinkRewriter, MarkdownRenderer};

/// Command line configuration for md2html.
#[derive(Debug, Clone, Parser)]
#[command(name = "md2html", version, about, long_about = None)]
pub struct Config {
    /// Input Markdown file name
    #[arg(value_name = "MDFILE")]
    pub input: PathBuf,

    /// Output HTML file name
    #[arg(value_name = "HTMLFILE")]
    pub output: PathBuf,

    /// Enable GitHub Flavored Markdown extensions
    #[arg(long)]
    pub gfm: bool,

    /// Replace .md/.markdown link extensions instead of appending .html
    #[arg(long)]
    pub strip_md_extension: bool,

    /// Highlight fenced code blocks with this theme (InspiredGitHub, base16-ocean.dark, etc.)
    #[arg(long)]
    pub theme: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if input file does not exist or output would overwrite it.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if self.input == self.output {
            bail!(
                "Output file would overwrite input: {}",
                self.output.display()
            );
        }

        Ok(())
    }

    /// Returns default log filter for the configured verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Builds markdown renderer from configured options.
    ///
    /// # Errors
    ///
    /// Returns error if highlight theme is unknown.
    pub fn renderer(&self) -> Result<MarkdownRenderer<'static>> {
        let mut renderer = MarkdownRenderer::new();

        if self.gfm {
            renderer = renderer.with_gfm();
        }

        if self.strip_md_extension {
            renderer = renderer.with_link_rewriter(LinkRewriter::stripping_source_extension());
        }

        if let Some(theme) = &self.theme {
            renderer = renderer.with_highlighter(Highlighter::new(theme)?);
        }

        Ok(renderer)
    }
}
