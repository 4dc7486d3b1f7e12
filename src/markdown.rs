//! Markdown to HTML conversion over the comrak document tree.
//!
//! This module parses markdown into comrak's arena AST, rewrites relative
//! links so they point at generated `.html` siblings, extracts the page title
//! from the first heading, and renders the tree to an HTML fragment.

mod links;
mod renderer;
mod title;

pub use links::{Destination, LinkRewriter};
pub use renderer::{MarkdownRenderer, RenderedPage};
pub use title::extract_title;
