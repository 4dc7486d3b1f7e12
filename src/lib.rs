//! Markdown to standalone HTML converter for documentation builds.

mod config;
mod convert;
mod highlight;
mod markdown;
mod page;

pub use config::Config;
pub use convert::{convert_file, convert_str};
pub use highlight::Highlighter;
pub use markdown::{Destination, LinkRewriter, MarkdownRenderer, RenderedPage, extract_title};
pub use page::page_wrapper;
