//! Relative link rewriting for generated HTML siblings.

use comrak::nodes::{AstNode, NodeValue, Sourcepos};
use log::debug;

/// Suffix appended to relative link paths.
const HTML_SUFFIX: &str = ".html";

/// Markdown source extensions removed when extension stripping is enabled.
const SOURCE_EXTENSIONS: [&str; 2] = [".md", ".markdown"];

/// Link destination split into its URI components.
///
/// Components keep their exact source text. A component is `None` when its
/// delimiter is absent. Reassembly drops empty components, so `page?#` comes
/// back as `page` and a bare `//` disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination<'a> {
    pub scheme: Option<&'a str>,
    pub netloc: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> Destination<'a> {
    /// Splits destination into scheme, network location, path, query and fragment.
    ///
    /// Follows generic URI syntax: a scheme is an ASCII letter followed by
    /// letters, digits, `+`, `-` or `.` and terminated by `:`; a network
    /// location follows `//` and runs until the next `/`, `?` or `#`.
    /// Splitting never fails, any input yields some decomposition.
    pub fn split(destination: &'a str) -> Self {
        let (scheme, rest) = match destination.find(':') {
            Some(idx) if is_scheme(&destination[..idx]) => {
                (Some(&destination[..idx]), &destination[idx + 1..])
            }
            _ => (None, destination),
        };

        let (netloc, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        let (rest, fragment) = match rest.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment)),
            None => (rest, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Self {
            scheme,
            netloc,
            path,
            query,
            fragment,
        }
    }

    /// Returns true when destination has no network location and is not root relative.
    pub fn is_relative(&self) -> bool {
        self.netloc.is_none_or(str::is_empty) && !self.path.starts_with('/')
    }

    /// Reassembles destination with a replacement path.
    ///
    /// The scheme is lowercased. Empty network location, query and fragment
    /// are omitted together with their delimiters.
    pub fn with_path(&self, path: &str) -> String {
        let mut out = String::with_capacity(
            path.len()
                + self.scheme.map_or(0, |s| s.len() + 1)
                + self.netloc.map_or(0, |n| n.len() + 2)
                + self.query.map_or(0, |q| q.len() + 1)
                + self.fragment.map_or(0, |f| f.len() + 1),
        );

        if let Some(scheme) = self.scheme {
            out.push_str(&scheme.to_ascii_lowercase());
            out.push(':');
        }
        if let Some(netloc) = self.netloc.filter(|n| !n.is_empty()) {
            out.push_str("//");
            out.push_str(netloc);
        }
        out.push_str(path);
        if let Some(query) = self.query.filter(|q| !q.is_empty()) {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = self.fragment.filter(|f| !f.is_empty()) {
            out.push('#');
            out.push_str(fragment);
        }

        out
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Rewrites relative link destinations to point at generated HTML pages.
///
/// Destinations without a network location and not rooted at `/` get `.html`
/// appended to their path component (`guide` becomes `guide.html`,
/// `sub/page?x=1#frag` becomes `sub/page.html?x=1#frag`). Absolute URLs and
/// root relative paths pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkRewriter {
    strip_source_extension: bool,
}

impl LinkRewriter {
    /// Creates rewriter that only appends the `.html` suffix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates rewriter that replaces `.md`/`.markdown` with `.html`.
    ///
    /// Paths without a markdown extension still get `.html` appended.
    pub fn stripping_source_extension() -> Self {
        Self {
            strip_source_extension: true,
        }
    }

    /// Rewrites single destination.
    ///
    /// # Returns
    ///
    /// New destination, or None when the destination is left unchanged
    pub fn rewrite(&self, destination: &str) -> Option<String> {
        let parts = Destination::split(destination);
        if !parts.is_relative() {
            return None;
        }

        let stem = if self.strip_source_extension {
            strip_source_extension(parts.path)
        } else {
            parts.path
        };

        Some(parts.with_path(&format!("{stem}{HTML_SUFFIX}")))
    }

    /// Rewrites every hyperlink in the document tree in place.
    ///
    /// Walks the tree depth first. Link nodes are rewritten but not descended
    /// into, so link text is never touched. Image sources are left alone, and
    /// so are autolinks (`<user@host>`, `<scheme:...>` and GFM bare URLs or
    /// emails), which comrak also represents as link nodes.
    ///
    /// # Arguments
    ///
    /// * `node`: Root of the tree to rewrite
    /// * `source`: Markdown source the tree was parsed from
    ///
    /// # Returns
    ///
    /// Number of rewritten links
    pub fn rewrite_links<'a>(&self, node: &'a AstNode<'a>, source: &str) -> usize {
        let source = SourceLines::new(source);
        self.rewrite_children(node, &source)
    }

    fn rewrite_children<'a>(&self, node: &'a AstNode<'a>, source: &SourceLines<'_>) -> usize {
        let mut rewritten = 0;

        for child in node.children() {
            {
                let mut ast = child.data.borrow_mut();
                let sourcepos = ast.sourcepos;
                if let NodeValue::Link(ref mut link) = ast.value {
                    if source.is_autolink(sourcepos) {
                        debug!("Skipped autolink {}", link.url);
                    } else if let Some(url) = self.rewrite(&link.url) {
                        debug!("Rewrote link {} -> {}", link.url, url);
                        link.url = url;
                        rewritten += 1;
                    }
                    continue;
                }
            }

            rewritten += self.rewrite_children(child, source);
        }

        rewritten
    }
}

/// Markdown source split into lines for sourcepos lookups.
struct SourceLines<'s> {
    lines: Vec<&'s str>,
}

impl<'s> SourceLines<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            lines: source.split('\n').collect(),
        }
    }

    /// Returns true when a link node was produced by autolink syntax.
    ///
    /// Pointy brace autolinks start at their `<`, inline and reference links
    /// start at `[`. GFM extension autolinks carry no source line at all.
    fn is_autolink(&self, sourcepos: Sourcepos) -> bool {
        let start = sourcepos.start;
        if start.line == 0 {
            return true;
        }

        let byte = self
            .lines
            .get(start.line - 1)
            .and_then(|line| line.as_bytes().get(start.column.checked_sub(1)?));

        byte == Some(&b'<')
    }
}

fn strip_source_extension(path: &str) -> &str {
    for ext in SOURCE_EXTENSIONS {
        if path.len() > ext.len() {
            let split = path.len() - ext.len();
            if path.is_char_boundary(split) && path[split..].eq_ignore_ascii_case(ext) {
                return &path[..split];
            }
        }
    }
    path
}
