//! Standalone HTML page assembly.

use maud::{Markup, PreEscaped, html};

/// Inline stylesheet applied to every generated page.
const BODY_STYLE: &str = "body { font-family: sans-serif; }";

/// Wraps rendered body fragment in a minimal HTML document.
///
/// Emits `<html>`, a `<head>` holding the optional title and the inline
/// body style, then the fragment inside `<body>`. The title is escaped; the
/// fragment is already HTML and is inserted verbatim.
///
/// # Arguments
///
/// * `title`: Page title, omitted from `<head>` when None
/// * `body`: Rendered HTML fragment
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(title: Option<&str>, body: &str) -> Markup {
    html! {
        html {
            head {
                @if let Some(title) = title {
                    title { (title) }
                }
                style { (PreEscaped(BODY_STYLE)) }
            }
            body {
                (PreEscaped(body))
            }
        }
    }
}
