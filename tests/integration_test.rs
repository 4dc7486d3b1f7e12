//! Integration tests for md2html.
//!
//! Tests file conversion, link rewriting, and title extraction through the
//! public library API.

mod common;

use anyhow::Result;
use md2html::{LinkRewriter, MarkdownRenderer, convert_file, convert_str};
use std::fs;

#[test]
fn test_convert_file_writes_page() -> Result<()> {
    // Arrange
    let dir = common::create_docs_dir()?;
    let input = common::write_file(
        dir.path(),
        "README.md",
        "# Hello\n\nSee [other](other.md) for details.\n",
    )?;
    let output = dir.path().join("README.html");

    // Act
    let title = convert_file(&MarkdownRenderer::new(), &input, &output)?;

    // Assert
    assert_eq!(title.as_deref(), Some("Hello"));
    let html = fs::read_to_string(&output)?;
    assert_eq!(common::page_title(&html), Some("Hello"));
    assert!(html.contains("href=\"other.md.html\""), "{}", html);
    assert!(html.starts_with("<html><head><title>Hello</title>"));
    assert!(html.contains("<style>body { font-family: sans-serif; }</style>"));

    Ok(())
}

#[test]
fn test_convert_file_strips_markdown_extension() -> Result<()> {
    // Arrange
    let dir = common::create_docs_dir()?;
    let input = common::write_file(
        dir.path(),
        "README.md",
        "# Hello\n\nSee [other](other.md) for details.\n",
    )?;
    let output = dir.path().join("README.html");
    let renderer =
        MarkdownRenderer::new().with_link_rewriter(LinkRewriter::stripping_source_extension());

    // Act
    convert_file(&renderer, &input, &output)?;

    // Assert
    let html = fs::read_to_string(&output)?;
    assert!(html.contains("href=\"other.html\""), "{}", html);

    Ok(())
}

#[test]
fn test_convert_file_overwrites_existing_output() -> Result<()> {
    // Arrange
    let dir = common::create_docs_dir()?;
    let input = common::write_file(dir.path(), "page.md", "Fresh content.\n")?;
    let output = common::write_file(dir.path(), "page.html", "stale stale stale")?;

    // Act
    convert_file(&MarkdownRenderer::new(), &input, &output)?;

    // Assert
    let html = fs::read_to_string(&output)?;
    assert!(!html.contains("stale"));
    assert!(html.contains("<p>Fresh content.</p>"));

    Ok(())
}

#[test]
fn test_convert_file_missing_input() -> Result<()> {
    // Arrange
    let dir = common::create_docs_dir()?;
    let input = dir.path().join("missing.md");
    let output = dir.path().join("missing.html");

    // Act
    let result = convert_file(&MarkdownRenderer::new(), &input, &output);

    // Assert
    let err = format!("{:#}", result.expect_err("Missing input should fail"));
    assert!(err.contains("Failed to read markdown file"), "{}", err);
    assert!(!output.exists(), "No output on read failure");

    Ok(())
}

#[test]
fn test_convert_file_rejects_invalid_utf8() -> Result<()> {
    // Arrange
    let dir = common::create_docs_dir()?;
    let input = dir.path().join("latin1.md");
    fs::write(&input, [b'#', b' ', 0xE9, b'\n'])?;

    // Act
    let result = convert_file(&MarkdownRenderer::new(), &input, dir.path().join("out.html"));

    // Assert
    assert!(result.is_err(), "Non UTF8 input should fail");

    Ok(())
}

#[test]
fn test_convert_file_unwritable_output() -> Result<()> {
    // Arrange
    let dir = common::create_docs_dir()?;
    let input = common::write_file(dir.path(), "a.md", "# A\n")?;
    let output = dir.path().join("no/such/dir/a.html");

    // Act
    let result = convert_file(&MarkdownRenderer::new(), &input, &output);

    // Assert
    let err = format!("{:#}", result.expect_err("Should fail to write"));
    assert!(err.contains("Failed to write HTML file"), "{}", err);

    Ok(())
}

#[test]
fn test_absolute_and_root_relative_links_untouched() -> Result<()> {
    // Arrange
    let markdown = "# Links\n\n\
        [abs](https://example.com/page) [root](/assets/img.png) \
        [rel](guide/intro?lang=en#setup)\n";

    // Act
    let html = convert_str(&MarkdownRenderer::new(), markdown)?;

    // Assert
    assert!(html.contains("href=\"https://example.com/page\""), "{}", html);
    assert!(html.contains("href=\"/assets/img.png\""), "{}", html);
    assert!(
        html.contains("href=\"guide/intro.html?lang=en#setup\""),
        "{}",
        html
    );

    Ok(())
}

#[test]
fn test_setext_heading_title() -> Result<()> {
    // Arrange
    let markdown = "User Guide\n==========\n\nBody text.\n";

    // Act
    let html = convert_str(&MarkdownRenderer::new(), markdown)?;

    // Assert
    assert_eq!(common::page_title(&html), Some("User Guide"));

    Ok(())
}

#[test]
fn test_no_heading_no_title() -> Result<()> {
    // Act
    let html = convert_str(&MarkdownRenderer::new(), "Just text.\n\n* item\n")?;

    // Assert
    assert_eq!(common::page_title(&html), None);
    assert!(!html.contains("<title"));

    Ok(())
}

#[test]
fn test_heading_and_body_survive_round_trip() -> Result<()> {
    // Arrange
    let markdown = "# Release Notes\n\nVersion two adds tray icons.\n";

    // Act
    let html = convert_str(&MarkdownRenderer::new(), markdown)?;

    // Assert
    let body = common::page_body(&html).expect("Page should have a body");
    assert_eq!(
        body,
        "<h1>Release Notes</h1>\n<p>Version two adds tray icons.</p>\n"
    );
    assert_eq!(common::page_title(&html), Some("Release Notes"));

    Ok(())
}

#[test]
fn test_link_text_not_rewritten() -> Result<()> {
    // Arrange
    let markdown = "[see notes.md](notes.md)\n";

    // Act
    let html = convert_str(&MarkdownRenderer::new(), markdown)?;

    // Assert
    assert!(
        html.contains("<a href=\"notes.md.html\">see notes.md</a>"),
        "{}",
        html
    );

    Ok(())
}

#[test]
fn test_autolinks_not_rewritten() -> Result<()> {
    // Arrange
    let markdown = "Mail <someone@example.com> or <mailto:a@b.org> or <irc:chan>.\n\n\
                    See [other](other) too.\n";

    // Act
    let html = convert_str(&MarkdownRenderer::new(), markdown)?;

    // Assert
    assert!(html.contains("href=\"mailto:someone@example.com\""), "{}", html);
    assert!(html.contains("href=\"mailto:a@b.org\""), "{}", html);
    assert!(html.contains("href=\"irc:chan\""), "{}", html);
    assert!(html.contains("href=\"other.html\""), "{}", html);
    assert!(!html.contains(".org.html"), "{}", html);

    Ok(())
}

#[test]
fn test_gfm_bare_email_not_rewritten() -> Result<()> {
    // Arrange
    let markdown = "Contact someone@example.com or read [faq](faq).\n";

    // Act
    let html = convert_str(&MarkdownRenderer::new().with_gfm(), markdown)?;

    // Assert
    assert!(html.contains("href=\"mailto:someone@example.com\""), "{}", html);
    assert!(html.contains("href=\"faq.html\""), "{}", html);

    Ok(())
}
