//! Markdown rendering for content bodies
//!
//! The index treats bodies as opaque strings; this renderer is the only
//! place they are interpreted, and only when a detail view asks for markup.

use pulldown_cmark::{html, Options, Parser};

/// Renders content bodies to HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self
    }

    /// Render a body string to HTML, deterministically
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}
