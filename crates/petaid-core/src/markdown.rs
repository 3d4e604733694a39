//! Markdown Rendering
//!
//! Prediction summaries carry light markdown (`**bold**`, bullet lists).
//! Raw HTML in the input is escaped, never passed through.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

/// Render markdown to an HTML string safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}
