//! Reply markup rendering.
//!
//! Replies carry two bits of markup: `**text**` for emphasis and `\n` for line
//! breaks. For HTML the raw text is escaped first, then emphasis is substituted,
//! then newlines; escaping after substitution would mangle the inserted tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::compile_regex;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\*\*(.+?)\*\*"));

/// Render reply text as an HTML fragment safe to insert into a chat bubble.
pub fn render_html(text: &str) -> String {
    let escaped = html_escape::encode_text(text);
    let emphasized = EMPHASIS.replace_all(&escaped, "<strong>$1</strong>");
    emphasized.replace('\n', "<br>")
}

/// Plain-text rendering: emphasis markers dropped, newlines kept.
pub fn render_plain(text: &str) -> String {
    EMPHASIS.replace_all(text, "$1").into_owned()
}
