//! Markdown to plain text conversion.
//!
//! Uses pulldown-cmark so that emphasis markers, link targets, and code
//! blocks are removed by structure rather than by pattern. Each block ends
//! up as its own paragraph, separated by a blank line, so paragraph and
//! sentence counts on the result match what a reader sees.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Convert markdown into plain prose.
///
/// - YAML frontmatter is removed.
/// - Fenced and indented code blocks are dropped; inline code keeps its text.
/// - Headings, paragraphs, list items, and table rows each become a block.
/// - Link text is kept, link targets and image sources are not.
/// - Raw HTML is dropped.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn to_plain_text(text: &str) -> String {
    let body = strip_frontmatter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut blocks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_code_block = false;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            _ if in_code_block => {}

            Event::Text(t) | Event::Code(t) => current.push_str(&t),
            Event::SoftBreak | Event::HardBreak => current.push(' '),
            Event::End(TagEnd::TableCell) => current.push(' '),

            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::TableHead
                | TagEnd::TableRow,
            ) => flush(&mut blocks, &mut current),
            // A list item's text may be followed by a nested list.
            Event::Start(Tag::List(_)) => flush(&mut blocks, &mut current),

            _ => {}
        }
    }
    flush(&mut blocks, &mut current);

    blocks.join("\n\n")
}

fn flush(blocks: &mut Vec<String>, current: &mut String) {
    let block = current.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
    current.clear();
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let Some(rest) = text.trim_start().strip_prefix("---") else {
        return text;
    };
    if !rest.starts_with(['\n', '\r']) {
        return text;
    }
    let Some(close) = rest.find("\n---") else {
        return text;
    };

    let after = &rest[close + 4..];
    match after.find('\n') {
        Some(newline) => &after[newline + 1..],
        None => "",
    }
}
