//! Markdown-lite renderer for model analysis text.
//!
//! The dashboard renders analysis prose from a small fixed grammar: two
//! heading levels, dash bullets, blank-line breaks and bold/italic spans.
//! No nesting, escaping, links, tables or code.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Inline span inside a paragraph or list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
}

/// Top-level display block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    SubHeading { text: String },
    List { items: Vec<Vec<Inline>> },
    Paragraph { spans: Vec<Inline> },
    Break,
}

static INLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*|\*[^*]+\*").unwrap());

/// Split a line into text, `**bold**` and `*italic*` spans.
fn parse_inline(line: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for m in INLINE_RE.find_iter(line) {
        if m.start() > cursor {
            spans.push(Inline::Text(line[cursor..m.start()].to_string()));
        }
        let token = m.as_str();
        if let Some(inner) = token.strip_prefix("**").and_then(|t| t.strip_suffix("**")) {
            spans.push(Inline::Bold(inner.to_string()));
        } else if let Some(inner) = token.strip_prefix('*').and_then(|t| t.strip_suffix('*')) {
            spans.push(Inline::Italic(inner.to_string()));
        }
        cursor = m.end();
    }
    if cursor < line.len() {
        spans.push(Inline::Text(line[cursor..].to_string()));
    }

    spans
}

/// Render analysis text to display blocks, line by line.
pub fn render(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list_buffer: Vec<Vec<Inline>> = Vec::new();

    for line in text.lines() {
        if let Some(item) = line.strip_prefix("- ") {
            list_buffer.push(parse_inline(item));
            continue;
        }
        if !list_buffer.is_empty() {
            blocks.push(Block::List {
                items: std::mem::take(&mut list_buffer),
            });
        }

        if let Some(heading) = line.strip_prefix("### ") {
            blocks.push(Block::Heading {
                text: heading.to_string(),
            });
        } else if let Some(heading) = line.strip_prefix("## ") {
            blocks.push(Block::SubHeading {
                text: heading.to_string(),
            });
        } else if line.trim().is_empty() {
            blocks.push(Block::Break);
        } else {
            blocks.push(Block::Paragraph {
                spans: parse_inline(line),
            });
        }
    }

    if !list_buffer.is_empty() {
        blocks.push(Block::List { items: list_buffer });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        let blocks = render("### Market Context\n## Execution");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    text: "Market Context".to_string()
                },
                Block::SubHeading {
                    text: "Execution".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_list_buffering_and_flush() {
        let blocks = render("- first\n- second\nafter");
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            Block::List { items } => assert_eq!(items.len(), 2),
            other => panic!("expected list, got {:?}", other),
        }
        assert!(matches!(blocks[1], Block::Paragraph { .. }));
    }

    #[test]
    fn test_trailing_list_is_flushed() {
        let blocks = render("intro\n- only item");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[1], Block::List { .. }));
    }

    #[test]
    fn test_blank_line_is_break() {
        let blocks = render("a\n\nb");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[1], Block::Break));
    }

    #[test]
    fn test_inline_bold_italic() {
        let spans = parse_inline("go **long** at *market* open");
        assert_eq!(
            spans,
            vec![
                Inline::Text("go ".to_string()),
                Inline::Bold("long".to_string()),
                Inline::Text(" at ".to_string()),
                Inline::Italic("market".to_string()),
                Inline::Text(" open".to_string()),
            ]
        );
    }

    #[test]
    fn test_inline_unterminated_marker_stays_text() {
        let spans = parse_inline("a ** b");
        assert_eq!(spans, vec![Inline::Text("a ** b".to_string())]);
    }

    #[test]
    fn test_block_json_is_tagged() {
        let json = serde_json::to_string(&Block::Heading {
            text: "Setup".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"heading","text":"Setup"}"#);

        let json = serde_json::to_string(&Inline::Bold("risk".to_string())).unwrap();
        assert_eq!(json, r#"{"type":"bold","text":"risk"}"#);
    }

    #[test]
    fn test_empty_input() {
        assert!(render("").is_empty());
    }
}
