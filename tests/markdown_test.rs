//! Markdown-lite rendering of realistic analysis text.

use augur::services::markdown::{render, Block, Inline};

#[test]
fn test_briefing_note_rendering() {
    let text = "### Market Context\n\
                The 4H trend is **bullish** with a fresh demand zone.\n\n\
                ## Execution\n\
                - Wait for a *bullish engulfing* on 5m\n\
                - Stop below the zone\n\
                Final note.";

    let blocks = render(text);

    assert_eq!(
        blocks[0],
        Block::Heading {
            text: "Market Context".to_string()
        }
    );
    match &blocks[1] {
        Block::Paragraph { spans } => {
            assert!(spans.contains(&Inline::Bold("bullish".to_string())));
        }
        other => panic!("expected paragraph, got {:?}", other),
    }
    assert_eq!(blocks[2], Block::Break);
    assert_eq!(
        blocks[3],
        Block::SubHeading {
            text: "Execution".to_string()
        }
    );
    match &blocks[4] {
        Block::List { items } => {
            assert_eq!(items.len(), 2);
            assert!(items[0].contains(&Inline::Italic("bullish engulfing".to_string())));
        }
        other => panic!("expected list, got {:?}", other),
    }
    assert!(matches!(blocks[5], Block::Paragraph { .. }));
}

#[test]
fn test_blocks_serialize_for_dashboard() {
    let blocks = render("### Setup\n- **entry** at 2006\n");
    let json = serde_json::to_value(&blocks).unwrap();

    assert_eq!(json[0]["type"], "heading");
    assert_eq!(json[0]["text"], "Setup");
    assert_eq!(json[1]["type"], "list");
    assert_eq!(json[1]["items"][0][0]["type"], "bold");
    assert_eq!(json[1]["items"][0][0]["text"], "entry");
}

#[test]
fn test_plain_text_is_paragraphs() {
    let blocks = render("one\ntwo");
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| matches!(b, Block::Paragraph { .. })));
}

#[test]
fn test_heading_marker_without_space_is_paragraph() {
    let blocks = render("###Tight");
    assert!(matches!(blocks[0], Block::Paragraph { .. }));
}
