use crate::parsing::{inline, slug, table::Table};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak},
    types::Block,
};

/// The single open multi-line accumulator. At most one of these states
/// is active at a time; opening another flushes the current one first.
#[derive(Debug)]
enum OpenBlock {
    None,
    CodeFence { lines: Vec<String> },
    Table { rows: Vec<String> },
    Blockquote { lines: Vec<String> },
    List { ordered: bool, items: Vec<String> },
}

/// Scans the document into its ordered block sequence.
///
/// Rules are evaluated per line in fixed precedence order: fence
/// delimiter, fence content, blank, horizontal rule, heading, table row,
/// blockquote, list item, paragraph. A line that ends an open table or
/// blockquote is re-dispatched at the same index so it can also begin
/// the next block; every line is re-dispatched at most once.
pub fn scan(input: &str) -> Vec<Block> {
    let lines: Vec<&str> = input
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let mut out = Vec::new();
    let mut open = OpenBlock::None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        // Fence delimiters toggle the raw zone and win over every other rule.
        if CodeFence::is_delimiter(line) {
            match std::mem::replace(&mut open, OpenBlock::None) {
                OpenBlock::CodeFence { lines } => out.push(Block::CodeBlock { lines }),
                other => {
                    flush_into(other, &mut out);
                    open = OpenBlock::CodeFence { lines: Vec::new() };
                }
            }
            i += 1;
            continue;
        }
        if let OpenBlock::CodeFence { lines } = &mut open {
            lines.push(line.to_string());
            i += 1;
            continue;
        }

        if line.trim().is_empty() {
            flush(&mut open, &mut out);
            i += 1;
            continue;
        }

        if ThematicBreak::matches(line) {
            flush(&mut open, &mut out);
            out.push(Block::HorizontalRule);
            i += 1;
            continue;
        }

        if let Some((level, text)) = Heading::parse(line) {
            flush(&mut open, &mut out);
            out.push(Block::Heading {
                level,
                id: slug::slugify(text),
                text: inline::transform(text),
            });
            i += 1;
            continue;
        }

        if Table::is_row(line) {
            if let OpenBlock::Table { rows } = &mut open {
                rows.push(line.trim().to_string());
            } else {
                flush(&mut open, &mut out);
                open = OpenBlock::Table {
                    rows: vec![line.trim().to_string()],
                };
            }
            i += 1;
            continue;
        }
        if matches!(open, OpenBlock::Table { .. }) {
            // The table ends here; the same line may open another block.
            flush(&mut open, &mut out);
            continue;
        }

        if let Some(content) = BlockQuote::strip_marker(line) {
            if let OpenBlock::Blockquote { lines } = &mut open {
                lines.push(content.to_string());
            } else {
                flush(&mut open, &mut out);
                open = OpenBlock::Blockquote {
                    lines: vec![content.to_string()],
                };
            }
            i += 1;
            continue;
        }
        if matches!(open, OpenBlock::Blockquote { .. }) {
            flush(&mut open, &mut out);
            continue;
        }

        if let Some((ordered, text)) = ListItem::parse(line) {
            match &mut open {
                OpenBlock::List { ordered: o, items } if *o == ordered => {
                    items.push(text.to_string())
                }
                _ => {
                    flush(&mut open, &mut out);
                    open = OpenBlock::List {
                        ordered,
                        items: vec![text.to_string()],
                    };
                }
            }
            i += 1;
            continue;
        }

        // Default: every remaining non-blank line is its own paragraph.
        // Closes any open list so emission order tracks source order.
        flush(&mut open, &mut out);
        out.push(Block::Paragraph {
            text: inline::transform(line.trim()),
        });
        i += 1;
    }

    // EOF flush; an unterminated fence is emitted like a closed one.
    flush(&mut open, &mut out);
    out
}

fn flush(open: &mut OpenBlock, out: &mut Vec<Block>) {
    flush_into(std::mem::replace(open, OpenBlock::None), out);
}

fn flush_into(open: OpenBlock, out: &mut Vec<Block>) {
    match open {
        OpenBlock::None => {}
        OpenBlock::CodeFence { lines } => out.push(Block::CodeBlock { lines }),
        OpenBlock::Table { rows } => out.push(Block::Table { rows }),
        OpenBlock::Blockquote { lines } => out.push(Block::Blockquote { lines }),
        OpenBlock::List { ordered, items } => out.push(Block::List { ordered, items }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_plain_lines_stay_separate() {
        let blocks = scan("Line one\nLine two");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::Paragraph { text } if text == "Line one"));
        assert!(matches!(&blocks[1], Block::Paragraph { text } if text == "Line two"));
    }

    #[test]
    fn fence_accumulates_verbatim() {
        let blocks = scan("```\n# not a heading\n\n| not | a | table |\n```");
        assert_eq!(blocks.len(), 1);
        let Block::CodeBlock { lines } = &blocks[0] else {
            panic!("expected CodeBlock");
        };
        assert_eq!(lines, &["# not a heading", "", "| not | a | table |"]);
    }

    #[test]
    fn unterminated_fence_flushes_at_eof() {
        let blocks = scan("```\ndangling");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], Block::CodeBlock { lines } if lines == &["dangling"]));
    }

    #[test]
    fn fence_opener_flushes_open_list() {
        let blocks = scan("- item\n```\ncode\n```");
        assert!(matches!(&blocks[0], Block::List { ordered: false, .. }));
        assert!(matches!(&blocks[1], Block::CodeBlock { .. }));
    }

    #[test]
    fn table_exit_redispatches_the_same_line() {
        let blocks = scan("| a | b |\n| 1 | 2 |\nplain text");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::Table { rows } if rows.len() == 2));
        assert!(matches!(&blocks[1], Block::Paragraph { text } if text == "plain text"));
    }

    #[test]
    fn table_exit_can_open_a_list() {
        let blocks = scan("| a |\n- item");
        assert!(matches!(&blocks[0], Block::Table { .. }));
        assert!(matches!(&blocks[1], Block::List { ordered: false, .. }));
    }

    #[test]
    fn blockquote_exit_redispatches_the_same_line() {
        let blocks = scan("> quoted\nafter");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::Blockquote { lines } if lines == &["quoted"]));
        assert!(matches!(&blocks[1], Block::Paragraph { text } if text == "after"));
    }

    #[test]
    fn blank_line_closes_open_state() {
        let blocks = scan("> one\n\n> two");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::Blockquote { .. }));
        assert!(matches!(&blocks[1], Block::Blockquote { .. }));
    }

    #[test]
    fn opposite_orderedness_splits_the_list() {
        let blocks = scan("- a\n- b\n1. c");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::List { ordered: false, items } if items.len() == 2));
        assert!(matches!(&blocks[1], Block::List { ordered: true, items } if items.len() == 1));
    }

    #[test]
    fn heading_closes_open_table() {
        let blocks = scan("| a |\n# Title");
        assert!(matches!(&blocks[0], Block::Table { .. }));
        assert!(matches!(&blocks[1], Block::Heading { level: 1, .. }));
    }

    #[test]
    fn rule_precedence_over_list_marker() {
        // A run of asterisks is a rule, not an unordered item.
        let blocks = scan("***");
        assert_eq!(blocks, vec![Block::HorizontalRule]);
    }

    #[test]
    fn crlf_input_is_tolerated() {
        let blocks = scan("# Title\r\ntext\r\n");
        assert!(matches!(&blocks[0], Block::Heading { level: 1, .. }));
        assert!(matches!(&blocks[1], Block::Paragraph { text } if text == "text"));
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(scan("").is_empty());
    }
}
