/// A structural markup unit produced by the scanner.
///
/// Blocks form a flat, ordered sequence; no block owns another. Heading
/// and paragraph text is already inline-transformed when the block is
/// emitted. Table rows, blockquote lines, and list items are stored raw
/// and transformed at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading with its slug id. Level is 1 through 6.
    Heading { level: u8, text: String, id: String },
    /// One physical line of plain text. Consecutive plain lines are
    /// never merged.
    Paragraph { text: String },
    /// Fenced code content, kept verbatim line by line.
    CodeBlock { lines: Vec<String> },
    /// Accumulated raw table-row lines, header first.
    Table { rows: Vec<String> },
    /// Quoted lines with the leading marker already removed.
    Blockquote { lines: Vec<String> },
    /// A flat list of item texts.
    List { ordered: bool, items: Vec<String> },
    /// A thematic break.
    HorizontalRule,
}
