/// Horizontal rule syntax.
pub struct ThematicBreak;

impl ThematicBreak {
    /// Minimum run length for a rule.
    pub const MIN_LEN: usize = 3;

    /// Whether the trimmed line is a run of three or more `-` or three
    /// or more `*`, with nothing else.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_LEN && (t.bytes().all(|b| b == b'-') || t.bytes().all(|b| b == b'*'))
    }
}
