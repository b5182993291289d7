/// Fenced code block syntax.
pub struct CodeFence;

impl CodeFence {
    /// The fence delimiter marker.
    pub const MARKER: &'static str = "```";

    /// Whether the line toggles a code fence. Leading whitespace is
    /// ignored; anything after the marker (a language tag) is too.
    pub fn is_delimiter(line: &str) -> bool {
        line.trim_start().starts_with(Self::MARKER)
    }
}
