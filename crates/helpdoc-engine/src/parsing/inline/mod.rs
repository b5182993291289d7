//! # Inline Span Transformation
//!
//! Rewrites one already-extracted text fragment (a paragraph line, a
//! heading's text, a table cell, or one blockquote line) into markup.
//! Applied independently per fragment, never across fragment boundaries.
//!
//! Transformations run in fixed order: code spans, images, links, strong
//! (`**`/`__`), emphasis (`*`/`_`). Code spans are handled first by
//! segmenting the fragment at them, so their content is never touched by
//! the later rules and is not escaped. Malformed or unterminated markers
//! are left as literal characters.

use regex::Regex;
use std::sync::OnceLock;

fn code_span_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("invalid code span regex"))
}

fn image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("invalid image regex"))
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("invalid link regex"))
}

fn strong_asterisk_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("invalid strong regex"))
}

fn strong_underscore_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"__(.+?)__").expect("invalid strong regex"))
}

fn em_asterisk_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*[^*]+\*").expect("invalid emphasis regex"))
}

fn em_underscore_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_[^_]+_").expect("invalid emphasis regex"))
}

/// Transforms one text fragment into markup.
///
/// Pure string-to-string function; consults no scanner state and never
/// raises. Code span content passes through untransformed and unescaped.
pub fn transform(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = 0;
    for caps in code_span_re().captures_iter(fragment) {
        let full = caps.get(0).expect("match always has a full capture");
        out.push_str(&apply_spans(&fragment[rest..full.start()]));
        out.push_str("<code>");
        out.push_str(&caps[1]);
        out.push_str("</code>");
        rest = full.end();
    }
    out.push_str(&apply_spans(&fragment[rest..]));
    out
}

/// Rules 2 through 7, applied to a segment with no code spans in it.
fn apply_spans(text: &str) -> String {
    let text = image_re().replace_all(text, r#"<img src="${2}" alt="${1}">"#);
    let text = link_re().replace_all(
        &text,
        r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
    );
    let text = strong_asterisk_re().replace_all(&text, "<strong>${1}</strong>");
    let text = strong_underscore_re().replace_all(&text, "<strong>${1}</strong>");
    let text = emphasis(&text, em_asterisk_re(), b'*');
    emphasis(&text, em_underscore_re(), b'_')
}

/// Single-delimiter emphasis. A candidate match is skipped when either
/// delimiter abuts another delimiter character, so leftovers of an
/// unbalanced double run never turn into stray `<em>` tags.
fn emphasis(text: &str, re: &Regex, delim: u8) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut rest = 0;
    for m in re.find_iter(text) {
        let before = m.start().checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(m.end()).copied();
        if before == Some(delim) || after == Some(delim) {
            continue;
        }
        out.push_str(&text[rest..m.start()]);
        out.push_str("<em>");
        out.push_str(&text[m.start() + 1..m.end() - 1]);
        out.push_str("</em>");
        rest = m.end();
    }
    out.push_str(&text[rest..]);
    out
}
