//! Table row handling and rendering.
//!
//! Row 0 is always the header. Row 1 is consumed without rendering when
//! it is a separator row. Column counts are not validated: a short or
//! long row renders with however many cells it has.

use super::inline;

/// Table line syntax.
pub struct Table;

impl Table {
    /// The cell delimiter.
    pub const PIPE: char = '|';

    /// Whether the line belongs to a table: it starts with `|` after
    /// trimming.
    pub fn is_row(line: &str) -> bool {
        line.trim().starts_with(Self::PIPE)
    }

    /// Whether the row is a header separator: nothing but whitespace,
    /// `|`, `:`, and `-`.
    pub fn is_separator(row: &str) -> bool {
        row.chars()
            .all(|c| matches!(c, '|' | ':' | '-') || c.is_whitespace())
    }

    /// Splits a raw row line into trimmed cell texts.
    ///
    /// One leading and one trailing `|` are stripped if present; the
    /// remainder is split on `|`.
    pub fn cells(row: &str) -> Vec<&str> {
        let t = row.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim).collect()
    }
}

/// Renders accumulated raw table-row lines to an HTML table.
///
/// The header section always wraps row 0; a body section is emitted only
/// when body rows exist. Each cell's text is inline-transformed.
pub fn render(rows: &[String]) -> String {
    let Some((header, rest)) = rows.split_first() else {
        return String::new();
    };

    let body = match rest.split_first() {
        Some((second, tail)) if Table::is_separator(second) => tail,
        _ => rest,
    };

    let mut html = String::from("<table><thead><tr>");
    for cell in Table::cells(header) {
        html.push_str("<th>");
        html.push_str(&inline::transform(cell));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead>");

    if !body.is_empty() {
        html.push_str("<tbody>");
        for row in body {
            html.push_str("<tr>");
            for cell in Table::cells(row) {
                html.push_str("<td>");
                html.push_str(&inline::transform(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");
    }

    html.push_str("</table>");
    html
}
