/// List item line syntax. Lists are flat: indentation is accepted but
/// never produces nesting.
pub struct ListItem;

impl ListItem {
    /// Unordered item markers.
    pub const UNORDERED: [&'static str; 2] = ["- ", "* "];

    /// Parses a list item line into `(ordered, trimmed item text)`.
    ///
    /// Unordered: optional leading whitespace, `-` or `*`, one space,
    /// text. Ordered: optional leading whitespace, digits, `.`, one
    /// space, text.
    pub fn parse(line: &str) -> Option<(bool, &str)> {
        let t = line.trim_start();

        for marker in Self::UNORDERED {
            if let Some(rest) = t.strip_prefix(marker) {
                let text = rest.trim();
                if !text.is_empty() {
                    return Some((false, text));
                }
            }
        }

        let digits = t.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0
            && let Some(rest) = t[digits..].strip_prefix(". ")
        {
            let text = rest.trim();
            if !text.is_empty() {
                return Some((true, text));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_asterisk_items() {
        assert_eq!(ListItem::parse("- first"), Some((false, "first")));
        assert_eq!(ListItem::parse("* second"), Some((false, "second")));
    }

    #[test]
    fn indented_item_stays_flat() {
        assert_eq!(ListItem::parse("    - nested?"), Some((false, "nested?")));
    }

    #[test]
    fn ordered_items() {
        assert_eq!(ListItem::parse("1. one"), Some((true, "one")));
        assert_eq!(ListItem::parse("42. answer"), Some((true, "answer")));
    }

    #[test]
    fn marker_requires_space_and_text() {
        assert_eq!(ListItem::parse("-dash"), None);
        assert_eq!(ListItem::parse("- "), None);
        assert_eq!(ListItem::parse("1.no space"), None);
        assert_eq!(ListItem::parse("1four. text"), None);
    }
}
