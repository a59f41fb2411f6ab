/// Width of the label's text fields (`c25` in the header definitions).
pub const DESCRIPTION_WIDTH: usize = 25;

/// Two printable lines derived from an item description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelLines {
    pub line1: String,
    /// Empty when the description fits on the first line.
    pub line2: String,
}

impl LabelLines {
    pub fn new<A: Into<String>, B: Into<String>>(line1: A, line2: B) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

/// Split a description into two lines without breaking words.
///
/// The first line never exceeds `max_width` characters. It breaks at the last
/// space inside the first `max_width` characters; when there is none, the text
/// is cut hard at `max_width`. The remainder goes to the second line as is,
/// even when it is itself longer than `max_width`.
pub fn split_description(description: &str, max_width: usize) -> LabelLines {
    let text = description.trim();
    let limit = match text.char_indices().nth(max_width) {
        Some((offset, _)) => offset,
        // At most `max_width` chars: fits on one line.
        None => return LabelLines::new(text, ""),
    };

    let split_at = match text[..limit].rfind(' ') {
        Some(pos) if pos > 0 => pos,
        _ => limit,
    };

    LabelLines::new(text[..split_at].trim(), text[split_at..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_text_stays_on_first_line() {
        assert_eq!(
            split_description("Short", DESCRIPTION_WIDTH),
            LabelLines::new("Short", "")
        );
        assert_eq!(split_description("", DESCRIPTION_WIDTH), LabelLines::default());
    }

    #[test]
    fn exact_width_is_not_split() {
        let text = "a".repeat(DESCRIPTION_WIDTH);
        let lines = split_description(&text, DESCRIPTION_WIDTH);
        assert_eq!(lines.line1, text);
        assert_eq!(lines.line2, "");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_measuring() {
        let text = format!("   {}   ", "b".repeat(DESCRIPTION_WIDTH));
        let lines = split_description(&text, DESCRIPTION_WIDTH);
        assert_eq!(lines.line1, "b".repeat(DESCRIPTION_WIDTH));
        assert_eq!(lines.line2, "");
    }

    #[test]
    fn breaks_at_last_space_before_limit() {
        let lines = split_description(
            "TORNILLO HEXAGONAL ACERO INOXIDABLE M8",
            DESCRIPTION_WIDTH,
        );
        assert_eq!(lines, LabelLines::new("TORNILLO HEXAGONAL ACERO", "INOXIDABLE M8"));
        assert!(lines.line1.chars().count() <= DESCRIPTION_WIDTH);
    }

    #[test]
    fn split_preserves_words() {
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = split_description(text, DESCRIPTION_WIDTH);
        assert!(lines.line1.chars().count() <= DESCRIPTION_WIDTH);
        assert!(!lines.line1.ends_with(' '));
        assert_eq!(format!("{} {}", lines.line1, lines.line2), text);
    }

    #[test]
    fn space_at_the_limit_is_outside_the_window() {
        // 25 chars, then a space at index 25: the only break candidate lies
        // outside the searched window, so the cut is hard.
        let text = format!("{} tail", "x".repeat(25));
        let lines = split_description(&text, DESCRIPTION_WIDTH);
        assert_eq!(lines.line1, "x".repeat(25));
        assert_eq!(lines.line2, "tail");
    }

    #[test]
    fn unbroken_token_is_hard_split() {
        let text = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123";
        let lines = split_description(text, DESCRIPTION_WIDTH);
        assert_eq!(lines.line1, "ABCDEFGHIJKLMNOPQRSTUVWXY");
        assert_eq!(lines.line2, "Z0123");
    }

    #[test]
    fn second_line_is_not_resplit() {
        let text = format!("short {}", "y".repeat(40));
        let lines = split_description(&text, DESCRIPTION_WIDTH);
        assert_eq!(lines.line1, "short");
        assert_eq!(lines.line2, "y".repeat(40));
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let text = "ÑANDÚ ÁRBOL CAMIÓN PEQUEÑO AZUL";
        let lines = split_description(text, DESCRIPTION_WIDTH);
        assert_eq!(lines, LabelLines::new("ÑANDÚ ÁRBOL CAMIÓN", "PEQUEÑO AZUL"));

        let wide = "é".repeat(30);
        let lines = split_description(&wide, DESCRIPTION_WIDTH);
        assert_eq!(lines.line1, "é".repeat(25));
        assert_eq!(lines.line2, "é".repeat(5));
    }

    #[test]
    fn tabs_are_not_break_points() {
        let text = format!("abc\t{}", "d".repeat(30));
        let lines = split_description(&text, DESCRIPTION_WIDTH);
        assert_eq!(lines.line1.chars().count(), DESCRIPTION_WIDTH);
        assert!(lines.line1.starts_with("abc\t"));
    }
}
