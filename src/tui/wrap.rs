// Word wrapping for multi-line labels
//
// Rows are measured and drawn from the same wrapped lines, so the height a row
// asks for always matches what it paints. Nothing is ever truncated: words
// wider than the available width are split across lines instead.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text to fit within `width` columns, breaking at word boundaries
///
/// - Explicit newlines start a new line
/// - Runs of whitespace inside a line collapse to a single space
/// - Empty input yields a single empty line (labels never collapse to zero height)
///
/// Uses unicode display width for correct handling of emojis, CJK, etc.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, &mut lines);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in paragraph.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            // Flush what we have, then hard-break the long word
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for piece in split_long_word(word, width) {
                current_width = piece.width();
                current = piece;
                if current_width >= width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    // Blank paragraphs still take up a line
    if !current.is_empty() || paragraph.trim().is_empty() {
        lines.push(current);
    }
}

/// Split a word into chunks no wider than `width` columns
fn split_long_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0usize;

    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if piece_width + char_width > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += char_width;
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("Bonjour", 20), vec!["Bonjour"]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", 20), vec![""]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn long_words_are_split_not_clipped() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
        assert_eq!(lines.concat(), "abcdefghij");
    }

    #[test]
    fn long_word_followed_by_short_word() {
        assert_eq!(wrap_text("abcdefg hi", 4), vec!["abcd", "efg", "hi"]);
    }

    #[test]
    fn respects_double_width_characters() {
        // Each of these is 2 columns wide
        let lines = wrap_text("日本語テキスト", 6);
        assert_eq!(lines, vec!["日本語", "テキス", "ト"]);
        for line in &lines {
            assert!(line.width() <= 6);
        }
    }

    #[test]
    fn newlines_start_new_lines() {
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn zero_width_is_treated_as_one_column() {
        assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn every_word_survives_wrapping() {
        let text = "Could you tell me where the nearest train station is? I need to get downtown";
        let joined = wrap_text(text, 13).join(" ");
        for word in text.split_whitespace() {
            assert!(joined.contains(word), "missing {word}");
        }
    }
}
