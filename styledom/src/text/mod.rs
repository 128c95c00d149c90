use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap. Words wider than the line are truncated rather than
/// split. Always returns at least one line for non-empty input.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || s.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for input_line in s.split('\n') {
        let mut line = String::new();
        let mut width = 0;
        for word in input_line.split_whitespace() {
            let word = truncate_to_width(word, max_width);
            let word_width = display_width(&word);
            let gap = usize::from(!line.is_empty());
            if width + gap + word_width > max_width {
                lines.push(std::mem::take(&mut line));
                width = 0;
            } else if gap == 1 {
                line.push(' ');
                width += 1;
            }
            line.push_str(&word);
            width += word_width;
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(wrap_words("3 Unique Colors", 9), vec!["3 Unique", "Colors"]);
    }

    #[test]
    fn truncates_overlong_words() {
        assert_eq!(wrap_words("declarations", 5), vec!["decl…"]);
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_words("", 10).is_empty());
    }
}
