use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i < byte_offset)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        // CJK chars are 2 cells wide
        assert_eq!(truncate_to_width("日本語のタイトル", 5), "日本…");
    }

    #[test]
    fn test_grapheme_boundaries_handle_umlauts() {
        let s = "Müll";
        let after_m = next_grapheme_boundary(s, 0).unwrap();
        assert_eq!(&s[..after_m], "M");
        let after_u = next_grapheme_boundary(s, after_m).unwrap();
        assert_eq!(&s[after_m..after_u], "ü");
        assert_eq!(prev_grapheme_boundary(s, after_u), Some(after_m));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
        assert_eq!(next_grapheme_boundary(s, s.len()), None);
    }
}
