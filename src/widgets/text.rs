use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when
/// anything was removed.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_to_width("main", 10), "main");
        assert_eq!(truncate_to_width("main", 4), "main");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("feature-branch", 8), "feature…");
    }

    #[test]
    fn test_wide_chars_count_double() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_to_width("分支分支", 5), "分支…");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
