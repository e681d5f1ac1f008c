// LogClassify - core/lines.rs
//
// Line splitting: turns the raw buffer into the ordered LogLine sequence.
// Splits on '\n' only and drops exact-empty entries. Nothing is trimmed, so
// whitespace-only lines and trailing '\r' survive.

use crate::core::model::LogLine;

/// Split `raw` into the lines that will be submitted, in order.
pub fn split_lines(raw: &str) -> Vec<LogLine> {
    raw.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Number of lines `split_lines` would return, without allocating them.
pub fn count_lines(raw: &str) -> usize {
    raw.split('\n').filter(|line| !line.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_simple_split_preserves_order() {
        assert_eq!(split_lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_blank_lines_removed() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("\n\n\n"), Vec::<String>::new());
    }

    #[test]
    fn test_trailing_newline_has_no_spurious_entry() {
        assert_eq!(
            split_lines("error: disk full\nwarning: low memory\n"),
            vec!["error: disk full", "warning: low memory"]
        );
    }

    #[test]
    fn test_whitespace_only_lines_are_kept() {
        assert_eq!(split_lines("a\n   \nb"), vec!["a", "   ", "b"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(split_lines("x\nx"), vec!["x", "x"]);
    }

    #[test]
    fn test_crlf_keeps_carriage_return() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn test_count_matches_split() {
        for text in ["", "a", "a\n\nb\n", "\n  \n", "one\ntwo\nthree"] {
            assert_eq!(count_lines(text), split_lines(text).len(), "{text:?}");
        }
    }
}
