use crate::parsers::text::{self, MIN_LINE_CHARS, TextCleanOptions};

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_line_length_boundary() {
        let thirty = "x".repeat(30);
        let twenty_nine = "y".repeat(29);
        assert_eq!(MIN_LINE_CHARS, 30);

        let input = format!("{}\n{}", thirty, twenty_nine);
        assert_eq!(text::clean(&input), thirty);
    }

    #[test]
    fn test_line_length_counts_characters_not_bytes() {
        // 30 characters, 60 bytes
        let accented = "é".repeat(30);
        assert_eq!(text::clean(&accented), accented);
    }

    #[test]
    fn test_collapse_line_endings() {
        assert_eq!(text::collapse_line_endings("alpha  \t\nbeta"), "alpha\nbeta");
        assert_eq!(text::collapse_line_endings("alpha\n\n\n\n\nbeta"), "alpha\nbeta");
        assert_eq!(text::collapse_line_endings("no newline here"), "no newline here");
    }

    #[test]
    fn test_split_into_lines() {
        let lines = text::split_into_lines("  first   line \r\n\tsecond\t\tline\t");
        assert_eq!(lines, vec!["first line", "", "second line"]);
    }

    #[test]
    fn test_filter_short_lines() {
        let lines = vec!["short".to_string(), "z".repeat(31), String::new()];
        let kept = text::filter_short_lines(lines, MIN_LINE_CHARS);
        assert_eq!(kept, vec!["z".repeat(31)]);
    }

    #[test]
    fn test_normalize_whitespace_in_segment() {
        assert_eq!(text::normalize_whitespace_in_segment("a  b\t\tc \td"), "a b c d");
        assert_eq!(text::normalize_whitespace_in_segment("a b\tc"), "a b\tc");
    }

    #[test]
    fn test_clean_empty_and_blank_input() {
        assert_eq!(text::clean(""), "");
        assert_eq!(text::clean("   \n\t\n  "), "");
        assert_eq!(text::clean("Home\nAbout\nContact"), "");
    }

    #[test]
    fn test_clean_collapses_inner_whitespace() {
        let input = format!("   {}\t\t{}   \n\n\n", "x".repeat(20), "y".repeat(20));
        assert_eq!(
            text::clean(&input),
            format!("{} {}", "x".repeat(20), "y".repeat(20))
        );
    }

    #[test]
    fn test_line_shrunk_below_threshold_is_dropped() {
        // 38 characters as written, 29 once the space run collapses
        let line = format!("{}{}{}", "a".repeat(14), " ".repeat(10), "b".repeat(14));
        assert_eq!(text::clean(&line), "");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let input = format!(
            "Menu\n\n\n   {}  {}   \n{}\t\t{}\n\nFooter\r\n{}{}{}",
            "Fresh bread baked",
            "every morning since 1982",
            "Call us to order a custom cake",
            "for your next celebration",
            "a".repeat(14),
            " ".repeat(10),
            "b".repeat(15),
        );

        let once = text::clean(&input);
        assert!(!once.is_empty());
        assert_eq!(text::clean(&once), once);
        assert!(once.lines().all(|line| line.chars().count() >= MIN_LINE_CHARS));
    }

    #[test]
    fn test_custom_threshold() {
        let options = TextCleanOptions { min_line_chars: 5 };
        let result = text::clean_with_options("Hi\nHello\nHey there", &options);
        assert_eq!(result, "Hello\nHey there");
    }
}
