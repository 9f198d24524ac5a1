use regex::Regex;
use std::sync::LazyLock;

/// Lines shorter than this many characters are dropped as navigation or footer noise
pub const MIN_LINE_CHARS: usize = 30;

static WHITESPACE_BEFORE_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\n").expect("valid regex"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static INLINE_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

/// Configuration options for text cleaning
#[derive(Debug, Clone, Copy)]
pub struct TextCleanOptions {
    /// Minimum number of characters a line needs to survive
    pub min_line_chars: usize,
}

impl Default for TextCleanOptions {
    fn default() -> Self {
        Self {
            min_line_chars: MIN_LINE_CHARS,
        }
    }
}

/// Cleans extracted page text with the default options
///
/// The result is stable: cleaning already-cleaned text returns it unchanged.
pub fn clean(text: &str) -> String {
    clean_with_options(text, &TextCleanOptions::default())
}

/// Cleans extracted page text
pub fn clean_with_options(text: &str, options: &TextCleanOptions) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let text = collapse_line_endings(text);
    let lines = split_into_lines(&text);
    let kept = filter_short_lines(lines, options.min_line_chars);

    normalize_whitespace_in_segment(&kept.join("\n"))
        .trim()
        .to_string()
}

//
// Core text processing functions
//

/// Collapses trailing whitespace before each newline and limits blank-line runs to one
pub fn collapse_line_endings(text: &str) -> String {
    let text = WHITESPACE_BEFORE_NEWLINE.replace_all(text, "\n");
    EXCESS_NEWLINES.replace_all(&text, "\n\n").into_owned()
}

/// Splits text into trimmed lines with inner space runs collapsed
pub fn split_into_lines(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(|line| normalize_whitespace_in_segment(line.trim()))
        .collect()
}

/// Keeps only lines with at least `min_chars` characters
pub fn filter_short_lines(lines: Vec<String>, min_chars: usize) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| line.chars().count() >= min_chars)
        .collect()
}

/// Collapses runs of two or more spaces or tabs into a single space
pub fn normalize_whitespace_in_segment(segment: &str) -> String {
    INLINE_SPACE_RUN.replace_all(segment, " ").into_owned()
}
