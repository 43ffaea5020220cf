use crate::word::Word;

// Whitespace, plus the UTF-8 byte order mark.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Splits a document into trimmed words.
///
/// The document is trimmed as a whole first, so leading and trailing blank
/// lines disappear; line numbers still refer to the untrimmed text.
pub fn words(text: &str) -> Vec<Word> {
    let body = text.trim_matches(is_blank);
    if body.is_empty() {
        return Vec::new();
    }
    let leading = text.len() - text.trim_start_matches(is_blank).len();
    let offset = text[..leading].matches('\n').count();

    body.split('\n')
        .enumerate()
        .map(|(i, raw)| Word::new(offset + i + 1, raw.trim_matches(is_blank)))
        .collect()
}
