pub(super) fn scan_word(text: &str, mut cursor: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    while cursor < len && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }
    if cursor >= len {
        return None;
    }

    let start = cursor;
    while cursor < len && !bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }

    Some((start, cursor))
}

pub(super) fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some((_, end)) = scan_word(text, cursor) {
        count += 1;
        cursor = end;
    }

    count
}

/// Drops one trailing `. , ! ? ; :` mark. Tokens that are nothing but a
/// single mark are returned as-is so words never become empty.
pub(super) fn strip_trailing_punctuation(word: &str) -> &str {
    let stripped = match word.as_bytes() {
        [.., b'.' | b',' | b'!' | b'?' | b';' | b':'] => &word[..word.len() - 1],
        _ => word,
    };

    if stripped.is_empty() { word } else { stripped }
}
