//! Word sequencing over caller-owned text.

mod text_utils;

use text_utils::{count_words, scan_word, strip_trailing_punctuation};

/// Built-in demo text shown until the user pastes their own.
pub const WELCOME_TEXT: &str = "Welcome to the speed reader demo! This is a sample \
text to help you get started. Try pasting your own text here, or continue reading \
this demo. You can adjust the reading speed by scrolling up or down, or by dragging \
on a touch screen. Jump forward or backward to move five words at a time.";

pub fn welcome_sequence() -> WordSequence<'static> {
    WordSequence::tokenize(WELCOME_TEXT)
}

/// Ordered, immutable view of the displayable words in a piece of text.
///
/// Built once by [`WordSequence::tokenize`] and replaced wholesale when
/// the source text changes. Word boundaries are found by scanning the
/// borrowed text, so the sequence itself stays a two-word struct with no
/// capacity limit.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WordSequence<'a> {
    text: &'a str,
    word_count: usize,
}

impl<'a> WordSequence<'a> {
    /// Sequence with no words; every lookup returns `None`.
    pub const fn empty() -> Self {
        Self {
            text: "",
            word_count: 0,
        }
    }

    /// Splits `text` on runs of whitespace. Whitespace-only input yields
    /// the empty sequence.
    pub fn tokenize(text: &'a str) -> Self {
        let text = text.trim();
        Self {
            text,
            word_count: count_words(text),
        }
    }

    pub const fn len(&self) -> usize {
        self.word_count
    }

    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Word at `index` with one trailing punctuation mark removed.
    pub fn word_at(&self, index: usize) -> Option<&'a str> {
        if index >= self.word_count {
            return None;
        }

        let mut cursor = 0usize;
        let mut remaining = index;

        while let Some((start, end)) = scan_word(self.text, cursor) {
            if remaining == 0 {
                return Some(strip_trailing_punctuation(&self.text[start..end]));
            }
            remaining -= 1;
            cursor = end;
        }

        None
    }

    pub fn words(&self) -> WordIter<'a> {
        WordIter {
            text: self.text,
            cursor: 0,
        }
    }
}

/// Iterator over the normalized words of a [`WordSequence`].
#[derive(Clone, Debug)]
pub struct WordIter<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for WordIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (start, end) = scan_word(self.text, self.cursor)?;
        self.cursor = end;
        Some(strip_trailing_punctuation(&self.text[start..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<'a>(sequence: &WordSequence<'a>) -> heapless::Vec<&'a str, 16> {
        sequence.words().collect()
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_sequences() {
        assert!(WordSequence::tokenize("").is_empty());
        assert!(WordSequence::tokenize("   ").is_empty());
        assert!(WordSequence::tokenize(" \t\n ").is_empty());
        assert_eq!(WordSequence::tokenize("").len(), 0);
    }

    #[test]
    fn trailing_punctuation_is_stripped_once() {
        let sequence = WordSequence::tokenize("Hello, world!");
        assert_eq!(sequence.len(), 2);
        assert_eq!(collect(&sequence).as_slice(), ["Hello", "world"]);

        let repeated = WordSequence::tokenize("wait...");
        assert_eq!(collect(&repeated).as_slice(), ["wait.."]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        let sequence = WordSequence::tokenize("a  b\tc");
        assert_eq!(collect(&sequence).as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn lone_punctuation_tokens_stay_non_empty() {
        let sequence = WordSequence::tokenize("pause . resume");
        assert_eq!(collect(&sequence).as_slice(), ["pause", ".", "resume"]);
    }

    #[test]
    fn word_at_matches_iteration_order() {
        let sequence = WordSequence::tokenize("  uno dos tres  ");
        assert_eq!(sequence.word_at(0), Some("uno"));
        assert_eq!(sequence.word_at(2), Some("tres"));
        assert_eq!(sequence.word_at(3), None);
    }

    #[test]
    fn welcome_text_tokenizes_to_content() {
        let sequence = welcome_sequence();
        assert!(!sequence.is_empty());
        assert_eq!(sequence.word_at(0), Some("Welcome"));
        assert_eq!(sequence.words().count(), sequence.len());
    }

    #[test]
    fn tokenize_is_deterministic() {
        let first = WordSequence::tokenize("same input. twice");
        let second = WordSequence::tokenize("same input. twice");
        assert_eq!(first, second);
        assert!(collect(&first).iter().eq(collect(&second).iter()));
    }
}
