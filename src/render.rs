//! View models handed to the presentation layer.

/// Optical split of a word around its fixation letter.
///
/// The pivot sits at character index `ceil(n / 2) - 1`, which keeps the
/// optically significant letter under the fixation point across word
/// lengths.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PivotSplit<'a> {
    pub before: &'a str,
    pub pivot: char,
    pub after: &'a str,
}

impl<'a> PivotSplit<'a> {
    /// Splits `word`; `None` only for the empty string.
    pub fn of(word: &'a str) -> Option<Self> {
        let char_count = word.chars().count();
        if char_count == 0 {
            return None;
        }

        let pivot_index = char_count.div_ceil(2).saturating_sub(1);
        let mut remaining = pivot_index.min(char_count - 1);

        for (offset, ch) in word.char_indices() {
            if remaining == 0 {
                let after_start = offset + ch.len_utf8();
                return Some(Self {
                    before: &word[..offset],
                    pivot: ch,
                    after: &word[after_start..],
                });
            }
            remaining -= 1;
        }

        None
    }
}

/// Playback phase as observed by the presentation layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackPhase {
    /// No words loaded.
    Idle,
    /// Words loaded, cursor parked.
    Paused,
    /// Advancing on the rate-derived schedule.
    Playing,
}

/// Per-frame view model built by the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReaderView<'a> {
    /// Nothing loaded; prompt for input text.
    Empty { wpm: u16 },
    Word {
        split: PivotSplit<'a>,
        /// Zero-based cursor into the sequence.
        word_index: usize,
        word_total: usize,
        wpm: u16,
        playing: bool,
        /// One-time gesture onboarding hint.
        hint_visible: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_recombines_to_the_word() {
        for word in ["a", "be", "the", "speed", "reading", "glimpse!"] {
            let split = PivotSplit::of(word).unwrap();
            let pivot_len = split.pivot.len_utf8();
            assert_eq!(split.before.len() + pivot_len + split.after.len(), word.len());
            assert!(word.starts_with(split.before));
            assert!(word.ends_with(split.after));
            assert_eq!(word[split.before.len()..].chars().next(), Some(split.pivot));
        }
    }

    #[test]
    fn single_character_pivots_on_itself() {
        let split = PivotSplit::of("a").unwrap();
        assert_eq!(split.before, "");
        assert_eq!(split.pivot, 'a');
        assert_eq!(split.after, "");
    }

    #[test]
    fn pivot_index_is_ceil_half_minus_one() {
        let split = PivotSplit::of("speed").unwrap();
        assert_eq!(split.before, "sp");
        assert_eq!(split.pivot, 'e');
        assert_eq!(split.after, "ed");

        let even = PivotSplit::of("word").unwrap();
        assert_eq!(even.before, "w");
        assert_eq!(even.pivot, 'o');
        assert_eq!(even.after, "rd");
    }

    #[test]
    fn multibyte_words_split_on_character_boundaries() {
        let split = PivotSplit::of("añejo").unwrap();
        assert_eq!(split.before, "añ");
        assert_eq!(split.pivot, 'e');
        assert_eq!(split.after, "jo");
    }

    #[test]
    fn empty_word_has_no_split() {
        assert_eq!(PivotSplit::of(""), None);
    }
}
