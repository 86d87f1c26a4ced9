impl<'a, IN> ReaderEngine<'a, IN>
where
    IN: InputProvider,
{
    /// Replaces the word sequence. Reading always restarts paused on
    /// the first word, whatever was happening before; non-empty text
    /// re-arms the onboarding hint.
    pub fn load_text(&mut self, text: &'a str) {
        self.sequence = WordSequence::tokenize(text);
        self.cursor = 0;

        if self.sequence.is_empty() {
            self.playback = Playback::Idle;
        } else {
            self.playback = Playback::Paused;
            self.hint_visible = true;
        }

        debug!("content: loaded {} words", self.sequence.len());
        self.pending_redraw = true;
    }

    /// Drops the loaded sequence entirely.
    pub fn clear(&mut self) {
        self.sequence = WordSequence::empty();
        self.cursor = 0;
        self.playback = Playback::Idle;
        self.pending_redraw = true;
    }

    /// Moves the cursor [`JUMP_WORDS`] words in the sign of `direction`,
    /// clamped to the sequence, and returns the new cursor. Playback
    /// state is untouched, so a playing engine keeps playing from the
    /// new position on the existing schedule.
    pub fn jump(&mut self, direction: i32) -> usize {
        if self.sequence.is_empty() {
            return self.cursor;
        }

        let last_index = (self.sequence.len() - 1) as isize;
        let offset = direction.signum() as isize * JUMP_WORDS as isize;
        let target = (self.cursor as isize + offset).clamp(0, last_index) as usize;

        if target != self.cursor {
            debug!("playback: jump {} -> {}", self.cursor, target);
            self.cursor = target;
            self.pending_redraw = true;
        }

        self.cursor
    }
}
