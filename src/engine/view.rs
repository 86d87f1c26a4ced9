impl<'a, IN> ReaderEngine<'a, IN>
where
    IN: InputProvider,
{
    pub fn new(input: IN, config: RateConfig) -> Self {
        Self {
            input,
            rate: RateControl::new(config),
            sequence: WordSequence::empty(),
            cursor: 0,
            playback: Playback::Idle,
            hint_visible: true,
            pending_redraw: true,
        }
    }

    /// Builds the current frame and hands it to `f`.
    pub fn with_view<R, F>(&self, f: F) -> R
    where
        F: FnOnce(ReaderView<'_>) -> R,
    {
        let wpm = self.rate.wpm();

        let Some(word) = self.sequence.word_at(self.cursor) else {
            return f(ReaderView::Empty { wpm });
        };
        let Some(split) = PivotSplit::of(word) else {
            return f(ReaderView::Empty { wpm });
        };

        f(ReaderView::Word {
            split,
            word_index: self.cursor,
            word_total: self.sequence.len(),
            wpm,
            playing: self.is_playing(),
            hint_visible: self.hint_visible,
        })
    }

    /// Host access to the owned input provider, e.g. to push events
    /// into an [`crate::input::queue::EventQueue`] before the next tick.
    pub fn with_input_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut IN) -> R,
    {
        f(&mut self.input)
    }

    pub const fn wpm(&self) -> u16 {
        self.rate.wpm()
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn word_count(&self) -> usize {
        self.sequence.len()
    }

    pub const fn has_content(&self) -> bool {
        !self.sequence.is_empty()
    }

    pub const fn is_playing(&self) -> bool {
        matches!(self.playback, Playback::Playing { .. })
    }

    pub const fn phase(&self) -> PlaybackPhase {
        match self.playback {
            Playback::Idle => PlaybackPhase::Idle,
            Playback::Paused => PlaybackPhase::Paused,
            Playback::Playing { .. } => PlaybackPhase::Playing,
        }
    }

    pub const fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Whether a drag-rate session is currently open.
    pub const fn gesture_active(&self) -> bool {
        self.rate.drag_active()
    }
}
