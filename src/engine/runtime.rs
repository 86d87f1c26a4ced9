impl<'a, IN> ReaderEngine<'a, IN>
where
    IN: InputProvider,
{
    /// Drains pending input, then advances playback when the schedule
    /// says so. `RenderRequested` asks the host to redraw the frame.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        if let Playback::Playing { next_word_ms } = self.playback {
            if now_ms >= next_word_ms {
                self.advance_word(now_ms);
            }
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Starts or pauses playback. No-op while nothing is loaded.
    pub fn toggle_play_pause(&mut self, now_ms: u64) {
        if self.sequence.is_empty() {
            return;
        }

        self.playback = match self.playback {
            Playback::Playing { .. } => Playback::Paused,
            Playback::Idle | Playback::Paused => Playback::Playing {
                next_word_ms: now_ms + self.word_interval_ms(),
            },
        };
        self.pending_redraw = true;
    }

    /// Parks the cursor on the first word without starting playback.
    pub fn reset(&mut self) {
        if self.sequence.is_empty() {
            return;
        }

        self.cursor = 0;
        self.playback = Playback::Paused;
        self.pending_redraw = true;
    }

    fn advance_word(&mut self, now_ms: u64) {
        let last_index = self.sequence.len().saturating_sub(1);

        if self.cursor >= last_index {
            self.cursor = 0;
            self.playback = Playback::Paused;
            debug!("playback: end of sequence, rewound");
        } else {
            self.cursor += 1;
            self.playback = Playback::Playing {
                next_word_ms: now_ms + self.word_interval_ms(),
            };
        }

        self.pending_redraw = true;
    }

    fn word_interval_ms(&self) -> u64 {
        60_000 / self.rate.wpm().max(1) as u64
    }

    fn reschedule_if_playing(&mut self, now_ms: u64) {
        if let Playback::Playing { .. } = self.playback {
            self.playback = Playback::Playing {
                next_word_ms: now_ms + self.word_interval_ms(),
            };
        }
    }
}
