impl<'a, IN> ReaderEngine<'a, IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    debug!("input: provider error, stopping drain");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Wheel { delta_y } => {
                let _ = self.apply_wheel_delta(delta_y, now_ms);
            }
            InputEvent::TouchStart { y } => self.begin_gesture(y),
            InputEvent::TouchMove { y, at_ms } => {
                let _ = self.apply_drag_delta(y, at_ms);
            }
            InputEvent::TouchEnd => self.end_gesture(),
            InputEvent::PlayPause => self.toggle_play_pause(now_ms),
            InputEvent::Reset => self.reset(),
            InputEvent::Clear => self.clear(),
            InputEvent::JumpBack => {
                let _ = self.jump(-1);
            }
            InputEvent::JumpForward => {
                let _ = self.jump(1);
            }
        }
    }

    /// Applies one wheel step and returns the resulting rate.
    pub fn apply_wheel_delta(&mut self, delta_y: i32, now_ms: u64) -> u16 {
        let previous = self.rate.wpm();
        let wpm = self.rate.apply_wheel(delta_y);
        if wpm != previous {
            self.on_rate_changed(now_ms);
        }
        wpm
    }

    /// Opens a drag session and dismisses the onboarding hint.
    pub fn begin_gesture(&mut self, y: i32) {
        self.hint_visible = false;
        self.rate.begin_drag(y);
        self.pending_redraw = true;
    }

    /// Applies a drag movement at its event timestamp. Returns the rate
    /// when the update was accepted.
    pub fn apply_drag_delta(&mut self, y: i32, at_ms: u64) -> Option<u16> {
        let previous = self.rate.wpm();
        let wpm = self.rate.apply_drag(y, at_ms)?;
        if wpm != previous {
            self.on_rate_changed(at_ms);
        }
        Some(wpm)
    }

    /// Closes the drag session.
    pub fn end_gesture(&mut self) {
        self.rate.end_drag();
    }

    fn on_rate_changed(&mut self, now_ms: u64) {
        // The advance interval derives from the current rate.
        self.reschedule_if_playing(now_ms);
        self.pending_redraw = true;
    }
}
