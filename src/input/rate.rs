//! Continuous rate control from wheel and drag gestures.

use log::debug;

pub const WPM_STEP: u16 = 10;
/// Drag updates landing within this window of the last applied one are
/// skipped, so sub-pixel move streams cannot thrash the rate.
pub const DRAG_APPLY_INTERVAL_MS: u64 = 50;

/// Words-per-minute bounds and starting point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RateConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 100,
            max_wpm: 800,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DragSession {
    anchor_y: i32,
}

/// Converts raw gesture deltas into a clamped words-per-minute rate.
///
/// Wheel steps apply unconditionally; drag steps are debounced against
/// the last applied update. The anchor advances only when an update is
/// applied, so skipped movement keeps accumulating against the old
/// anchor.
#[derive(Clone, Copy, Debug)]
pub struct RateControl {
    config: RateConfig,
    wpm: u16,
    drag: Option<DragSession>,
    last_applied_ms: u64,
}

impl RateControl {
    pub fn new(mut config: RateConfig) -> Self {
        if config.max_wpm < config.min_wpm {
            core::mem::swap(&mut config.max_wpm, &mut config.min_wpm);
        }
        let wpm = config.wpm.clamp(config.min_wpm, config.max_wpm);

        Self {
            config,
            wpm,
            drag: None,
            last_applied_ms: 0,
        }
    }

    pub const fn wpm(&self) -> u16 {
        self.wpm
    }

    pub const fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Applies one wheel step and returns the new rate. Negative
    /// `delta_y` raises the rate, anything else lowers it.
    pub fn apply_wheel(&mut self, delta_y: i32) -> u16 {
        self.step(delta_y < 0)
    }

    /// Opens a drag session anchored at `y`. A start while a session is
    /// already active just moves the anchor.
    pub fn begin_drag(&mut self, y: i32) {
        self.drag = Some(DragSession { anchor_y: y });
    }

    /// Applies a drag movement. Returns the rate when the update was
    /// accepted; `None` when no session is active or the update falls
    /// inside the debounce window.
    pub fn apply_drag(&mut self, y: i32, now_ms: u64) -> Option<u16> {
        let session = self.drag.as_mut()?;
        if now_ms.saturating_sub(self.last_applied_ms) <= DRAG_APPLY_INTERVAL_MS {
            return None;
        }

        let delta_y = session.anchor_y - y;
        session.anchor_y = y;
        self.last_applied_ms = now_ms;

        Some(self.step(delta_y > 0))
    }

    /// Closes the drag session; moves are ignored until the next
    /// [`RateControl::begin_drag`].
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    fn step(&mut self, raise: bool) -> u16 {
        let next = if raise {
            self.wpm.saturating_add(WPM_STEP).min(self.config.max_wpm)
        } else {
            self.wpm.saturating_sub(WPM_STEP).max(self.config.min_wpm)
        };

        if next != self.wpm {
            debug!("gesture: wpm {} -> {}", self.wpm, next);
            self.wpm = next;
        }

        next
    }
}
