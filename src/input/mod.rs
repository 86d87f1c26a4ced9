//! Input abstraction layer.

pub mod mock;
pub mod queue;
pub mod rate;

/// Raw interaction events produced by the presentation layer.
///
/// Gesture events carry raw platform coordinates; the core never touches
/// input device APIs directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Pointer-wheel step. Negative `delta_y` raises the rate.
    Wheel { delta_y: i32 },
    /// Finger down; opens a drag-rate session anchored at `y`.
    TouchStart { y: i32 },
    /// Finger move, stamped with the monotonic event time.
    TouchMove { y: i32, at_ms: u64 },
    /// Finger lifted; closes the session.
    TouchEnd,
    PlayPause,
    Reset,
    Clear,
    JumpBack,
    JumpForward,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
