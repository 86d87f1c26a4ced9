//! Playback state machine for word-at-a-time reading.

use log::debug;

use crate::{
    content::WordSequence,
    input::{
        InputEvent, InputProvider,
        rate::{RateConfig, RateControl},
    },
    render::{PivotSplit, PlaybackPhase, ReaderView},
};

pub const JUMP_WORDS: usize = 5;

/// Outcome of one engine tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Playback {
    Idle,
    Paused,
    /// The advance deadline lives inside the variant, so leaving the
    /// state destroys the pending schedule.
    Playing { next_word_ms: u64 },
}

/// Gesture-controlled RSVP playback over caller-owned text.
///
/// The host loop pushes events through the [`InputProvider`], calls
/// [`ReaderEngine::tick`] with a monotonic millisecond clock, and
/// redraws from [`ReaderEngine::with_view`] when asked to.
pub struct ReaderEngine<'a, IN>
where
    IN: InputProvider,
{
    input: IN,
    rate: RateControl,
    sequence: WordSequence<'a>,
    cursor: usize,
    playback: Playback,
    hint_visible: bool,
    pending_redraw: bool,
}

include!("runtime.rs");
include!("input.rs");
include!("navigation.rs");
include!("view.rs");
